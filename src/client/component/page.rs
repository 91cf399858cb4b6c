use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "page {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "page-center",
            span { class: "spinner" }
        }
    )
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx!(
        div {
            class: "alert alert-error",
            p { "{message}" }
        }
    )
}
