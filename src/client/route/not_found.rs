use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Page {
            class: "page-center",
            h1 { "404" }
            p { "There is no page at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to home" }
        }
    }
}
