use dioxus::prelude::*;

/// Previous/next controls over a zero-based page index.
#[component]
pub fn Pagination(mut page: Signal<u64>, total_pages: u64) -> Element {
    if total_pages <= 1 {
        return rsx!();
    }

    let current = page();

    rsx!(
        div {
            class: "pagination",
            button {
                class: "btn btn-sm",
                disabled: current == 0,
                onclick: move |_| {
                    if page() > 0 {
                        page.set(page() - 1);
                    }
                },
                "«"
            }
            span { "Page {current + 1} of {total_pages}" }
            button {
                class: "btn btn-sm",
                disabled: current + 1 >= total_pages,
                onclick: move |_| {
                    if page() + 1 < total_pages {
                        page.set(page() + 1);
                    }
                },
                "»"
            }
        }
    )
}
