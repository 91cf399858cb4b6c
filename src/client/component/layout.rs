use dioxus::prelude::*;

use crate::client::{
    component::{Footer, Header},
    constant::SITE_NAME,
    router::Route,
};

/// Root layout of every page.
///
/// Rendered for each navigation, so it is where the document title follows the route.
#[component]
pub fn Layout() -> Element {
    let route = use_route::<Route>();
    let title = route.title();

    rsx!(
        Title { "{title} | {SITE_NAME}" }
        div {
            class: "app",
            Header {}
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    )
}
