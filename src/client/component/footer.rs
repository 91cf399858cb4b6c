use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Footer() -> Element {
    rsx!(footer {
        class: "footer",
        p { "© {SITE_NAME}" }
        nav {
            Link { to: Route::About {}, "About" }
            Link { to: Route::Contact {}, "Contact" }
            Link { to: Route::AdminDashboard {}, "Admin" }
        }
    })
}
