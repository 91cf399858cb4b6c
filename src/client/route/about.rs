use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn About() -> Element {
    rsx! {
        Page {
            h1 { "About {SITE_NAME}" }
            p {
                "We are a small team selling clothing and accessories we would wear ourselves. "
                "Every product in the catalogue is picked by hand and reviewed by real customers."
            }
            h2 { "What we care about" }
            ul {
                li { "Honest prices with no hidden fees" }
                li { "Delivery within three working days" }
                li { "Free returns for thirty days after purchase" }
            }
            Link { to: Route::Contact {}, class: "btn btn-outline", "Get in touch" }
        }
    }
}
