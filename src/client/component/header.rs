use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCartShopping, FaUser},
    Icon,
};

use crate::client::{constant::SITE_NAME, model::cart::Cart, router::Route};

#[component]
pub fn Header() -> Element {
    let cart = use_context::<Signal<Cart>>();
    let item_count = cart.read().item_count();

    rsx!(header {
        class: "header",
        Link {
            to: Route::Home {},
            class: "header-brand",
            {SITE_NAME}
        }
        nav {
            class: "header-nav",
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Product {}, "Products" }
            Link { to: Route::Blog {}, "Blog" }
            Link { to: Route::About {}, "About" }
            Link { to: Route::Contact {}, "Contact" }
        }
        div {
            class: "header-actions",
            Link {
                to: Route::Cart {},
                class: "header-cart",
                Icon { width: 20, height: 20, icon: FaCartShopping }
                if item_count > 0 {
                    span { class: "badge", "{item_count}" }
                }
            }
            Link {
                to: Route::Profile {},
                Icon { width: 20, height: 20, icon: FaUser }
            }
            Link { to: Route::Login {}, class: "btn btn-outline", "Login" }
        }
    })
}
