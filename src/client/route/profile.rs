use dioxus::prelude::*;

use crate::client::{
    component::Page,
    model::cart::{format_price, Cart},
    router::Route,
};

#[component]
pub fn Profile() -> Element {
    let cart = use_context::<Signal<Cart>>();
    let cart = cart.read();
    let total = format_price(cart.total());

    rsx! {
        Page {
            h1 { "Profile" }
            p { "You are browsing as a guest." }
            div {
                class: "card",
                div {
                    class: "card-body",
                    h3 { class: "card-title", "Current cart" }
                    p { "{cart.item_count()} item(s), {total}" }
                    Link { to: Route::Cart {}, class: "btn btn-outline", "View cart" }
                }
            }
            Link { to: Route::Login {}, class: "btn btn-primary", "Login" }
        }
    }
}
