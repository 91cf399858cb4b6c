use dioxus::prelude::*;

use crate::client::{
    component::Page,
    constant::STORAGE_URL,
    model::cart::{format_price, Cart as CartState},
    router::Route,
};

#[component]
pub fn Cart() -> Element {
    let mut cart = use_context::<Signal<CartState>>();
    let state = cart.read();
    let total = format_price(state.total());

    rsx! {
        Page {
            h1 { "Your cart" }
            if state.is_empty() {
                p { "Your cart is empty." }
                Link { to: Route::Product {}, class: "btn btn-primary", "Continue shopping" }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Product" }
                            th { "Price" }
                            th { "Quantity" }
                            th { "Subtotal" }
                            th {}
                        }
                    }
                    tbody {
                        for line in state.lines().iter().cloned() {
                            tr {
                                key: "{line.product_id}",
                                td {
                                    class: "cart-product",
                                    if let Some(image) = &line.image {
                                        img { class: "cart-thumb", src: "{STORAGE_URL}/{image}", alt: "{line.name}" }
                                    }
                                    Link { to: Route::DetailProduct { id: line.product_id }, "{line.name}" }
                                }
                                td { {format_price(line.price)} }
                                td {
                                    input {
                                        class: "input input-small",
                                        r#type: "number",
                                        min: "0",
                                        value: "{line.quantity}",
                                        oninput: move |evt| {
                                            if let Ok(quantity) = evt.value().parse::<u32>() {
                                                cart.write().set_quantity(line.product_id, quantity);
                                            }
                                        },
                                    }
                                }
                                td { {format_price(line.subtotal())} }
                                td {
                                    button {
                                        class: "btn btn-danger",
                                        onclick: move |_| cart.write().remove(line.product_id),
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "cart-summary",
                    p { "Total: " strong { "{total}" } }
                    Link { to: Route::Checkout {}, class: "btn btn-primary", "Proceed to checkout" }
                }
            }
        }
    }
}
