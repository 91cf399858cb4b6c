use dioxus::prelude::*;

use crate::{
    client::{
        constant::STORAGE_URL,
        model::cart::{format_price, Cart},
        router::Route,
    },
    model::product::ProductDto,
};

#[component]
pub fn ProductCard(product: ProductDto) -> Element {
    let mut cart = use_context::<Signal<Cart>>();
    let price = format_price(product.price);
    let id = product.id;
    let cart_product = product.clone();

    rsx!(div {
        class: "card",
        Link {
            to: Route::DetailProduct { id },
            if let Some(image) = &product.image {
                img {
                    class: "card-image",
                    src: "{STORAGE_URL}/{image}",
                    alt: "{product.name}",
                }
            } else {
                div { class: "card-image card-image-empty" }
            }
            h3 { class: "card-title", "{product.name}" }
        }
        p { class: "card-price", "{price}" }
        button {
            class: "btn btn-primary",
            onclick: move |_| cart.write().add(&cart_product, 1),
            "Add to cart"
        }
    })
}
