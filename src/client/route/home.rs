use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorMessage, LoadingPage, Page, ProductCard},
        model::cache::Cache,
        router::Route,
    },
    model::product::ProductDto,
};

#[cfg(feature = "web")]
use crate::client::{api::product::get_products, constant::FEATURED_PRODUCT_COUNT};

#[component]
pub fn Home() -> Element {
    #[allow(unused_mut)]
    let mut featured = use_signal(Cache::<Vec<ProductDto>>::default);

    #[cfg(feature = "web")]
    {
        use_effect(move || {
            spawn(async move {
                let result = get_products(0, FEATURED_PRODUCT_COUNT, None)
                    .await
                    .map(|page| page.items);
                featured.set(result.into());
            });
        });
    }

    let featured = featured.read();

    rsx! {
        Page {
            section {
                class: "hero",
                h1 { "New season, new favourites" }
                p { "Browse the latest arrivals and read what other customers think." }
                Link { to: Route::Product {}, class: "btn btn-primary", "Shop now" }
            }
            h2 { class: "section-title", "Featured products" }
            match &*featured {
                Cache::Fetched(products) => rsx! {
                    div {
                        class: "grid",
                        for product in products.iter().cloned() {
                            ProductCard { key: "{product.id}", product }
                        }
                    }
                },
                Cache::Error(error) => rsx! { ErrorMessage { message: error.message.clone() } },
                _ => rsx! { LoadingPage {} },
            }
        }
    }
}
