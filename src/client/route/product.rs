use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorMessage, LoadingPage, Page, Pagination, ProductCard},
        model::cache::Cache,
    },
    model::{category::CategoryDto, pagination::PageDto, product::ProductDto},
};

#[cfg(feature = "web")]
use crate::client::{
    api::{category::get_categories, product::get_products},
    constant::PRODUCT_PAGE_SIZE,
};

#[component]
pub fn Product() -> Element {
    #[allow(unused_mut)]
    let mut categories = use_signal(Cache::<Vec<CategoryDto>>::default);
    #[allow(unused_mut)]
    let mut products = use_signal(Cache::<PageDto<ProductDto>>::default);
    let mut selected_category = use_signal(|| None::<i32>);
    let mut page = use_signal(|| 0u64);

    #[cfg(feature = "web")]
    {
        use_effect(move || {
            spawn(async move {
                categories.set(get_categories().await.into());
            });
        });

        use_effect(move || {
            let page = page();
            let category_id = selected_category();
            spawn(async move {
                products.set(Cache::Loading);
                products.set(
                    get_products(page, PRODUCT_PAGE_SIZE, category_id)
                        .await
                        .into(),
                );
            });
        });
    }

    let products = products.read();
    let categories = categories.read();
    let total_pages = products.data().map(|p| p.total_pages).unwrap_or(0);
    let current_category = selected_category();

    rsx! {
        Page {
            class: "catalog",
            aside {
                class: "catalog-filter",
                h2 { "Categories" }
                ul {
                    li {
                        button {
                            class: filter_class(current_category.is_none()),
                            onclick: move |_| {
                                selected_category.set(None);
                                page.set(0);
                            },
                            "All"
                        }
                    }
                    if let Some(list) = categories.data() {
                        for category in list.iter().cloned() {
                            li {
                                key: "{category.id}",
                                button {
                                    class: filter_class(current_category == Some(category.id)),
                                    onclick: move |_| {
                                        selected_category.set(Some(category.id));
                                        page.set(0);
                                    },
                                    "{category.name}"
                                }
                            }
                        }
                    }
                }
            }
            section {
                class: "catalog-products",
                match &*products {
                    Cache::Fetched(result) if result.items.is_empty() => rsx! {
                        p { "No products found." }
                    },
                    Cache::Fetched(result) => rsx! {
                        div {
                            class: "grid",
                            for product in result.items.iter().cloned() {
                                ProductCard { key: "{product.id}", product }
                            }
                        }
                    },
                    Cache::Error(error) => rsx! { ErrorMessage { message: error.message.clone() } },
                    _ => rsx! { LoadingPage {} },
                }
                Pagination { page, total_pages }
            }
        }
    }
}

fn filter_class(active: bool) -> &'static str {
    if active {
        "link active"
    } else {
        "link"
    }
}
