use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorMessage, LoadingPage, Page},
        constant::STORAGE_URL,
        model::{
            cache::Cache,
            cart::{format_price, Cart},
        },
        router::Route,
    },
    model::{comment::CommentDto, product::ProductDto},
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        comment::{create_comment, get_product_comments},
        product::get_product,
    },
    model::comment::CreateCommentDto,
};

#[component]
pub fn DetailProduct(id: i32) -> Element {
    #[allow(unused_mut)]
    let mut product = use_signal(Cache::<ProductDto>::default);
    #[allow(unused_mut)]
    let mut comments = use_signal(Cache::<Vec<CommentDto>>::default);

    #[cfg(feature = "web")]
    {
        use_effect(use_reactive!(|id| {
            spawn(async move {
                product.set(Cache::Loading);
                product.set(get_product(id).await.into());
                comments.set(get_product_comments(id).await.into());
            });
        }));
    }

    let product = product.read();

    rsx! {
        Page {
            match &*product {
                Cache::Fetched(product) => rsx! {
                    ProductDetails { product: product.clone() }
                    section {
                        class: "reviews",
                        h2 { "Reviews" }
                        ReviewForm { product_id: product.id, comments }
                        ReviewList { comments }
                    }
                },
                Cache::Error(error) if error.is_not_found() => rsx! {
                    p { "This product does not exist." }
                    Link { to: Route::Product {}, "Back to products" }
                },
                Cache::Error(error) => rsx! { ErrorMessage { message: error.message.clone() } },
                _ => rsx! { LoadingPage {} },
            }
        }
    }
}

#[component]
fn ProductDetails(product: ProductDto) -> Element {
    let mut cart = use_context::<Signal<Cart>>();
    let mut quantity = use_signal(|| 1u32);
    let price = format_price(product.price);
    let cart_product = product.clone();

    rsx! {
        div {
            class: "product-detail",
            if let Some(image) = &product.image {
                img {
                    class: "product-detail-image",
                    src: "{STORAGE_URL}/{image}",
                    alt: "{product.name}",
                }
            }
            div {
                h1 { "{product.name}" }
                p { class: "card-price", "{price}" }
                if let Some(description) = &product.description {
                    p { "{description}" }
                }
                div {
                    class: "form-row",
                    input {
                        class: "input",
                        r#type: "number",
                        min: "1",
                        value: "{quantity}",
                        oninput: move |evt| {
                            if let Ok(value) = evt.value().parse::<u32>() {
                                quantity.set(value.max(1));
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| cart.write().add(&cart_product, quantity()),
                        "Add to cart"
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewList(comments: Signal<Cache<Vec<CommentDto>>>) -> Element {
    let comments = comments.read();

    rsx! {
        match &*comments {
            Cache::Fetched(list) if list.is_empty() => rsx! {
                p { "No reviews yet. Be the first to write one." }
            },
            Cache::Fetched(list) => rsx! {
                ul {
                    class: "review-list",
                    for comment in list.iter() {
                        li {
                            key: "{comment.id}",
                            p { class: "review-author", "{comment.name}" }
                            p { "{comment.comment}" }
                            p {
                                class: "review-date",
                                {comment.created_at.format("%Y-%m-%d").to_string()}
                            }
                        }
                    }
                }
            },
            Cache::Error(error) => rsx! { ErrorMessage { message: error.message.clone() } },
            _ => rsx! {},
        }
    }
}

#[component]
fn ReviewForm(product_id: i32, mut comments: Signal<Cache<Vec<CommentDto>>>) -> Element {
    let mut name = use_signal(String::new);
    let mut comment = use_signal(String::new);
    let mut user_id = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let payload = CreateCommentDto {
                name: Some(name()),
                comment: Some(comment()),
                user_id: user_id().trim().parse().ok(),
                product_id: Some(product_id),
            };

            spawn(async move {
                match create_comment(payload).await {
                    Ok(created) => {
                        if let Cache::Fetched(list) = &mut *comments.write() {
                            list.insert(0, created);
                        }
                        name.set(String::new());
                        comment.set(String::new());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.message)),
                }
            });
        }
    };

    rsx! {
        form {
            class: "review-form",
            onsubmit: on_submit,
            input {
                class: "input",
                placeholder: "Your name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: "input",
                placeholder: "User ID",
                value: "{user_id}",
                oninput: move |evt| user_id.set(evt.value()),
            }
            textarea {
                class: "textarea",
                placeholder: "Share your thoughts about this product",
                value: "{comment}",
                oninput: move |evt| comment.set(evt.value()),
            }
            if let Some(message) = error() {
                ErrorMessage { message }
            }
            button { class: "btn btn-primary", r#type: "submit", "Submit review" }
        }
    }
}
