use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorMessage, LoadingPage},
        model::cache::Cache,
    },
    model::comment::CommentDto,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::comment::{delete_comment, get_comments};

/// Moderation view over every review, newest first.
#[component]
pub fn AdminDashboard() -> Element {
    #[allow(unused_mut)]
    let mut comments = use_signal(Cache::<Vec<CommentDto>>::default);
    #[allow(unused_mut)]
    let mut refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        use_effect(move || {
            let _ = refetch_trigger();
            spawn(async move {
                comments.set(get_comments().await.into());
            });
        });
    }

    #[allow(unused_variables)]
    let on_delete = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_comment(id).await {
                Ok(()) => {
                    error.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to delete comment {}: {}", id, err);
                    error.set(Some(err.message));
                }
            }
        });
    };

    let comments = comments.read();

    rsx! {
        h1 { "Reviews" }
        if let Some(message) = error() {
            ErrorMessage { message }
        }
        match &*comments {
            Cache::Fetched(list) if list.is_empty() => rsx! { p { "No reviews yet." } },
            Cache::Fetched(list) => rsx! {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Product" }
                            th { "Name" }
                            th { "Review" }
                            th { "Date" }
                            th {}
                        }
                    }
                    tbody {
                        for comment in list.iter() {
                            {
                                let id = comment.id;
                                let product = comment
                                    .product
                                    .as_ref()
                                    .map(|product| product.name.clone())
                                    .unwrap_or_else(|| format!("#{}", comment.product_id));
                                let posted = comment.created_at.format("%Y-%m-%d %H:%M").to_string();
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        td { "{product}" }
                                        td { "{comment.name}" }
                                        td { "{comment.comment}" }
                                        td { "{posted}" }
                                        td {
                                            button {
                                                class: "btn btn-sm btn-danger",
                                                onclick: move |_| on_delete(id),
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Cache::Error(error) => rsx! { ErrorMessage { message: error.message.clone() } },
            _ => rsx! { LoadingPage {} },
        }
    }
}
