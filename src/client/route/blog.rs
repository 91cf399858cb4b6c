use dioxus::prelude::*;
use pulldown_cmark::{html, Parser};

use crate::{
    client::{
        component::{ErrorMessage, LoadingPage, Page},
        constant::STORAGE_URL,
        model::cache::Cache,
    },
    model::post::PostDto,
};

#[cfg(feature = "web")]
use crate::client::api::post::{get_posts, get_related_articles};

/// Renders post content written in markdown to HTML.
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new(content);
    let mut output = String::new();
    html::push_html(&mut output, parser);

    output
}

#[component]
pub fn Blog() -> Element {
    #[allow(unused_mut)]
    let mut posts = use_signal(Cache::<Vec<PostDto>>::default);
    let mut selected = use_signal(|| None::<PostDto>);

    #[cfg(feature = "web")]
    {
        use_effect(move || {
            spawn(async move {
                posts.set(get_posts().await.into());
            });
        });
    }

    let posts = posts.read();

    rsx! {
        Page {
            h1 { "Blog" }
            if let Some(post) = selected() {
                div {
                    class: "blog-layout",
                    PostView { post }
                    button {
                        class: "btn",
                        onclick: move |_| selected.set(None),
                        "Back to all posts"
                    }
                }
            } else {
                match &*posts {
                    Cache::Fetched(list) if list.is_empty() => rsx! {
                        p { "Nothing has been published yet." }
                    },
                    Cache::Fetched(list) => rsx! {
                        div {
                            class: "grid",
                            for post in list.iter().cloned() {
                                PostCard {
                                    key: "{post.id}",
                                    post,
                                    on_select: move |post| selected.set(Some(post)),
                                }
                            }
                        }
                    },
                    Cache::Error(error) => rsx! { ErrorMessage { message: error.message.clone() } },
                    _ => rsx! { LoadingPage {} },
                }
            }
        }
    }
}

#[component]
fn PostCard(post: PostDto, on_select: EventHandler<PostDto>) -> Element {
    let author = post
        .user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_default();
    let date = post.created_at.format("%Y-%m-%d").to_string();
    let selected = post.clone();

    rsx! {
        div {
            class: "card card-clickable",
            onclick: move |_| on_select.call(selected.clone()),
            if let Some(image) = &post.image {
                img { class: "card-image", src: "{STORAGE_URL}/{image}", alt: "{post.title}" }
            }
            div {
                class: "card-body",
                h3 { class: "card-title", "{post.title}" }
                p { class: "card-meta", "{author} · {date}" }
            }
        }
    }
}

#[component]
fn PostView(post: PostDto) -> Element {
    #[allow(unused_mut)]
    let mut related = use_signal(Cache::<Vec<PostDto>>::default);
    let content = render_markdown(&post.content);

    #[cfg(feature = "web")]
    {
        let category_id = post.category_id;
        use_effect(use_reactive!(|category_id| {
            if let Some(category_id) = category_id {
                spawn(async move {
                    related.set(get_related_articles(category_id).await.into());
                });
            }
        }));
    }

    let related = related.read();

    rsx! {
        article {
            class: "post",
            h2 { "{post.title}" }
            if let Some(image) = &post.image {
                img { class: "post-image", src: "{STORAGE_URL}/{image}", alt: "{post.title}" }
            }
            div { class: "post-content", dangerous_inner_html: "{content}" }
        }
        if let Cache::Fetched(articles) = &*related {
            aside {
                class: "related",
                h3 { "Related articles" }
                ul {
                    for article in articles.iter().filter(|article| article.id != post.id) {
                        li { key: "{article.id}", "{article.title}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_emphasis() {
        let html = render_markdown("# Spring sale\n\nEverything is *half* price.");

        assert_eq!(
            html,
            "<h1>Spring sale</h1>\n<p>Everything is <em>half</em> price.</p>\n"
        );
    }

    #[test]
    fn renders_lists() {
        let html = render_markdown("- shirts\n- shoes");

        assert_eq!(html, "<ul>\n<li>shirts</li>\n<li>shoes</li>\n</ul>\n");
    }
}
