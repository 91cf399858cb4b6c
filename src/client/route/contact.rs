use dioxus::prelude::*;

use crate::client::component::{ErrorMessage, Page};

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);
    let mut sent = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if name().trim().is_empty() || message().trim().is_empty() {
            error.set(Some("Please fill in your name and a message."));
        } else if !email().contains('@') {
            error.set(Some("Please enter a valid email address."));
        } else {
            error.set(None);
            sent.set(true);
        }
    };

    rsx! {
        Page {
            h1 { "Contact us" }
            div {
                class: "contact",
                div {
                    p { "Email: support@shop.example" }
                    p { "Phone: 0900 000 000" }
                    p { "Opening hours: Monday to Saturday, 8:00 to 18:00" }
                }
                if sent() {
                    div {
                        class: "alert alert-success",
                        p { "Thanks {name}, we will get back to you shortly." }
                    }
                } else {
                    form {
                        class: "form",
                        onsubmit: on_submit,
                        input {
                            class: "input",
                            placeholder: "Name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                        input {
                            class: "input",
                            r#type: "email",
                            placeholder: "Email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        textarea {
                            class: "textarea",
                            placeholder: "How can we help?",
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                        if let Some(problem) = error() {
                            ErrorMessage { message: problem.to_string() }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Send" }
                    }
                }
            }
        }
    }
}
