use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[component]
pub fn Register() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        Page {
            class: "page-center",
            form {
                class: "form form-narrow",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                h1 { "Register" }
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
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Create account" }
                p {
                    "Already registered? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
