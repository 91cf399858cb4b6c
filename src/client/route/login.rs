use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

/// Sign-in form. Accounts are not wired to the API yet, so submitting only prevents the
/// default browser navigation.
#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        Page {
            class: "page-center",
            form {
                class: "form form-narrow",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                h1 { "Login" }
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
                button { class: "btn btn-primary", r#type: "submit", "Login" }
                p {
                    "No account yet? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
