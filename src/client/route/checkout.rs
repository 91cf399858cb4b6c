use dioxus::prelude::*;

use crate::client::{
    component::{ErrorMessage, Page},
    model::cart::{format_price, Cart},
    router::Route,
};

/// Shipping details collected at checkout.
#[derive(Clone, Debug, Default, PartialEq)]
struct ShippingForm {
    name: String,
    phone: String,
    address: String,
}

impl ShippingForm {
    /// Returns the first problem with the form, if any.
    fn problem(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("Please enter your name.")
        } else if self.phone.trim().is_empty() {
            Some("Please enter a phone number.")
        } else if self.address.trim().is_empty() {
            Some("Please enter a shipping address.")
        } else {
            None
        }
    }
}

#[component]
pub fn Checkout() -> Element {
    let mut cart = use_context::<Signal<Cart>>();
    let mut form = use_signal(ShippingForm::default);
    let mut error = use_signal(|| None::<&'static str>);
    let mut placed = use_signal(|| None::<ShippingForm>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let problem = form.read().problem();
        match problem {
            Some(problem) => error.set(Some(problem)),
            None => {
                error.set(None);
                placed.set(Some(form()));
                cart.write().clear();
                form.set(ShippingForm::default());
            }
        }
    };

    if let Some(order) = placed() {
        return rsx! {
            Page {
                h1 { "Thank you for your order" }
                p { "We will deliver to {order.address} and call {order.phone} before shipping." }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to home" }
            }
        };
    }

    let state = cart.read();
    let total = format_price(state.total());

    rsx! {
        Page {
            h1 { "Checkout" }
            if state.is_empty() {
                p { "There is nothing to check out." }
                Link { to: Route::Product {}, class: "btn btn-primary", "Browse products" }
            } else {
                div {
                    class: "checkout",
                    form {
                        class: "form",
                        onsubmit: on_submit,
                        label { "Full name" }
                        input {
                            class: "input",
                            value: "{form.read().name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                        label { "Phone" }
                        input {
                            class: "input",
                            r#type: "tel",
                            value: "{form.read().phone}",
                            oninput: move |evt| form.write().phone = evt.value(),
                        }
                        label { "Address" }
                        textarea {
                            class: "textarea",
                            value: "{form.read().address}",
                            oninput: move |evt| form.write().address = evt.value(),
                        }
                        if let Some(message) = error() {
                            ErrorMessage { message: message.to_string() }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Place order" }
                    }
                    div {
                        class: "cart-summary",
                        h2 { "Order summary" }
                        ul {
                            for line in state.lines() {
                                li {
                                    key: "{line.product_id}",
                                    "{line.name} × {line.quantity}: "
                                    {format_price(line.subtotal())}
                                }
                            }
                        }
                        p { "Total: " strong { "{total}" } }
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
    fn requires_every_shipping_field() {
        let mut form = ShippingForm::default();
        assert_eq!(form.problem(), Some("Please enter your name."));

        form.name = "An".to_string();
        assert_eq!(form.problem(), Some("Please enter a phone number."));

        form.phone = "0900000000".to_string();
        assert_eq!(form.problem(), Some("Please enter a shipping address."));

        form.address = "   ".to_string();
        assert_eq!(form.problem(), Some("Please enter a shipping address."));

        form.address = "1 Main Street".to_string();
        assert_eq!(form.problem(), None);
    }
}
