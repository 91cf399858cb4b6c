use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorMessage, LoadingPage, Pagination},
        model::{cache::Cache, cart::format_price},
    },
    model::{
        category::CategoryDto,
        pagination::PageDto,
        product::{CreateProductDto, ProductDto},
    },
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::{
    client::api::{
        category::get_categories,
        product::{create_product, delete_product, get_products, update_product},
    },
    model::product::UpdateProductDto,
};

const ADMIN_PAGE_SIZE: u64 = 10;

/// Values of the product form as typed, before parsing.
#[derive(Clone, Debug, Default, PartialEq)]
struct ProductForm {
    /// Product being edited; `None` while creating.
    editing: Option<i32>,
    category_id: String,
    name: String,
    description: String,
    price: String,
}

impl ProductForm {
    fn from_product(product: &ProductDto) -> Self {
        Self {
            editing: Some(product.id),
            category_id: product.category_id.to_string(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
        }
    }

    /// Parses the form into a request payload.
    fn to_payload(&self) -> Result<CreateProductDto, &'static str> {
        let category_id = self
            .category_id
            .parse()
            .map_err(|_| "Please choose a category.")?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err("The name field is required.");
        }

        let price = self
            .price
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|price| *price >= 0)
            .ok_or("The price must be a positive whole number.")?;

        let description = self.description.trim();

        Ok(CreateProductDto {
            category_id,
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price,
        })
    }
}

#[component]
pub fn AdminProduct() -> Element {
    #[allow(unused_mut)]
    let mut products = use_signal(Cache::<PageDto<ProductDto>>::default);
    #[allow(unused_mut)]
    let mut categories = use_signal(Cache::<Vec<CategoryDto>>::default);
    #[allow(unused_mut)]
    let mut refetch_trigger = use_signal(|| 0u32);
    let page = use_signal(|| 0u64);
    let mut form = use_signal(ProductForm::default);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        use_effect(move || {
            spawn(async move {
                categories.set(get_categories().await.into());
            });
        });

        use_effect(move || {
            let _ = refetch_trigger();
            let page = page();
            spawn(async move {
                products.set(get_products(page, ADMIN_PAGE_SIZE, None).await.into());
            });
        });
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let current = form();
        #[allow(unused_variables)]
        let payload = match current.to_payload() {
            Ok(payload) => payload,
            Err(problem) => {
                error.set(Some(problem.to_string()));
                return;
            }
        };

        #[cfg(feature = "web")]
        spawn(async move {
            let result = match current.editing {
                Some(id) => {
                    let update = UpdateProductDto {
                        category_id: payload.category_id,
                        name: payload.name,
                        description: payload.description,
                        price: payload.price,
                    };
                    update_product(id, update).await
                }
                None => create_product(payload).await,
            };

            match result {
                Ok(_) => {
                    error.set(None);
                    form.set(ProductForm::default());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => error.set(Some(err.message)),
            }
        });
    };

    #[allow(unused_variables)]
    let on_delete = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_product(id).await {
                Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => {
                    tracing::error!("Failed to delete product {}: {}", id, err);
                    error.set(Some(err.message));
                }
            }
        });
    };

    let editing = form.read().editing.is_some();
    let products = products.read();
    let categories = categories.read();

    rsx! {
        h1 { "Products" }
        form {
            class: "form admin-form",
            onsubmit: on_submit,
            h2 { if editing { "Edit product" } else { "New product" } }
            select {
                class: "input",
                value: "{form.read().category_id}",
                onchange: move |evt| form.write().category_id = evt.value(),
                option { value: "", "Choose a category" }
                if let Cache::Fetched(list) = &*categories {
                    for category in list.iter() {
                        option { key: "{category.id}", value: "{category.id}", "{category.name}" }
                    }
                }
            }
            input {
                class: "input",
                placeholder: "Name",
                value: "{form.read().name}",
                oninput: move |evt| form.write().name = evt.value(),
            }
            textarea {
                class: "textarea",
                placeholder: "Description",
                value: "{form.read().description}",
                oninput: move |evt| form.write().description = evt.value(),
            }
            input {
                class: "input",
                r#type: "number",
                min: "0",
                placeholder: "Price",
                value: "{form.read().price}",
                oninput: move |evt| form.write().price = evt.value(),
            }
            if let Some(message) = error() {
                ErrorMessage { message }
            }
            div {
                class: "form-row",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    if editing { "Save" } else { "Create" }
                }
                if editing {
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| form.set(ProductForm::default()),
                        "Cancel"
                    }
                }
            }
        }
        match &*products {
            Cache::Fetched(result) => rsx! {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Category" }
                            th { "Price" }
                            th {}
                        }
                    }
                    tbody {
                        for product in result.items.iter().cloned() {
                            {
                                let id = product.id;
                                let category = categories
                                    .data()
                                    .and_then(|list| list.iter().find(|c| c.id == product.category_id))
                                    .map(|c| c.name.clone())
                                    .unwrap_or_else(|| product.category_id.to_string());
                                let price = format_price(product.price);
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        td { "{product.name}" }
                                        td { "{category}" }
                                        td { "{price}" }
                                        td {
                                            button {
                                                class: "btn btn-sm",
                                                onclick: move |_| form.set(ProductForm::from_product(&product)),
                                                "Edit"
                                            }
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
                Pagination { page, total_pages: result.total_pages }
            },
            Cache::Error(error) => rsx! { ErrorMessage { message: error.message.clone() } },
            _ => rsx! { LoadingPage {} },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            editing: None,
            category_id: "2".to_string(),
            name: " Linen shirt ".to_string(),
            description: String::new(),
            price: "250000".to_string(),
        }
    }

    #[test]
    fn parses_a_complete_form() {
        let payload = filled().to_payload().unwrap();

        assert_eq!(payload.category_id, 2);
        assert_eq!(payload.name, "Linen shirt");
        assert_eq!(payload.description, None);
        assert_eq!(payload.price, 250000);
    }

    #[test]
    fn rejects_missing_category_name_or_bad_price() {
        let mut form = filled();
        form.category_id.clear();
        assert_eq!(form.to_payload().unwrap_err(), "Please choose a category.");

        let mut form = filled();
        form.name = "  ".to_string();
        assert_eq!(form.to_payload().unwrap_err(), "The name field is required.");

        let mut form = filled();
        form.price = "-5".to_string();
        assert_eq!(
            form.to_payload().unwrap_err(),
            "The price must be a positive whole number."
        );
    }
}
