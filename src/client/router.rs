use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{
    admin::{AdminDashboard, AdminLayout, AdminProduct},
    About, Blog, Cart, Checkout, Contact, DetailProduct, Home, Login, NotFound, Product, Profile,
    Register,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/product")]
    Product {},

    #[route("/detail_product?:id")]
    DetailProduct { id: i32 },

    #[route("/contact")]
    Contact {},

    #[route("/about")]
    About {},

    #[route("/blog")]
    Blog {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/cart")]
    Cart {},

    #[route("/checkout")]
    Checkout {},

    #[route("/profile")]
    Profile {},

    #[layout(AdminLayout)]
    #[nest("/admin")]
        #[route("/")]
        AdminDashboard {},

        #[route("/products")]
        AdminProduct {},
    #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Page title shown in the browser tab, before the site name suffix.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home {} => "Home",
            Route::Product {} => "Product",
            Route::DetailProduct { .. } => "Detail_product",
            Route::Contact {} => "Contact",
            Route::About {} => "About",
            Route::Blog {} => "Blog",
            Route::Login {} => "Login",
            Route::Register {} => "Register",
            Route::Cart {} => "Cart",
            Route::Checkout {} => "Checkout",
            Route::Profile {} => "Profile",
            Route::AdminDashboard {} => "Admin Dashboard",
            Route::AdminProduct {} => "Admin Product",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_every_path_with_its_title() {
        let cases = [
            ("/", "Home"),
            ("/product", "Product"),
            ("/detail_product?id=7", "Detail_product"),
            ("/contact", "Contact"),
            ("/about", "About"),
            ("/blog", "Blog"),
            ("/login", "Login"),
            ("/register", "Register"),
            ("/cart", "Cart"),
            ("/checkout", "Checkout"),
            ("/profile", "Profile"),
            ("/admin", "Admin Dashboard"),
            ("/admin/products", "Admin Product"),
        ];

        for (path, title) in cases {
            let route = Route::from_str(path).unwrap_or_else(|_| panic!("{path} should parse"));
            assert_eq!(route.title(), title, "title of {path}");
        }
    }

    #[test]
    fn reads_product_id_from_query() {
        let route = Route::from_str("/detail_product?id=42").unwrap();

        assert_eq!(route, Route::DetailProduct { id: 42 });
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = Route::from_str("/no/such/page").unwrap();

        assert_eq!(
            route,
            Route::NotFound {
                segments: vec!["no".to_string(), "such".to_string(), "page".to_string()]
            }
        );
        assert_eq!(route.title(), "Not Found");
    }
}
