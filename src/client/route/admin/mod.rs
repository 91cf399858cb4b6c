pub mod dashboard;
pub mod product;

pub use dashboard::AdminDashboard;
pub use product::AdminProduct;

use dioxus::prelude::*;

use crate::client::router::Route;

/// Sidebar shell shared by every page below `/admin`.
#[component]
pub fn AdminLayout() -> Element {
    let route = use_route::<Route>();

    let link_class = |active: bool| if active { "link active" } else { "link" };
    let dashboard_class = link_class(route == Route::AdminDashboard {});
    let product_class = link_class(route == Route::AdminProduct {});

    rsx!(
        div {
            class: "admin",
            aside {
                class: "admin-sidebar",
                h2 { "Admin" }
                Link { to: Route::AdminDashboard {}, class: dashboard_class, "Reviews" }
                Link { to: Route::AdminProduct {}, class: product_class, "Products" }
            }
            section {
                class: "admin-content",
                Outlet::<Route> {}
            }
        }
    )
}
