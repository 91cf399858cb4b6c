pub const SITE_NAME: &str = "Shop";

/// Products shown per catalog page.
pub const PRODUCT_PAGE_SIZE: u64 = 9;

/// Products featured on the home page.
pub const FEATURED_PRODUCT_COUNT: u64 = 4;

/// Prefix under which the server exposes uploaded images.
pub const STORAGE_URL: &str = "/storage";
