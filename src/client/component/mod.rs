pub mod footer;
pub mod header;
pub mod layout;
pub mod page;
pub mod pagination;
pub mod product_card;

pub use footer::Footer;
pub use header::Header;
pub use layout::Layout;
pub use page::{ErrorMessage, LoadingPage, Page};
pub use pagination::Pagination;
pub use product_card::ProductCard;
