pub mod about;
pub mod admin;
pub mod blog;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod detail_product;
pub mod home;
pub mod login;
pub mod not_found;
pub mod product;
pub mod profile;
pub mod register;

pub use about::About;
pub use blog::Blog;
pub use cart::Cart;
pub use checkout::Checkout;
pub use contact::Contact;
pub use detail_product::DetailProduct;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use product::Product;
pub use profile::Profile;
pub use register::Register;
