#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod category;

#[cfg(feature = "web")]
pub mod comment;

#[cfg(feature = "web")]
pub mod post;

#[cfg(feature = "web")]
pub mod product;
