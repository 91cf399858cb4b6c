mod category;
mod comment;
mod post;
mod product;
mod reply;
mod user;
