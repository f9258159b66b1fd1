pub mod catalog;
pub mod handlers;
