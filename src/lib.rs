pub mod app;
pub mod catalog;
pub mod layout;
mod util;
