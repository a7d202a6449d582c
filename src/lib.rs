pub mod app;
pub mod components;
pub mod content;
pub mod models;
pub mod pages;
pub mod routing;

pub use app::App;
