pub mod components;
pub mod pages;

pub use pages::content_access::App;
