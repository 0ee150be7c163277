pub mod content_access;

pub use content_access::{App, ContentAccessPage};
