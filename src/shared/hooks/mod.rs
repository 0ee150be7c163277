// Custom Dioxus hooks
pub mod use_content_search;
pub mod use_recent_searches;
pub mod use_search_status;
pub mod use_service_status;

pub use use_content_search::{use_content_search, UseContentSearchReturn};
pub use use_recent_searches::{
    use_recent_searches, use_recent_searches_with, DynStorage, UseRecentSearchesReturn,
};
pub use use_search_status::{use_search_status, UseSearchStatusReturn};
pub use use_service_status::use_service_status;
