pub mod common;
pub mod recent_search_list;
pub mod search_result_list;
pub mod search_status_banner;
pub mod service_status_panel;

pub use common::{class_list, is_activation_key, EmptyState, ErrorMessage, LoadingText};
pub use recent_search_list::RecentSearchList;
pub use search_result_list::SearchResultList;
pub use search_status_banner::SearchStatusBanner;
pub use service_status_panel::ServiceStatusPanel;
