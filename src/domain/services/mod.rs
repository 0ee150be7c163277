// Business logic services
// Framework-agnostic, 100% testable

pub mod recent_searches;
pub mod result_normalizer;
pub mod search_sequencer;
pub mod search_status;
pub mod status_aggregator;

pub use recent_searches::{hidden_search_count, visible_searches, RecentSearchStore};
pub use result_normalizer::{
    display_date, format_file_size, normalize, normalize_hits, normalize_with, score_label,
    NormalizeOptions,
};
pub use search_sequencer::{SearchSequencer, SearchTicket};
pub use search_status::{ResetTicket, SearchStatusController};
#[cfg(not(target_arch = "wasm32"))]
pub use search_status::AutoResetStatus;
pub use status_aggregator::{
    aggregate, overall_icon, status_icon, status_lines, status_text, StatusIcon, StatusLine,
};
