use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::shared::logging::log_stale_response;

/// Identifies one issued search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    sequence: u64,
    pub query: String,
}

impl SearchTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Request-sequence gate: only the newest search may publish its response.
///
/// In-flight requests are not aborted; their responses are discarded.
/// Clones share one counter.
#[derive(Debug, Clone, Default)]
pub struct SearchSequencer {
    latest: Arc<AtomicU64>,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, query: impl Into<String>) -> SearchTicket {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        SearchTicket {
            sequence,
            query: query.into(),
        }
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.sequence
    }

    /// Hand `value` through only if `ticket` is still the newest search
    pub fn accept<T>(&self, ticket: &SearchTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log_stale_response(
                &ticket.query,
                ticket.sequence,
                self.latest.load(Ordering::SeqCst),
            );
            None
        }
    }
}
