//! Search lifecycle status: `idle → loading → {success, error, empty} → idle`.
//!
//! [`SearchStatusController`] is a plain state machine. Entering `success`
//! with an auto-reset delay arms one [`ResetTicket`]; the owner schedules it
//! and hands it back through [`SearchStatusController::apply_reset`]. Any
//! status change disarms the pending ticket, so a superseded timer is a no-op.

use std::time::Duration;

use crate::config::SearchStatusConfig;
use crate::domain::models::{SearchStatus, SearchStatusKind};
use crate::shared::logging::log_status_transition;

pub const DEFAULT_IDLE_MESSAGE: &str = "Ready to search";
pub const DEFAULT_LOADING_MESSAGE: &str = "Searching...";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Search completed successfully";
pub const DEFAULT_ERROR_MESSAGE: &str = "Search failed";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No results found";

/// A scheduled return to idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatusController {
    status: SearchStatus,
    idle_message: Option<String>,
    auto_reset_delay: Option<Duration>,
    generation: u64,
    armed: Option<u64>,
}

impl SearchStatusController {
    pub fn new(config: &SearchStatusConfig) -> Self {
        let idle_message = config.idle_message.clone().filter(|m| !m.is_empty());
        let status = SearchStatus::new(
            SearchStatusKind::Idle,
            idle_message.as_deref().unwrap_or(DEFAULT_IDLE_MESSAGE),
        );
        Self {
            status,
            idle_message,
            auto_reset_delay: config.auto_reset_delay_ms.map(Duration::from_millis),
            generation: 0,
            armed: None,
        }
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn kind(&self) -> SearchStatusKind {
        self.status.kind
    }

    pub fn message(&self) -> &str {
        &self.status.message
    }

    /// The armed reset, if any
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        let delay = self.auto_reset_delay?;
        self.armed.map(|generation| ResetTicket { generation, delay })
    }

    /// Replace the status; every call disarms a pending reset
    pub fn update(&mut self, status: SearchStatus) -> Option<ResetTicket> {
        log_status_transition(status.kind.as_str(), &status.message);
        self.status = status;
        self.generation += 1;
        self.armed = None;

        if self.status.kind == SearchStatusKind::Success && self.auto_reset_delay.is_some() {
            self.armed = Some(self.generation);
        }
        self.pending_reset()
    }

    pub fn show_loading(&mut self, message: Option<&str>) -> Option<ResetTicket> {
        let message = non_empty(message).unwrap_or(DEFAULT_LOADING_MESSAGE);
        self.update(SearchStatus::new(SearchStatusKind::Loading, message))
    }

    /// A result count overrides `message` with `Found {n} result(s)`
    pub fn show_success(
        &mut self,
        message: Option<&str>,
        result_count: Option<usize>,
    ) -> Option<ResetTicket> {
        let message = match result_count {
            Some(1) => "Found 1 result".to_string(),
            Some(n) => format!("Found {n} results"),
            None => non_empty(message).unwrap_or(DEFAULT_SUCCESS_MESSAGE).to_string(),
        };
        self.update(SearchStatus::new(SearchStatusKind::Success, message))
    }

    /// Message precedence: explicit message, then the error's message
    pub fn show_error(
        &mut self,
        message: Option<&str>,
        error: Option<&dyn std::error::Error>,
    ) -> Option<ResetTicket> {
        let message = match non_empty(message) {
            Some(m) => m.to_string(),
            None => error
                .map(|e| e.to_string())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        };
        self.update(SearchStatus::new(SearchStatusKind::Error, message))
    }

    pub fn show_empty(&mut self, message: Option<&str>) -> Option<ResetTicket> {
        let message = non_empty(message).unwrap_or(DEFAULT_EMPTY_MESSAGE);
        self.update(SearchStatus::new(SearchStatusKind::Empty, message))
    }

    pub fn reset(&mut self) -> Option<ResetTicket> {
        let message = self
            .idle_message
            .clone()
            .unwrap_or_else(|| DEFAULT_IDLE_MESSAGE.to_string());
        self.update(SearchStatus::new(SearchStatusKind::Idle, message))
    }

    /// Fire a scheduled reset; ignored unless `ticket` is still armed
    pub fn apply_reset(&mut self, ticket: ResetTicket) -> bool {
        if self.armed != Some(ticket.generation) {
            return false;
        }
        self.reset();
        true
    }

    /// Teardown: drop the pending reset without touching the status
    pub fn cancel_pending(&mut self) {
        self.armed = None;
    }
}

impl Default for SearchStatusController {
    fn default() -> Self {
        Self::new(&SearchStatusConfig::default())
    }
}

fn non_empty(message: Option<&str>) -> Option<&str> {
    message.filter(|m| !m.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::AutoResetStatus;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tokio::task::JoinHandle;

    use super::{ResetTicket, SearchStatusController};
    use crate::config::SearchStatusConfig;
    use crate::domain::models::SearchStatus;

    /// Tokio-driven controller owning at most one reset timer.
    ///
    /// Status calls must happen inside a Tokio runtime when auto-reset is on.
    pub struct AutoResetStatus {
        controller: Arc<Mutex<SearchStatusController>>,
        timer: Mutex<Option<JoinHandle<()>>>,
    }

    impl AutoResetStatus {
        pub fn new(config: &SearchStatusConfig) -> Self {
            Self {
                controller: Arc::new(Mutex::new(SearchStatusController::new(config))),
                timer: Mutex::new(None),
            }
        }

        pub fn status(&self) -> SearchStatus {
            self.lock().status().clone()
        }

        pub fn has_pending_reset(&self) -> bool {
            self.lock().pending_reset().is_some()
        }

        pub fn show_loading(&self, message: Option<&str>) {
            self.apply(|c| c.show_loading(message));
        }

        pub fn show_success(&self, message: Option<&str>, result_count: Option<usize>) {
            self.apply(|c| c.show_success(message, result_count));
        }

        pub fn show_error(&self, message: Option<&str>, error: Option<&dyn std::error::Error>) {
            self.apply(|c| c.show_error(message, error));
        }

        pub fn show_empty(&self, message: Option<&str>) {
            self.apply(|c| c.show_empty(message));
        }

        pub fn reset(&self) {
            self.apply(|c| c.reset());
        }

        pub fn update(&self, status: SearchStatus) {
            self.apply(|c| c.update(status));
        }

        /// Cancel the pending reset (component teardown)
        pub fn shutdown(&self) {
            self.abort_timer();
            self.lock().cancel_pending();
        }

        fn lock(&self) -> MutexGuard<'_, SearchStatusController> {
            self.controller.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn abort_timer(&self) {
            let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(handle) = timer.take() {
                handle.abort();
            }
        }

        fn apply(&self, change: impl FnOnce(&mut SearchStatusController) -> Option<ResetTicket>) {
            let ticket = {
                let mut controller = self.lock();
                change(&mut *controller)
            };
            self.abort_timer();

            let Some(ticket) = ticket else {
                return;
            };
            let controller = Arc::clone(&self.controller);
            let handle = tokio::spawn(async move {
                tokio::time::sleep(ticket.delay).await;
                controller
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .apply_reset(ticket);
            });
            *self.timer.lock().unwrap_or_else(PoisonError::into_inner) = Some(handle);
        }
    }

    impl Drop for AutoResetStatus {
        fn drop(&mut self) {
            self.abort_timer();
        }
    }
}
