use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::config::SearchStatusConfig;
use crate::domain::models::SearchStatus;
use crate::domain::services::{ResetTicket, SearchStatusController};
use crate::shared::utils::sleep;

/// Search status with the auto-reset timer driven by a Dioxus task.
///
/// Every status change cancels the previous timer task; unmounting the
/// component cancels it too.
#[derive(Clone)]
pub struct UseSearchStatusReturn {
    pub controller: Signal<SearchStatusController>,
    reset_task: Rc<Cell<Option<Task>>>,
}

impl UseSearchStatusReturn {
    pub fn status(&self) -> SearchStatus {
        self.controller.read().status().clone()
    }

    pub fn show_loading(&mut self, message: Option<&str>) {
        let ticket = self.controller.write().show_loading(message);
        self.schedule(ticket);
    }

    pub fn show_success(&mut self, message: Option<&str>, result_count: Option<usize>) {
        let ticket = self.controller.write().show_success(message, result_count);
        self.schedule(ticket);
    }

    pub fn show_error(&mut self, message: Option<&str>, error: Option<&dyn std::error::Error>) {
        let ticket = self.controller.write().show_error(message, error);
        self.schedule(ticket);
    }

    pub fn show_empty(&mut self, message: Option<&str>) {
        let ticket = self.controller.write().show_empty(message);
        self.schedule(ticket);
    }

    pub fn reset(&mut self) {
        let ticket = self.controller.write().reset();
        self.schedule(ticket);
    }

    pub fn update(&mut self, status: SearchStatus) {
        let ticket = self.controller.write().update(status);
        self.schedule(ticket);
    }

    fn schedule(&mut self, ticket: Option<ResetTicket>) {
        if let Some(previous) = self.reset_task.take() {
            previous.cancel();
        }

        let Some(ticket) = ticket else {
            return;
        };

        let mut controller = self.controller;
        let task = spawn(async move {
            sleep(ticket.delay).await;
            controller.write().apply_reset(ticket);
        });
        self.reset_task.set(Some(task));
    }
}

pub fn use_search_status(config: SearchStatusConfig) -> UseSearchStatusReturn {
    let controller = use_signal(move || SearchStatusController::new(&config));
    let reset_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    let on_drop = reset_task.clone();
    use_drop(move || {
        if let Some(task) = on_drop.take() {
            task.cancel();
        }
    });

    UseSearchStatusReturn {
        controller,
        reset_task,
    }
}
