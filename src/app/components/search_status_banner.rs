use dioxus::prelude::*;

use crate::domain::models::{SearchStatus, SearchStatusKind};

use super::common::ErrorMessage;

/// Read-only banner for the current search lifecycle status
#[component]
pub fn SearchStatusBanner(status: SearchStatus) -> Element {
    if status.kind == SearchStatusKind::Idle {
        return rsx! {
            div { class: "c-search-status c-search-status--idle",
                span { class: "c-search-status__message", "{status.message}" }
            }
        };
    }

    if status.kind == SearchStatusKind::Error {
        return rsx! {
            div { class: "c-search-status c-search-status--error",
                ErrorMessage { message: status.message.clone() }
            }
        };
    }

    let icon = match status.kind {
        SearchStatusKind::Loading => "⏳",
        SearchStatusKind::Success => "✅",
        SearchStatusKind::Empty => "🔍",
        SearchStatusKind::Error | SearchStatusKind::Idle => "",
    };

    rsx! {
        div {
            class: "c-search-status c-search-status--{status.kind.as_str()}",
            role: "status",
            span { class: "c-search-status__icon", "{icon}" }
            span { class: "c-search-status__message", "{status.message}" }
        }
    }
}
