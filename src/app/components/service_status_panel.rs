use dioxus::prelude::*;

use crate::domain::models::ServiceStatusSnapshot;
use crate::domain::services::{aggregate, overall_icon, status_lines, StatusIcon};

use super::common::class_list;

#[component]
pub fn ServiceStatusPanel(
    snapshot: ServiceStatusSnapshot,
    #[props(default)] class: String,
) -> Element {
    let overall = aggregate(&snapshot);
    let panel_class = class_list(
        &format!("search-status search-status--{}", overall.css_modifier()),
        &class,
    );
    let label = overall.label();
    let lines = status_lines(&snapshot);

    rsx! {
        div { class: "{panel_class}",
            div { class: "status-header",
                div { class: "status-indicator",
                    StatusGlyph { icon: overall_icon(overall) }
                    span { class: "status-text", "{label}" }
                }
            }

            div { class: "status-details",
                for line in lines.into_iter() {
                    div { class: "status-item",
                        StatusGlyph { icon: line.icon }
                        span { "{line.text}" }
                    }
                }
            }

            if !snapshot.is_connected {
                div { class: "status-warning",
                    p { "You are currently offline. Search functionality may be limited." }
                }
            }
        }
    }
}

#[component]
fn StatusGlyph(icon: StatusIcon) -> Element {
    rsx! {
        span { class: icon.css_class(), "{icon.glyph()}" }
    }
}
