use crate::domain::models::{
    DatabaseState, OverallStatus, SearchServiceState, ServiceStatusSnapshot,
};

/// Icon variant for a status string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Success,
    Loading,
    Error,
}

impl StatusIcon {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusIcon::Success => "status-icon success",
            StatusIcon::Loading => "status-icon loading",
            StatusIcon::Error => "status-icon error",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            StatusIcon::Success => "✅",
            StatusIcon::Loading => "⏳",
            StatusIcon::Error => "❌",
        }
    }
}

/// Overall connectivity; the first matching rule wins
pub fn aggregate(snapshot: &ServiceStatusSnapshot) -> OverallStatus {
    if !snapshot.is_connected {
        return OverallStatus::Offline;
    }
    if snapshot.search_service == SearchServiceState::Loading
        || snapshot.database == DatabaseState::Loading
    {
        return OverallStatus::Loading;
    }
    if snapshot.custom_services.iter().any(|s| s.status == "loading") {
        return OverallStatus::Loading;
    }
    if snapshot.search_service == SearchServiceState::Disconnected
        || snapshot.database == DatabaseState::Error
    {
        return OverallStatus::Error;
    }
    if snapshot
        .custom_services
        .iter()
        .any(|s| s.status == "error" || s.status == "disconnected")
    {
        return OverallStatus::Error;
    }
    OverallStatus::Online
}

/// Unknown statuses get the error icon
pub fn status_icon(status: &str) -> StatusIcon {
    match status {
        "connected" | "ready" | "active" => StatusIcon::Success,
        "loading" => StatusIcon::Loading,
        _ => StatusIcon::Error,
    }
}

/// Header icon for the aggregate status
pub fn overall_icon(status: OverallStatus) -> StatusIcon {
    match status {
        OverallStatus::Online => StatusIcon::Success,
        OverallStatus::Loading => StatusIcon::Loading,
        OverallStatus::Offline | OverallStatus::Error => StatusIcon::Error,
    }
}

/// Human label for a service/status pair, `"{service}: {status}"` when unknown
pub fn status_text(service: &str, status: &str) -> String {
    let text = match (service, status) {
        ("searchService", "connected") => "Search Service Online",
        ("searchService", "disconnected") => "Search Service Offline",
        ("searchService", "loading") => "Connecting to Search Service...",
        ("database", "ready") => "Database Ready",
        ("database", "error") => "Database Error",
        ("database", "loading") => "Database Loading...",
        ("analytics", "active") => "Analytics Active",
        ("analytics", "inactive") => "Analytics Disabled",
        _ => return format!("{service}: {status}"),
    };
    text.to_string()
}

/// One rendered status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub icon: StatusIcon,
    pub text: String,
}

/// Lines for the details section: built-in services, then custom ones
pub fn status_lines(snapshot: &ServiceStatusSnapshot) -> Vec<StatusLine> {
    let builtin = [
        ("searchService", snapshot.search_service.as_str()),
        ("database", snapshot.database.as_str()),
        ("analytics", snapshot.analytics.as_str()),
    ];

    let mut lines: Vec<StatusLine> = builtin
        .iter()
        .map(|(service, status)| StatusLine {
            icon: status_icon(status),
            text: status_text(service, status),
        })
        .collect();

    lines.extend(snapshot.custom_services.iter().map(|service| StatusLine {
        icon: status_icon(&service.status),
        text: format!("{}: {}", service.display_name, service.status),
    }));

    lines
}
