//! Static dashboard content.
//!
//! Every number, log line and file name shown on the dashboard comes from
//! here. Nothing is measured or generated; these are fixed placeholders for
//! a backend the console does not have.

use std::fmt;

/// Headline counters for the overview cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total_requests: u64,
    pub blocked_requests: u64,
    pub storage_used_gb: f64,
    /// Share of the storage quota in use, 0–100.
    pub storage_quota_percent: u16,
    pub active_users: u64,
    pub uptime_percent: f64,
}

pub const STATS: Stats = Stats {
    total_requests: 12_847,
    blocked_requests: 234,
    storage_used_gb: 45.2,
    storage_quota_percent: 65,
    active_users: 156,
    uptime_percent: 99.8,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSeverity {
    Info,
    Warning,
    Success,
    Error,
}

impl LogSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub id: u32,
    /// Wall-clock time as displayed, `HH:MM:SS`.
    pub time: &'static str,
    pub severity: LogSeverity,
    pub message: &'static str,
}

/// Newest first.
pub const RECENT_LOGS: [LogEntry; 4] = [
    LogEntry {
        id: 1,
        time: "15:42:23",
        severity: LogSeverity::Info,
        message: "Storage file uploaded: image-001.jpg",
    },
    LogEntry {
        id: 2,
        time: "15:41:15",
        severity: LogSeverity::Warning,
        message: "Suspicious activity from IP 192.168.1.100",
    },
    LogEntry {
        id: 3,
        time: "15:40:01",
        severity: LogSeverity::Success,
        message: "User signed in: user@example.com",
    },
    LogEntry {
        id: 4,
        time: "15:38:45",
        severity: LogSeverity::Error,
        message: "Blocked DDoS from IP 10.0.0.50",
    },
];

/// How many entries the overview tab shows.
pub const OVERVIEW_EVENT_COUNT: usize = 4;

/// The newest `limit` log entries.
pub fn recent_events(limit: usize) -> &'static [LogEntry] {
    &RECENT_LOGS[..limit.min(RECENT_LOGS.len())]
}

/// Files listed on the storage tab. Download and delete are not wired.
pub const STORAGE_FILES: [&str; 4] = ["document.pdf", "image-001.jpg", "backup.zip", "config.json"];

/// One row of the "server status" card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub label: &'static str,
    pub value: String,
    /// Whether the value should be styled as healthy.
    pub healthy: bool,
}

/// Rows of the server status card.
pub fn service_status() -> Vec<ServiceStatus> {
    vec![
        ServiceStatus {
            label: "Uptime",
            value: format!("{}%", STATS.uptime_percent),
            healthy: true,
        },
        ServiceStatus {
            label: "DDoS protection",
            value: "Active".to_string(),
            healthy: true,
        },
        ServiceStatus {
            label: "Storage connection",
            value: "Connected".to_string(),
            healthy: true,
        },
    ]
}

/// Formats a count with thousands separators (`12847` → `12,847`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_values() {
        assert_eq!(STATS.total_requests, 12_847);
        assert_eq!(STATS.blocked_requests, 234);
        assert_eq!(STATS.active_users, 156);
        assert!((STATS.storage_used_gb - 45.2).abs() < f64::EPSILON);
    }

    #[test]
    fn log_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = RECENT_LOGS.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn every_severity_appears_once() {
        for severity in [
            LogSeverity::Info,
            LogSeverity::Warning,
            LogSeverity::Success,
            LogSeverity::Error,
        ] {
            assert_eq!(
                RECENT_LOGS.iter().filter(|l| l.severity == severity).count(),
                1
            );
        }
    }

    #[test]
    fn recent_events_clamps_limit() {
        assert_eq!(recent_events(2).len(), 2);
        assert_eq!(recent_events(100).len(), RECENT_LOGS.len());
        assert!(recent_events(0).is_empty());
    }

    #[test]
    fn severity_display() {
        assert_eq!(LogSeverity::Warning.to_string(), "warning");
        assert_eq!(LogSeverity::Error.as_str(), "error");
    }

    #[test]
    fn service_status_starts_with_uptime() {
        let rows = service_status();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "Uptime");
        assert_eq!(rows[0].value, "99.8%");
        assert_eq!(rows[1].value, "Active");
        assert!(rows.iter().all(|r| r.healthy));
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(234), "234");
        assert_eq!(format_count(12_847), "12,847");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }
}
