use chrono::DateTime;

/// Convert Unix timestamp (seconds) to formatted UTC date string
pub fn format_timestamp(timestamp: i64) -> Option<String> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
