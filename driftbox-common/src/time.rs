//! Display formatting for file sizes and upload timestamps

use chrono::{DateTime, Local};

/// Format an RFC 3339 upload timestamp for display
///
/// Converts to local time and formats as "Jan 15, 2026 10:30". Timestamps
/// the server sends in an unexpected shape are displayed as-is rather than
/// hidden, since they may still be meaningful to the user.
pub fn format_upload_time(uploaded_at: &str) -> String {
    if uploaded_at.is_empty() {
        return String::new();
    }

    match DateTime::parse_from_rfc3339(uploaded_at) {
        Ok(parsed) => {
            let local_time: DateTime<Local> = parsed.with_timezone(&Local);
            local_time.format("%b %d, %Y %H:%M").to_string()
        }
        Err(_) => uploaded_at.to_string(),
    }
}

/// Format a file size for display (human-readable)
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if size >= TB {
        format!("{:.1} TB", size as f64 / TB as f64)
    } else if size >= GB {
        format!("{:.1} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.1} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.1} KB", size as f64 / KB as f64)
    } else {
        format!("{size} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // format_upload_time Tests
    // =========================================================================

    #[test]
    fn test_format_upload_time_empty() {
        assert_eq!(format_upload_time(""), "");
    }

    #[test]
    fn test_format_upload_time_valid() {
        let result = format_upload_time("2026-01-15T10:30:00Z");
        // Local timezone varies, so check the stable parts
        assert!(!result.is_empty());
        assert!(result.contains("2026"));
        assert!(result.contains("Jan"));
    }

    #[test]
    fn test_format_upload_time_with_offset() {
        let result = format_upload_time("2026-06-01T08:00:00+05:30");
        assert!(result.contains("2026"));
    }

    #[test]
    fn test_format_upload_time_unparseable_passthrough() {
        // Unexpected shapes are shown as-is
        assert_eq!(format_upload_time("yesterday"), "yesterday");
        assert_eq!(format_upload_time("2026-01-15"), "2026-01-15");
    }

    // =========================================================================
    // format_size Tests
    // =========================================================================

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(10240), "10.0 KB");
        assert_eq!(format_size(1048575), "1024.0 KB"); // Just under 1 MB
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(format_size(1048576), "1.0 MB"); // Exactly 1 MB
        assert_eq!(format_size(1572864), "1.5 MB");
        assert_eq!(format_size(104857600), "100.0 MB");
    }

    #[test]
    fn test_format_size_gigabytes() {
        assert_eq!(format_size(1073741824), "1.0 GB"); // Exactly 1 GB
        assert_eq!(format_size(1610612736), "1.5 GB");
    }

    #[test]
    fn test_format_size_terabytes() {
        assert_eq!(format_size(1099511627776), "1.0 TB"); // Exactly 1 TB
        assert_eq!(format_size(1649267441664), "1.5 TB");
    }
}
