//! Display helpers for document cards.

use crate::model::Topic;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count with binary units, at most two decimals and no
/// trailing zeros: `0 Bytes`, `512 Bytes`, `1.5 KB`, `3 MB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Names of the first `limit` topics, plus a `+N more` marker for the rest.
pub fn topic_preview(topics: &[Topic], limit: usize) -> Vec<String> {
    let mut labels: Vec<String> = topics.iter().take(limit).map(|t| t.name.clone()).collect();
    if topics.len() > limit {
        labels.push(format!("+{} more", topics.len() - limit));
    }
    labels
}
