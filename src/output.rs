use crate::{Segment, TranscriptResult};

/// Format a second offset as `H:MM:SS`, or `M:SS` when under an hour.
/// Fractional seconds are truncated, not rounded.
pub fn format_time(seconds: f64) -> String {
    let total = seconds as u64;
    let (mins, secs) = (total / 60, total % 60);
    let (hours, mins) = (mins / 60, mins % 60);
    if hours > 0 {
        format!("{hours}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

/// Render segments as plain text, one segment per line, no timestamps
pub fn render_plain(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join("\n")
}

/// Render segments as `[M:SS] text` lines
pub fn render_timestamped(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| format!("[{}] {}", format_time(s.start), s.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the full response payload as pretty JSON
pub fn render_json(result: &TranscriptResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
