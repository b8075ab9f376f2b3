// Output formatting — terminal display and report generation.

pub mod markdown;
pub mod terminal;

/// Round to two decimal places for display.
///
/// Negative zero is normalized so tiny negative values print as `0.00`.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so file names with accented letters
/// never cause a panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Caption shown under every result.
pub const DISCLAIMER: &str = "This output indicates a risk of earnings manipulation based on \
     narrative and keyword patterns across reports. It does not confirm manipulation.";
