// Keyword density: occurrences per thousand words.
//
// Counting is plain substring counting over the whole text. A keyword
// inside a longer word still counts ("risk" in "brisk"), and matches of a
// single keyword never overlap each other, mirroring `str::matches`.

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Total substring occurrences of every keyword in `text`.
///
/// Empty keywords are skipped; they would otherwise match between every
/// character.
pub fn occurrences(text: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|kw| !kw.is_empty())
        .map(|kw| text.matches(kw).count())
        .sum()
}

/// Keyword occurrences normalized by word count, scaled by 1000.
///
/// `density = occurrences / max(word_count, 1) * 1000`
///
/// Always non-negative. Returns 0.0 for empty text or an empty keyword list.
pub fn density(text: &str, keywords: &[&str]) -> f64 {
    let hits = occurrences(text, keywords);
    if hits == 0 {
        return 0.0;
    }
    let words = word_count(text).max(1);
    hits as f64 / words as f64 * 1000.0
}
