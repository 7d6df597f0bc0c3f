/// Parse one whitespace-free token into a sample
///
/// Returns `None` for anything that is not a complete floating-point
/// literal, and for NaN. Infinities are kept.
///
/// ```rust
/// use outplot::table::parse_sample;
///
/// assert_eq!(parse_sample("1.5e3"), Some(1500.0));
/// assert_eq!(parse_sample("-0.25"), Some(-0.25));
/// assert_eq!(parse_sample("n/a"), None);
/// assert_eq!(parse_sample("12abc"), None);
/// ```
pub fn parse_sample(token: &str) -> Option<f64> {
    match fast_float::parse::<f64, _>(token) {
        Ok(value) if !value.is_nan() => Some(value),
        _ => None,
    }
}

/// Whether `word` occurs in `haystack` delimited by word boundaries
///
/// Word characters are ASCII alphanumerics and `_`, so `Time(s)` and
/// `Elapsed-Time` contain the word `Time` while `Timestamp` and `Time_s`
/// do not.
pub(crate) fn contains_word(haystack: &str, word: &str) -> bool {
    let bytes = haystack.as_bytes();
    haystack.match_indices(word).any(|(start, _)| {
        let end = start + word.len();
        let open = start == 0 || !is_word_byte(bytes[start - 1]);
        let close = end == bytes.len() || !is_word_byte(bytes[end]);
        open && close
    })
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
