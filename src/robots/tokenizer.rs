//! Directive tokenizer for robots.txt documents
//!
//! Splits raw document text into trimmed, non-empty logical lines and splits
//! each line into a directive key and value at the first colon. Malformed
//! lines are silently dropped; tokenization never fails.

/// One key/value instruction line from a robots.txt document.
///
/// Transient: produced by [`tokenize`] and consumed by the group
/// accumulator, never retained past a single parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Directive key, trimmed and lowercased (e.g. `user-agent`)
    pub key: String,
    /// Directive value, trimmed but otherwise untouched
    pub value: String,
}

/// Tokenizes raw robots.txt text into an ordered sequence of directives.
///
/// Handles both `\n` and `\r\n` line endings and a leading UTF-8 BOM.
/// Lines without a colon, or with an empty key, are skipped. Values may
/// themselves contain colons (e.g. sitemap URLs): the split happens at the
/// first colon only.
pub fn tokenize(raw: &str) -> Vec<Directive> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                return None;
            }
            Some(Directive {
                key,
                value: value.trim().to_string(),
            })
        })
        .collect()
}
