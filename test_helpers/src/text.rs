//! Text helpers for behavioural step arguments.

/// Strips one layer of matching single or double quotes from a step argument.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| trimmed.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(trimmed)
}
