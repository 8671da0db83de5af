//! Account list parsing and token masking.

/// Number of leading token characters shown in logs and notifications.
pub const MASK_VISIBLE_CHARS: usize = 10;

/// Split raw account text into trimmed, non-blank lines in input order.
pub fn parse_accounts(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Token part of an account line: everything before the first `|`.
///
/// Text after the `|` is reserved for per-account options and ignored.
pub fn account_token(line: &str) -> &str {
    line.split('|').next().unwrap_or(line).trim()
}

/// First [`MASK_VISIBLE_CHARS`] characters of `token` followed by `...`.
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(MASK_VISIBLE_CHARS).collect();
    format!("{visible}...")
}
