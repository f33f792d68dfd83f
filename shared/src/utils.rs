//! # Shared Utility Functions
//!
//! Formatting helpers used when sign-up data is shown or logged.
//!
//! ## Secret Masking
//!
//! - [`mask_secret`] - Replace every character with `*`
//! - [`format_secret_hint`] - Keep the first and last N characters, elide the middle
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::mask_secret;
//!
//! assert_eq!(mask_secret("secret1"), "*******");
//! ```

/// Replace every character of `secret` with `*`, keeping its length visible.
///
/// Lengths are counted in characters, not bytes.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_secret;
///
/// assert_eq!(mask_secret(""), "");
/// assert_eq!(mask_secret("pässwörd"), "********");
/// ```
pub fn mask_secret(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

/// Show the first `prefix_len` and last `suffix_len` characters of a value.
///
/// Values too short to elide anything are fully masked instead of being
/// returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_secret_hint;
///
/// assert_eq!(format_secret_hint("alice@example.com", 2, 5), "al...e.com");
/// assert_eq!(format_secret_hint("short", 4, 4), "*****");
/// ```
pub fn format_secret_hint(value: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();

    if len <= prefix_len + suffix_len {
        return mask_secret(value);
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("secret1"), "*******");
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    fn test_mask_secret_counts_chars() {
        assert_eq!(mask_secret("ü"), "*");
    }

    #[test]
    fn test_format_secret_hint() {
        assert_eq!(format_secret_hint("alice@example.com", 2, 5), "al...e.com");
        assert_eq!(format_secret_hint("abcdefghij", 1, 1), "a...j");
    }

    #[test]
    fn test_format_secret_hint_short() {
        assert_eq!(format_secret_hint("abc", 2, 2), "***");
        assert_eq!(format_secret_hint("", 0, 0), "");
    }
}
