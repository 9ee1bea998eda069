//! Extraction of `@custom-media` declarations from stylesheet text.
//!
//! This is a pattern scan, not a CSS parse. A declaration is recognized as
//!
//! ```text
//! @custom-media <whitespace> --name <whitespace> <expression> ;
//! ```
//!
//! where the name matches `--[A-Za-z0-9_-]+` and the expression is any run
//! of characters other than `;`. Anything that does not fit the shape is
//! skipped without error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::table::CustomMediaTable;

static CUSTOM_MEDIA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@custom-media\s+(--[A-Za-z0-9_-]+)\s+([^;]+);")
        .expect("custom media pattern is valid")
});

static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^--[A-Za-z0-9_-]+$").expect("custom media name pattern is valid"));

/// Whether `name` is an alias [`parse_custom_media`] would recognize.
///
/// ```rust
/// use vaultcss::media::is_custom_media_name;
///
/// assert!(is_custom_media_name("--tablet"));
/// assert!(!is_custom_media_name("--a.b"));
/// ```
pub fn is_custom_media_name(name: &str) -> bool {
    NAME.is_match(name)
}

/// Collects every well-formed `@custom-media` declaration in `css`.
///
/// Declarations are read left to right; when a name appears more than once
/// the last expression wins. Expressions are trimmed.
///
/// # Example
///
/// ```rust
/// use vaultcss::parse_custom_media;
///
/// let table = parse_custom_media(
///     "@custom-media --md (width >= 48rem);\n@custom-media --dark (prefers-color-scheme: dark);",
/// );
/// assert_eq!(table.get("--md"), Some("(width >= 48rem)"));
/// assert_eq!(table.get("--dark"), Some("(prefers-color-scheme: dark)"));
/// ```
pub fn parse_custom_media(css: &str) -> CustomMediaTable {
    let mut table = CustomMediaTable::new();
    for caps in CUSTOM_MEDIA.captures_iter(css) {
        table.insert(&caps[1], caps[2].trim());
    }
    table
}
