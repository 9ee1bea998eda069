//! Materializing the effective custom media table into a stylesheet.

use crate::media::CustomMediaTable;

/// Prepends `table` to `css` as `@custom-media` declarations.
///
/// Declarations are written in table order, one per line, followed by a
/// newline and the untouched original text. An empty table returns `css`
/// as is. Declarations already present in `css` are left alone.
///
/// # Example
///
/// ```rust
/// use vaultcss::{inject_custom_media, CustomMediaTable};
///
/// let table = CustomMediaTable::new().with("--md", "(width >= 48rem)");
/// let css = inject_custom_media(&table, "@media (--md) { a { color: red } }");
///
/// assert_eq!(
///     css,
///     "@custom-media --md (width >= 48rem);\n@media (--md) { a { color: red } }"
/// );
/// ```
pub fn inject_custom_media(table: &CustomMediaTable, css: &str) -> String {
    if table.is_empty() {
        return css.to_string();
    }

    let declarations = table.to_declarations();
    let mut out = String::with_capacity(declarations.len() + 1 + css.len());
    out.push_str(&declarations);
    out.push('\n');
    out.push_str(css);
    out
}
