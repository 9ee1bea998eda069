//! Pretty printing of transformed stylesheets.

use std::future::Future;

use lightningcss::stylesheet::{ParserFlags, ParserOptions, PrinterOptions, StyleSheet};

use crate::error::FormatError;

/// Lays out CSS text for output.
///
/// Formatting changes whitespace and layout only. Input the formatter
/// cannot parse is an error; no recovery is attempted.
pub trait Formatter: Send + Sync {
    fn format(&self, css: &str) -> impl Future<Output = Result<String, FormatError>> + Send;
}

/// Formatter that re-prints CSS with the standard CSS grammar.
///
/// Output uses two-space indentation, one declaration per line, a blank
/// line between rules and a trailing newline. The same input always yields
/// the same bytes.
///
/// # Example
///
/// ```rust
/// use vaultcss::CssFormatter;
///
/// let out = CssFormatter.format_sync("a{color:red}").unwrap();
/// assert_eq!(out, "a {\n  color: red;\n}\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CssFormatter;

impl CssFormatter {
    /// Formats synchronously.
    pub fn format_sync(&self, css: &str) -> Result<String, FormatError> {
        let options = ParserOptions {
            filename: "output.css".to_string(),
            flags: ParserFlags::DEEP_SELECTOR_COMBINATOR,
            ..ParserOptions::default()
        };
        let stylesheet =
            StyleSheet::parse(css, options).map_err(|e| FormatError::new(e.to_string()))?;
        let printed = stylesheet
            .to_css(PrinterOptions::default())
            .map_err(|e| FormatError::new(e.to_string()))?;

        let mut out = printed.code;
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }
}

impl Formatter for CssFormatter {
    fn format(&self, css: &str) -> impl Future<Output = Result<String, FormatError>> + Send {
        std::future::ready(self.format_sync(css))
    }
}
