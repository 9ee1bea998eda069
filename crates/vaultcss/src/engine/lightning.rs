//! Transform engine backed by [`lightningcss`].

use std::sync::{Arc, RwLock};

use lightningcss::stylesheet::{
    MinifyOptions, ParserFlags, ParserOptions, PrinterOptions, StyleSheet,
};
use lightningcss::visitor::Visit;

use super::fluid::FluidVisitor;
use super::{TransformEngine, TransformRequest};
use crate::error::TransformError;

/// Parses, visits, lowers and prints stylesheets with lightningcss.
///
/// The steps mirror a single `transform()` call of the engine:
///
/// 1. parse with the requested draft and non-standard syntax, skipping
///    invalid rules when error recovery is on
/// 2. run the fluid visitor, if configured
/// 3. minify, which resolves custom media and lowers syntax for the targets
/// 4. print, minified or not
///
/// # Example
///
/// ```rust
/// use vaultcss::{LightningEngine, TransformEngine, TransformRequest};
///
/// let css = "@custom-media --md (width >= 48rem);\n.a { @media (--md) { color: red } }";
/// let out = LightningEngine::new()
///     .transform(&TransformRequest::new("a.css", css))
///     .unwrap();
/// assert!(out.contains("48rem"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LightningEngine;

impl LightningEngine {
    pub fn new() -> Self {
        Self
    }
}

fn parser_flags(request: &TransformRequest<'_>) -> ParserFlags {
    let mut flags = ParserFlags::empty();
    if request.drafts.custom_media {
        flags |= ParserFlags::CUSTOM_MEDIA;
    }
    if request.non_standard.deep_selector_combinator {
        flags |= ParserFlags::DEEP_SELECTOR_COMBINATOR;
    }
    flags
}

impl TransformEngine for LightningEngine {
    fn transform(&self, request: &TransformRequest<'_>) -> Result<String, TransformError> {
        let file = request.filename;
        let warnings = Arc::new(RwLock::new(Vec::new()));
        let options = ParserOptions {
            filename: file.to_string(),
            error_recovery: request.error_recovery,
            flags: parser_flags(request),
            warnings: Some(Arc::clone(&warnings)),
            ..ParserOptions::default()
        };

        let mut stylesheet =
            StyleSheet::parse(request.code, options).map_err(|e| TransformError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?;

        if let Ok(recovered) = warnings.read() {
            for warning in recovered.iter() {
                log::warn!("{}: skipped invalid rule: {}", file, warning);
            }
        }

        if let Some(fluid) = request.fluid {
            let mut visitor = FluidVisitor::new(fluid);
            if let Err(never) = stylesheet.visit(&mut visitor) {
                match never {}
            }
            log::debug!("{}: rewrote {} fluid values", file, visitor.rewritten());
        }

        stylesheet
            .minify(MinifyOptions {
                targets: request.targets.to_targets(),
                ..MinifyOptions::default()
            })
            .map_err(|e| TransformError::Minify {
                file: file.to_string(),
                message: e.to_string(),
            })?;

        let printed = stylesheet
            .to_css(PrinterOptions {
                minify: request.minify,
                targets: request.targets.to_targets(),
                ..PrinterOptions::default()
            })
            .map_err(|e| TransformError::Print {
                file: file.to_string(),
                message: e.to_string(),
            })?;

        Ok(printed.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{BrowserQuery, FluidOptions, TargetMatrix};
    use lightningcss::properties::Property;
    use lightningcss::rules::CssRule;

    fn defaults() -> TargetMatrix {
        TargetMatrix::from_query(&BrowserQuery::default()).unwrap()
    }

    #[test]
    fn test_plain_rule_passes_through() {
        let request = TransformRequest {
            targets: defaults(),
            ..TransformRequest::new("a.css", "a{color:red}")
        };
        let out = LightningEngine::new().transform(&request).unwrap();
        assert!(out.contains("color: red"));
    }

    #[test]
    fn test_minified_output() {
        let request = TransformRequest {
            minify: true,
            targets: defaults(),
            ..TransformRequest::new("a.css", "a {\n  color: red;\n}\n")
        };
        let out = LightningEngine::new().transform(&request).unwrap();
        assert_eq!(out, "a{color:red}");
    }

    #[test]
    fn test_resolves_custom_media() {
        let css = "@custom-media --md (width >= 48rem);\n.test { @media (--md) { color: red; } }";
        let request = TransformRequest {
            targets: defaults(),
            ..TransformRequest::new("a.css", css)
        };
        let out = LightningEngine::new().transform(&request).unwrap();

        assert!(out.contains("48rem"));
        assert!(!out.contains("--md"));
    }

    #[test]
    fn test_undefined_custom_media_is_fatal() {
        let css = ".test { @media (--md) { color: red; } }";
        let request = TransformRequest::new("app.css", css);

        let err = LightningEngine::new().transform(&request).unwrap_err();

        assert!(matches!(err, TransformError::Minify { .. }));
        assert_eq!(err.file(), "app.css");
        assert!(err.message().contains("--md"));
    }

    #[test]
    fn test_error_recovery_skips_bad_rules() {
        let css = ".ok { color: red; }\n123 { color: blue; }\n.also { color: green; }";
        let request = TransformRequest::new("a.css", css);

        let out = LightningEngine::new().transform(&request).unwrap();

        assert!(out.contains(".ok"));
        assert!(out.contains(".also"));
        assert!(!out.contains("blue"));
    }

    #[test]
    fn test_without_error_recovery_bad_rule_is_fatal() {
        let css = ".ok { color: red; }\n123 { color: blue; }";
        let request = TransformRequest {
            error_recovery: false,
            ..TransformRequest::new("a.css", css)
        };

        let err = LightningEngine::new().transform(&request).unwrap_err();

        assert!(matches!(err, TransformError::Parse { .. }));
    }

    #[test]
    fn test_deep_selector_combinator_accepted() {
        let request = TransformRequest::new("a.css", ".parent >>> .child { color: red; }");
        let out = LightningEngine::new().transform(&request).unwrap();
        assert!(out.contains(">>>"));
    }

    fn fluid_font_size(css_value: &str, minify: bool) -> String {
        let fluid = FluidOptions::default();
        let css = format!("h1 {{ font-size: {}; }}", css_value);
        let request = TransformRequest {
            minify,
            fluid: Some(&fluid),
            ..TransformRequest::new("a.css", &css)
        };
        LightningEngine::new().transform(&request).unwrap()
    }

    fn reparsed_font_size_is_typed(css: &str) -> bool {
        let stylesheet = StyleSheet::parse(css, ParserOptions::default()).unwrap();
        match &stylesheet.rules.0[0] {
            CssRule::Style(rule) => matches!(
                rule.declarations.declarations.as_slice(),
                [Property::FontSize(_)]
            ),
            _ => false,
        }
    }

    #[test]
    fn test_fluid_growing_value() {
        let out = fluid_font_size("fluid(16px, 24px)", false);
        assert_eq!(
            out,
            "h1 {\n  font-size: clamp(1rem,.8239rem + .7512vw,1.5rem);\n}\n"
        );
        assert!(reparsed_font_size_is_typed(&out));
    }

    #[test]
    fn test_fluid_growing_value_minified() {
        let out = fluid_font_size("fluid(16px, 24px)", true);
        assert_eq!(out, "h1{font-size:clamp(1rem,.8239rem + .7512vw,1.5rem)}");
        assert!(reparsed_font_size_is_typed(&out));
    }

    #[test]
    fn test_fluid_negative_intercept() {
        let out = fluid_font_size("fluid(16px, 64px)", false);
        assert_eq!(
            out,
            "h1 {\n  font-size: clamp(1rem,4.507vw - .0563rem,4rem);\n}\n"
        );
        assert!(reparsed_font_size_is_typed(&out));
    }

    #[test]
    fn test_fluid_shrinking_value() {
        let out = fluid_font_size("fluid(48px, 32px)", false);
        assert_eq!(
            out,
            "h1 {\n  font-size: clamp(2rem,3.3521rem - 1.5023vw,3rem);\n}\n"
        );
        assert!(reparsed_font_size_is_typed(&out));
    }

    #[test]
    fn test_fluid_equal_bounds_collapse() {
        let out = fluid_font_size("fluid(1rem, 16px)", true);
        assert_eq!(out, "h1{font-size:1rem}");
    }

    #[test]
    fn test_fluid_left_alone_without_options() {
        let request = TransformRequest::new("a.css", "h1 { font-size: fluid(16px, 24px); }");
        let out = LightningEngine::new().transform(&request).unwrap();
        assert!(out.contains("fluid("));
    }
}
