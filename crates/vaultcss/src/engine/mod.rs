//! The transform stage.
//!
//! The compiler hands each stylesheet to a [`TransformEngine`] together with
//! a [`TransformRequest`] describing the fixed feature set:
//!
//! | Setting | Value |
//! |---------|-------|
//! | draft `customMedia` | on |
//! | non-standard `deepSelectorCombinator` | on |
//! | error recovery | on |
//! | targets | resolved once from the browser query |
//! | visitor | [`FluidVisitor`] when fluid options are configured |
//!
//! [`LightningEngine`] is the production implementation. Tests and hosts can
//! supply their own engine to exercise the pipeline without it.

mod fluid;
mod lightning;
mod targets;

pub use fluid::{FluidOptions, FluidScale, FluidUnit, FluidVisitor, FLUID_FUNCTION};
pub use lightning::LightningEngine;
pub use targets::{BrowserQuery, TargetMatrix, DEFAULT_BROWSER_QUERY};

use crate::error::TransformError;

/// Draft syntax the engine must accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drafts {
    pub custom_media: bool,
}

/// Non-standard syntax the engine must accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonStandard {
    pub deep_selector_combinator: bool,
}

/// Everything an engine needs to transform one stylesheet.
#[derive(Debug, Clone, Copy)]
pub struct TransformRequest<'a> {
    pub filename: &'a str,
    pub code: &'a str,
    pub minify: bool,
    pub targets: TargetMatrix,
    pub drafts: Drafts,
    pub non_standard: NonStandard,
    pub error_recovery: bool,
    pub fluid: Option<&'a FluidOptions>,
}

impl<'a> TransformRequest<'a> {
    /// A request with the feature set every compiler call uses.
    pub fn new(filename: &'a str, code: &'a str) -> Self {
        Self {
            filename,
            code,
            minify: false,
            targets: TargetMatrix::unconstrained(),
            drafts: Drafts { custom_media: true },
            non_standard: NonStandard {
                deep_selector_combinator: true,
            },
            error_recovery: true,
            fluid: None,
        }
    }
}

/// A CSS transform engine.
///
/// Implementations must be pure with respect to the request: the same
/// request always yields the same output, and nothing is retained between
/// calls.
pub trait TransformEngine: Send + Sync {
    /// Transforms `request.code`, returning the printed stylesheet.
    ///
    /// Recoverable per-rule errors are skipped when `error_recovery` is set.
    /// Anything else is returned as a [`TransformError`] carrying the
    /// engine's message.
    fn transform(&self, request: &TransformRequest<'_>) -> Result<String, TransformError>;
}

impl<T: TransformEngine + ?Sized> TransformEngine for &T {
    fn transform(&self, request: &TransformRequest<'_>) -> Result<String, TransformError> {
        (**self).transform(request)
    }
}

impl<T: TransformEngine + ?Sized> TransformEngine for std::sync::Arc<T> {
    fn transform(&self, request: &TransformRequest<'_>) -> Result<String, TransformError> {
        (**self).transform(request)
    }
}
