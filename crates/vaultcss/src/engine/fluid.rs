//! Fluid value scaling.
//!
//! [`FluidVisitor`] walks declaration values and replaces every
//! `fluid(<min>, <max>)` function with a `clamp()` that grows linearly from
//! `<min>` at the smallest viewport to `<max>` at the largest:
//!
//! ```css
//! h1 { font-size: fluid(16px, 24px); }
//! /* becomes, with the default options */
//! h1 { font-size: clamp(1rem,.8239rem + .7512vw,1.5rem); }
//! ```
//!
//! Arguments may be `px` or `rem` lengths (or a bare `0`). Functions whose
//! arguments don't fit are left as written.

use std::convert::Infallible;

use lightningcss::properties::custom::{Function, Token, TokenList, TokenOrValue};
use lightningcss::values::ident::Ident;
use lightningcss::values::length::LengthValue;
use lightningcss::visitor::{Visit, VisitTypes, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the function the visitor rewrites.
pub const FLUID_FUNCTION: &str = "fluid";

/// Relative unit the preferred value scales with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FluidUnit {
    /// Viewport width.
    #[default]
    Vw,
    /// Viewport inline size.
    Vi,
    /// Container query width.
    Cqw,
    /// Container query inline size.
    Cqi,
}

impl FluidUnit {
    fn length(self, value: f32) -> LengthValue {
        match self {
            FluidUnit::Vw => LengthValue::Vw(value),
            FluidUnit::Vi => LengthValue::Vi(value),
            FluidUnit::Cqw => LengthValue::Cqw(value),
            FluidUnit::Cqi => LengthValue::Cqi(value),
        }
    }
}

impl std::str::FromStr for FluidUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vw" => Ok(FluidUnit::Vw),
            "vi" => Ok(FluidUnit::Vi),
            "cqw" => Ok(FluidUnit::Cqw),
            "cqi" => Ok(FluidUnit::Cqi),
            other => Err(format!(
                "unknown fluid unit '{}'. Available: vw, vi, cqw, cqi",
                other
            )),
        }
    }
}

/// Configuration of the value-scaling visitor.
///
/// Viewport bounds are in `px`. Values interpolate between
/// `min_viewport` and `max_viewport` and are clamped outside of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluidOptions {
    pub unit: FluidUnit,
    pub min_viewport: f32,
    pub max_viewport: f32,
    pub root_font_size: f32,
}

impl Default for FluidOptions {
    fn default() -> Self {
        Self {
            unit: FluidUnit::Vw,
            min_viewport: 375.0,
            max_viewport: 1440.0,
            root_font_size: 16.0,
        }
    }
}

impl FluidOptions {
    /// Rejects options that cannot produce a finite scale.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.root_font_size.is_finite() && self.root_font_size > 0.0) {
            return Err(ConfigError::InvalidFluid(format!(
                "rootFontSize must be positive, got {}",
                self.root_font_size
            )));
        }
        if !(self.min_viewport.is_finite() && self.max_viewport.is_finite())
            || self.max_viewport <= self.min_viewport
        {
            return Err(ConfigError::InvalidFluid(format!(
                "maxViewport ({}) must be greater than minViewport ({})",
                self.max_viewport, self.min_viewport
            )));
        }
        Ok(())
    }

    /// Computes the clamp bounds and preferred value for a `min`/`max` pair
    /// given in `px`.
    pub fn scale(&self, min_px: f32, max_px: f32) -> FluidScale {
        let slope = (max_px - min_px) / (self.max_viewport - self.min_viewport);
        let intercept = min_px - slope * self.min_viewport;
        FluidScale {
            lower_rem: round(min_px.min(max_px) / self.root_font_size),
            upper_rem: round(min_px.max(max_px) / self.root_font_size),
            intercept_rem: round(intercept / self.root_font_size),
            slope: round(slope * 100.0),
        }
    }
}

/// Result of [`FluidOptions::scale`]: `clamp(lower, intercept + slope·unit, upper)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidScale {
    pub lower_rem: f32,
    pub upper_rem: f32,
    pub intercept_rem: f32,
    pub slope: f32,
}

fn round(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}

/// Visitor rewriting `fluid()` functions according to [`FluidOptions`].
#[derive(Debug, Clone)]
pub struct FluidVisitor<'a> {
    options: &'a FluidOptions,
    rewritten: usize,
}

impl<'a> FluidVisitor<'a> {
    pub fn new(options: &'a FluidOptions) -> Self {
        Self {
            options,
            rewritten: 0,
        }
    }

    /// Number of functions rewritten so far.
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }

    fn to_px(&self, token: &TokenOrValue<'_>) -> Option<f32> {
        match token {
            TokenOrValue::Length(LengthValue::Px(px)) => Some(*px),
            TokenOrValue::Length(LengthValue::Rem(rem)) => Some(rem * self.options.root_font_size),
            TokenOrValue::Token(Token::Number { value, .. }) if *value == 0.0 => Some(0.0),
            _ => None,
        }
    }

    fn rewrite<'i>(&self, function: &Function<'i>) -> Option<TokenOrValue<'i>> {
        if !function.name.0.eq_ignore_ascii_case(FLUID_FUNCTION) {
            return None;
        }

        let args: Vec<&TokenOrValue<'i>> = function
            .arguments
            .0
            .iter()
            .filter(|t| !matches!(t, TokenOrValue::Token(Token::WhiteSpace(_) | Token::Comma)))
            .collect();
        let [min, max] = args.as_slice() else {
            log::debug!("fluid() expects two lengths, got {} arguments", args.len());
            return None;
        };
        let (min_px, max_px) = (self.to_px(min)?, self.to_px(max)?);

        let scale = self.options.scale(min_px, max_px);
        if scale.slope == 0.0 {
            return Some(TokenOrValue::Length(LengthValue::Rem(scale.lower_rem)));
        }

        let relative = |value: f32| TokenOrValue::Length(self.options.unit.length(value));
        let rem = |value: f32| TokenOrValue::Length(LengthValue::Rem(value));
        // Signs live in the operator; the tokenizer would glue `+.5vw` or
        // `vw-.5rem` into a single dimension.
        let (first, op, second) = if scale.intercept_rem >= 0.0 {
            let op = if scale.slope < 0.0 { '-' } else { '+' };
            (rem(scale.intercept_rem), op, relative(scale.slope.abs()))
        } else if scale.slope > 0.0 {
            (relative(scale.slope), '-', rem(-scale.intercept_rem))
        } else {
            (rem(scale.intercept_rem), '-', relative(-scale.slope))
        };

        let mut arguments = vec![
            TokenOrValue::Length(LengthValue::Rem(scale.lower_rem)),
            TokenOrValue::Token(Token::Comma),
        ];
        arguments.extend([
            first,
            TokenOrValue::Token(Token::WhiteSpace(" ".into())),
            TokenOrValue::Token(Token::Delim(op)),
            TokenOrValue::Token(Token::WhiteSpace(" ".into())),
            second,
        ]);
        arguments.push(TokenOrValue::Token(Token::Comma));
        arguments.push(TokenOrValue::Length(LengthValue::Rem(scale.upper_rem)));

        Some(TokenOrValue::Function(Function {
            name: Ident("clamp".into()),
            arguments: TokenList(arguments),
        }))
    }
}

impl<'a, 'i> Visitor<'i> for FluidVisitor<'a> {
    type Error = Infallible;

    fn visit_types(&self) -> VisitTypes {
        VisitTypes::TOKENS
    }

    fn visit_token(&mut self, token: &mut TokenOrValue<'i>) -> Result<(), Self::Error> {
        token.visit_children(self)?;

        let replacement = match token {
            TokenOrValue::Function(function) => self.rewrite(function),
            _ => None,
        };
        if let Some(replacement) = replacement {
            *token = replacement;
            self.rewritten += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        assert!(FluidOptions::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_viewports() {
        let options = FluidOptions {
            min_viewport: 1200.0,
            max_viewport: 320.0,
            ..FluidOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ConfigError::InvalidFluid(_))
        ));
    }

    #[test]
    fn test_rejects_zero_font_size() {
        let options = FluidOptions {
            root_font_size: 0.0,
            ..FluidOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_scale_default_options() {
        let scale = FluidOptions::default().scale(16.0, 24.0);
        assert_eq!(scale.lower_rem, 1.0);
        assert_eq!(scale.upper_rem, 1.5);
        assert!((scale.intercept_rem - 0.8239).abs() < 1e-3);
        assert!((scale.slope - 0.7512).abs() < 1e-3);
    }

    #[test]
    fn test_scale_reaches_bounds_at_viewports() {
        let options = FluidOptions {
            min_viewport: 400.0,
            max_viewport: 1200.0,
            root_font_size: 16.0,
            unit: FluidUnit::Cqi,
        };
        let scale = options.scale(32.0, 64.0);
        let at = |viewport: f32| scale.intercept_rem * 16.0 + scale.slope * viewport / 100.0;

        assert!((at(400.0) - 32.0).abs() < 0.01);
        assert!((at(1200.0) - 64.0).abs() < 0.01);
    }

    #[test]
    fn test_scale_shrinking_value_orders_bounds() {
        let scale = FluidOptions::default().scale(48.0, 32.0);
        assert_eq!(scale.lower_rem, 2.0);
        assert_eq!(scale.upper_rem, 3.0);
        assert!(scale.slope < 0.0);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("cqi".parse::<FluidUnit>(), Ok(FluidUnit::Cqi));
        assert_eq!("VW".parse::<FluidUnit>(), Ok(FluidUnit::Vw));
        assert!("em".parse::<FluidUnit>().is_err());
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: FluidOptions =
            serde_json::from_str(r#"{"unit": "cqw", "minViewport": 320, "maxViewport": 1280}"#)
                .unwrap();
        assert_eq!(options.unit, FluidUnit::Cqw);
        assert_eq!(options.min_viewport, 320.0);
        assert_eq!(options.max_viewport, 1280.0);
        assert_eq!(options.root_font_size, 16.0);
    }
}
