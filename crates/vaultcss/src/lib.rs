//! # vaultcss
//!
//! Stylesheet compilation with layered custom media breakpoints.
//!
//! A [`Compiler`] is configured once. It merges three sources of
//! `@custom-media` aliases into an effective table (builtin breakpoints, a
//! declaration file, an explicit table, later ones winning), then for each
//! stylesheet:
//!
//! 1. prepends the table as `@custom-media` declarations
//! 2. runs the transform engine (lightningcss by default) with custom media
//!    drafts, the deep selector combinator, error recovery, the resolved
//!    browser targets and the optional fluid value visitor
//! 3. pretty prints the result ([`Compiler::compile`] only)
//!
//! ## Quick start
//!
//! ```rust
//! use vaultcss::Compiler;
//!
//! let compiler = Compiler::builder()
//!     .targets("defaults")
//!     .media("--tablet", "(width >= 40rem)")
//!     .build()
//!     .unwrap();
//!
//! let css = compiler
//!     .optimize(".nav { @media (--tablet) { display: flex; } }", Some("nav.css"))
//!     .unwrap();
//! assert!(css.contains("40rem"));
//! ```
//!
//! ## Builtin breakpoints
//!
//! | Alias | Query |
//! |-------|-------|
//! | `--xxs` | `(width >= 23.4375rem)` |
//! | `--xs` | `(width >= 25rem)` |
//! | `--sm` | `(width >= 36rem)` |
//! | `--md` | `(width >= 48rem)` |
//! | `--lg` | `(width >= 64rem)` |
//! | `--xl` | `(width >= 80rem)` |
//! | `--xxl` | `(width >= 96rem)` |

mod compiler;
mod config;
mod error;
mod format;
mod inject;

pub mod engine;
pub mod media;

pub use compiler::{Compiler, CompilerBuilder, DEFAULT_FILENAME};
pub use config::{Options, ResolvedConfig};
pub use engine::{
    BrowserQuery, Drafts, FluidOptions, FluidUnit, LightningEngine, NonStandard, TargetMatrix,
    TransformEngine, TransformRequest,
};
pub use error::{CompileError, ConfigError, ConfigWarning, FormatError, TransformError};
pub use format::{CssFormatter, Formatter};
pub use inject::inject_custom_media;
pub use media::{
    builtin_media, load_custom_media, parse_custom_media, resolve_custom_media, CustomMediaTable,
    MediaLayers, ResolvedMedia, BUILTIN_BREAKPOINTS,
};
