//! # vaultcss-vite
//!
//! Bundler pipeline hooks for [`vaultcss`].
//!
//! The plugin registers three stages with the host (see [`PluginStage`]):
//!
//! - `config`: turns on the custom media draft in the host's CSS settings
//! - `scan`: records the host build settings, builds the compiler at build
//!   start and claims stylesheet modules
//! - `generate`: compiles each stylesheet module
//!
//! The host glue itself lives outside this crate; it forwards its lifecycle
//! calls to a [`VaultPlugin`].
//!
//! ## Exported types
//!
//! - [`VaultPlugin`]: the lifecycle hooks
//! - [`HostBuildConfig`]: host build settings read by the plugin
//! - [`HostCssConfig`]: settings contributed to the host
//! - [`TransformOutput`]: what a transform hook returns
//! - [`is_stylesheet`]: the module id filter

mod filter;
mod host;
mod plugin;

pub use filter::is_stylesheet;
pub use host::{
    derive_minify, host_css_config, CssSection, DraftsSection, HostBuildConfig, HostCssConfig,
    LightningSection,
};
pub use plugin::{Enforce, PluginStage, TransformOutput, VaultPlugin};
