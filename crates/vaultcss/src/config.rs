//! Compiler configuration.
//!
//! [`Options`] is the construction-time surface. It deserializes from the
//! same camelCase keys the bundler plugin accepts, so a JSON or YAML file
//! can be loaded with [`Options::from_path`]:
//!
//! ```json
//! {
//!   "targets": ["> 0.5%", "not dead"],
//!   "minify": true,
//!   "enableBuiltinMedia": true,
//!   "customMediaPath": "src/styles/media.css",
//!   "customMedia": { "--tablet": "(width >= 40rem)" },
//!   "valueScalingConfig": { "unit": "vw", "minViewport": 375, "maxViewport": 1440 }
//! }
//! ```
//!
//! [`ResolvedConfig`] is what a compiler actually runs with. It is computed
//! once from the options and never changes afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::{BrowserQuery, FluidOptions, TargetMatrix};
use crate::error::{ConfigError, ConfigWarning};
use crate::media::{resolve_custom_media, CustomMediaTable, MediaLayers};

/// Construction-time options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Browser-support query. Defaults to `"defaults"`.
    pub targets: Option<BrowserQuery>,
    /// Print minified output.
    pub minify: bool,
    /// Value-scaling visitor configuration. No scaling when absent.
    #[serde(alias = "fluid")]
    pub value_scaling_config: Option<FluidOptions>,
    /// Seed custom media with the builtin breakpoints. Defaults to `true`.
    #[serde(alias = "valutMediaQuery")]
    pub enable_builtin_media: Option<bool>,
    /// File to read `@custom-media` declarations from.
    pub custom_media_path: Option<PathBuf>,
    /// Explicit custom media, applied over every other source.
    pub custom_media: Option<CustomMediaTable>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from a JSON or YAML file, chosen by extension.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML; anything else as
    /// JSON.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        );
        let parsed = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Whether builtin breakpoints are enabled, applying the default.
    pub fn builtin_media_enabled(&self) -> bool {
        self.enable_builtin_media.unwrap_or(true)
    }

    pub(crate) fn media_layers(&self) -> MediaLayers {
        MediaLayers {
            builtin: self.builtin_media_enabled(),
            path: self.custom_media_path.clone(),
            explicit: self.custom_media.clone(),
        }
    }
}

/// The immutable configuration a compiler runs with.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    targets: TargetMatrix,
    minify: bool,
    fluid: Option<FluidOptions>,
    custom_media: CustomMediaTable,
    warnings: Vec<ConfigWarning>,
}

impl ResolvedConfig {
    /// Resolves targets, validates scaling options and merges custom media.
    ///
    /// A missing or unreadable custom media file is recorded as a warning,
    /// not an error.
    pub fn resolve(options: &Options) -> Result<Self, ConfigError> {
        let query = options.targets.clone().unwrap_or_default();
        let targets = TargetMatrix::from_query(&query)?;

        if let Some(fluid) = &options.value_scaling_config {
            fluid.validate()?;
        }

        let media = resolve_custom_media(&options.media_layers());
        log::debug!(
            "resolved {} custom media ({})",
            media.table.len(),
            media.table.names().collect::<Vec<_>>().join(", ")
        );

        Ok(Self {
            targets,
            minify: options.minify,
            fluid: options.value_scaling_config.clone(),
            custom_media: media.table,
            warnings: media.warnings,
        })
    }

    pub fn targets(&self) -> TargetMatrix {
        self.targets
    }

    pub fn minify(&self) -> bool {
        self.minify
    }

    pub fn fluid(&self) -> Option<&FluidOptions> {
        self.fluid.as_ref()
    }

    /// The effective custom media table.
    pub fn custom_media(&self) -> &CustomMediaTable {
        &self.custom_media
    }

    /// Degradations recorded while resolving.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}
