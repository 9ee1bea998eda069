//! The plugin and its lifecycle hooks.

use vaultcss::{CompileError, Compiler, ConfigError, Options};

use crate::filter::is_stylesheet;
use crate::host::{derive_minify, host_css_config, HostBuildConfig, HostCssConfig};

/// When the host runs a stage relative to its own transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforce {
    Pre,
    Normal,
}

/// The three stages the plugin registers with the host, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginStage {
    /// Contributes [`host_css_config`].
    Config,
    /// Receives the resolved host config and builds the compiler.
    Scan,
    /// Compiles stylesheets.
    Generate,
}

impl PluginStage {
    pub const ALL: [PluginStage; 3] = [Self::Config, Self::Scan, Self::Generate];

    pub fn name(self) -> &'static str {
        match self {
            Self::Config => "vaultcss/vite:config",
            Self::Scan => "vaultcss/vite:scan",
            Self::Generate => "vaultcss/vite:generate",
        }
    }

    pub fn enforce(self) -> Enforce {
        match self {
            Self::Config | Self::Scan => Enforce::Pre,
            Self::Generate => Enforce::Normal,
        }
    }
}

/// Result of a transform hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub code: String,
}

/// Stylesheet compilation inside a bundler pipeline.
///
/// The host calls [`config_resolved`](Self::config_resolved), then
/// [`build_start`](Self::build_start), then [`scan`](Self::scan) and
/// [`generate`](Self::generate) for each module. Until `build_start` has
/// run, both transform hooks decline every module.
///
/// # Example
///
/// ```rust
/// use vaultcss::Options;
/// use vaultcss_vite::{HostBuildConfig, VaultPlugin};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut plugin = VaultPlugin::new(Options::default());
/// plugin.config_resolved(&HostBuildConfig::default());
/// plugin.build_start().unwrap();
///
/// let out = plugin
///     .generate(".a { @media (--md) { color: red } }", "/src/a.css")
///     .await
///     .unwrap()
///     .unwrap();
/// assert!(out.code.contains("48rem"));
/// # });
/// ```
#[derive(Debug)]
pub struct VaultPlugin {
    options: Options,
    minify: bool,
    compiler: Option<Compiler>,
}

impl VaultPlugin {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            minify: false,
            compiler: None,
        }
    }

    /// The configuration contributed by the config stage.
    pub fn config(&self) -> HostCssConfig {
        host_css_config()
    }

    /// Records the host's build settings.
    pub fn config_resolved(&mut self, config: &HostBuildConfig) {
        self.minify = derive_minify(config);
        log::debug!("host build resolved, minify = {}", self.minify);
    }

    /// Whether output will be minified, as derived from the host.
    pub fn minify(&self) -> bool {
        self.minify
    }

    /// Builds the compiler for this build.
    ///
    /// Builtin breakpoints are on unless the options switch them off; the
    /// minify flag always comes from the host.
    pub fn build_start(&mut self) -> Result<(), ConfigError> {
        let options = Options {
            enable_builtin_media: Some(self.options.enable_builtin_media.unwrap_or(true)),
            minify: self.minify,
            ..self.options.clone()
        };
        self.compiler = Some(Compiler::new(&options)?);
        log::debug!("compiler ready for build");
        Ok(())
    }

    /// The compiler, once the build has started.
    pub fn compiler(&self) -> Option<&Compiler> {
        self.compiler.as_ref()
    }

    /// Early pass: claims stylesheets and passes them through unchanged.
    pub fn scan(&self, code: &str, id: &str) -> Option<TransformOutput> {
        if self.compiler.is_none() || !is_stylesheet(id) {
            return None;
        }
        Some(TransformOutput {
            code: code.to_string(),
        })
    }

    /// Compiles a stylesheet module.
    ///
    /// Returns `Ok(None)` for modules the plugin does not handle. Errors
    /// name the module id.
    pub async fn generate(
        &self,
        code: &str,
        id: &str,
    ) -> Result<Option<TransformOutput>, CompileError> {
        let compiler = match &self.compiler {
            Some(compiler) if is_stylesheet(id) => compiler,
            _ => return Ok(None),
        };
        let code = compiler.compile_file(code, id).await?;
        Ok(Some(TransformOutput { code }))
    }
}
