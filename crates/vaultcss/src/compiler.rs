//! The compiler: inject → transform → format.

use std::path::PathBuf;

use crate::config::{Options, ResolvedConfig};
use crate::engine::{
    BrowserQuery, FluidOptions, LightningEngine, TransformEngine, TransformRequest,
};
use crate::error::{CompileError, ConfigError, ConfigWarning, TransformError};
use crate::format::{CssFormatter, Formatter};
use crate::inject::inject_custom_media;
use crate::media::CustomMediaTable;

/// Filename reported to the engine when the caller gives none.
pub const DEFAULT_FILENAME: &str = "input.css";

/// Compiles stylesheets with a fixed, resolved configuration.
///
/// A compiler is built once and then shared; every call works on its own
/// input and never mutates the compiler, so concurrent calls are safe.
///
/// # Example
///
/// ```rust
/// use vaultcss::Compiler;
///
/// let compiler = Compiler::builder().minify(true).build().unwrap();
///
/// let css = compiler
///     .optimize(".card { @media (--md) { padding: 2rem; } }", None)
///     .unwrap();
/// assert!(css.contains("48rem"));
/// ```
#[derive(Debug)]
pub struct Compiler<E = LightningEngine, F = CssFormatter> {
    config: ResolvedConfig,
    engine: E,
    formatter: F,
}

impl Compiler {
    /// Creates a compiler from options, using the lightningcss engine and
    /// the CSS formatter.
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        CompilerBuilder::from_options(options.clone()).build()
    }

    /// Starts building a compiler.
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }
}

impl<E: TransformEngine, F: Formatter> Compiler<E, F> {
    /// The configuration every call runs with.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Degradations recorded while resolving the configuration.
    pub fn warnings(&self) -> &[ConfigWarning] {
        self.config.warnings()
    }

    /// Injects custom media and runs the transform engine.
    ///
    /// `file` names the stylesheet in engine diagnostics and defaults to
    /// [`DEFAULT_FILENAME`]. The output is not formatted.
    pub fn optimize(&self, input: &str, file: Option<&str>) -> Result<String, TransformError> {
        let filename = file.unwrap_or(DEFAULT_FILENAME);
        let code = inject_custom_media(self.config.custom_media(), input);

        let request = TransformRequest {
            minify: self.config.minify(),
            targets: self.config.targets(),
            fluid: self.config.fluid(),
            ..TransformRequest::new(filename, &code)
        };
        log::debug!("transforming {} ({} bytes)", filename, code.len());
        self.engine.transform(&request)
    }

    /// Optimizes `input` and formats the result.
    pub async fn compile(&self, input: &str) -> Result<String, CompileError> {
        self.compile_file(input, DEFAULT_FILENAME).await
    }

    /// Like [`compile`](Self::compile), naming the stylesheet `file` in
    /// diagnostics.
    pub async fn compile_file(&self, input: &str, file: &str) -> Result<String, CompileError> {
        let optimized = self.optimize(input, Some(file))?;
        let formatted = self.formatter.format(&optimized).await?;
        Ok(formatted)
    }
}

/// Fluent builder for [`Compiler`].
///
/// Starts from default [`Options`]; the engine and formatter can be swapped
/// for any [`TransformEngine`] and [`Formatter`].
///
/// # Example
///
/// ```rust
/// use vaultcss::{Compiler, CustomMediaTable};
///
/// let compiler = Compiler::builder()
///     .targets("last 2 versions")
///     .builtin_media(false)
///     .custom_media(CustomMediaTable::new().with("--wide", "(width >= 90rem)"))
///     .build()
///     .unwrap();
///
/// assert_eq!(compiler.config().custom_media().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CompilerBuilder<E = LightningEngine, F = CssFormatter> {
    options: Options,
    engine: E,
    formatter: F,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self::from_options(Options::default())
    }

    pub fn from_options(options: Options) -> Self {
        Self {
            options,
            engine: LightningEngine::new(),
            formatter: CssFormatter,
        }
    }
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, F> CompilerBuilder<E, F> {
    pub fn targets(mut self, query: impl Into<BrowserQuery>) -> Self {
        self.options.targets = Some(query.into());
        self
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.options.minify = minify;
        self
    }

    pub fn fluid(mut self, fluid: FluidOptions) -> Self {
        self.options.value_scaling_config = Some(fluid);
        self
    }

    pub fn builtin_media(mut self, enabled: bool) -> Self {
        self.options.enable_builtin_media = Some(enabled);
        self
    }

    pub fn custom_media_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.custom_media_path = Some(path.into());
        self
    }

    /// Sets the explicit custom media layer, replacing any previous one.
    pub fn custom_media(mut self, table: CustomMediaTable) -> Self {
        self.options.custom_media = Some(table);
        self
    }

    /// Adds one alias to the explicit custom media layer.
    pub fn media(mut self, name: impl Into<String>, query: impl Into<String>) -> Self {
        self.options
            .custom_media
            .get_or_insert_with(CustomMediaTable::new)
            .insert(name, query);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Uses `engine` for the transform stage.
    pub fn engine<E2: TransformEngine>(self, engine: E2) -> CompilerBuilder<E2, F> {
        CompilerBuilder {
            options: self.options,
            engine,
            formatter: self.formatter,
        }
    }

    /// Uses `formatter` for the format stage.
    pub fn formatter<F2: Formatter>(self, formatter: F2) -> CompilerBuilder<E, F2> {
        CompilerBuilder {
            options: self.options,
            engine: self.engine,
            formatter,
        }
    }
}

impl<E: TransformEngine, F: Formatter> CompilerBuilder<E, F> {
    /// Resolves the configuration and creates the compiler.
    pub fn build(self) -> Result<Compiler<E, F>, ConfigError> {
        let config = ResolvedConfig::resolve(&self.options)?;
        Ok(Compiler {
            config,
            engine: self.engine,
            formatter: self.formatter,
        })
    }
}
