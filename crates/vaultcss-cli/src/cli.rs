//! Command-line arguments and how they map onto compiler [`Options`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vaultcss::media::is_custom_media_name;
use vaultcss::{BrowserQuery, CustomMediaTable, FluidOptions, FluidUnit, Options};

/// Compile stylesheets with layered custom media breakpoints.
///
/// Builtin breakpoints: --xxs, --xs, --sm, --md, --lg, --xl, --xxl.
#[derive(Debug, Parser)]
#[command(name = "vaultcss", version, about)]
pub struct Cli {
    /// Stylesheets to compile
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// JSON or YAML options file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Browser-support query (repeatable)
    #[arg(long = "targets", value_name = "QUERY")]
    pub targets: Vec<String>,

    /// Minify the transformed output
    #[arg(long)]
    pub minify: bool,

    /// Do not seed the builtin breakpoints
    #[arg(long)]
    pub no_builtin_media: bool,

    /// File with @custom-media declarations
    #[arg(long, value_name = "FILE")]
    pub custom_media: Option<PathBuf>,

    /// Custom media alias, e.g. --media '--tablet=(width >= 40rem)' (repeatable)
    #[arg(long = "media", value_name = "NAME=QUERY", value_parser = parse_media, allow_hyphen_values = true)]
    pub media: Vec<(String, String)>,

    /// Enable fluid() value scaling with this unit (vw, vi, cqw, cqi)
    #[arg(long, value_name = "UNIT")]
    pub fluid_unit: Option<FluidUnit>,

    /// Skip formatting; print the engine output as is
    #[arg(long)]
    pub raw: bool,

    /// Write each result to DIR/<file name> instead of stdout
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

fn parse_media(value: &str) -> Result<(String, String), String> {
    let (name, query) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=QUERY, got '{}'", value))?;
    let (name, query) = (name.trim(), query.trim());
    if !is_custom_media_name(name) {
        return Err(format!(
            "invalid custom media name '{}': expected '--' followed by letters, digits, '-' or '_'",
            name
        ));
    }
    if query.is_empty() {
        return Err(format!("custom media '{}' has an empty query", name));
    }
    Ok((name.to_string(), query.to_string()))
}

impl Cli {
    /// Options from `--config`, overridden by the other flags.
    pub fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::from_path(path)
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => Options::default(),
        };
        self.apply(&mut options);
        Ok(options)
    }

    fn apply(&self, options: &mut Options) {
        match self.targets.as_slice() {
            [] => {}
            [one] => options.targets = Some(BrowserQuery::from(one.as_str())),
            many => options.targets = Some(BrowserQuery::from(many.to_vec())),
        }
        if self.minify {
            options.minify = true;
        }
        if self.no_builtin_media {
            options.enable_builtin_media = Some(false);
        }
        if let Some(path) = &self.custom_media {
            options.custom_media_path = Some(path.clone());
        }
        if !self.media.is_empty() {
            options
                .custom_media
                .get_or_insert_with(CustomMediaTable::new)
                .extend(self.media.iter().cloned());
        }
        if let Some(unit) = self.fluid_unit {
            options
                .value_scaling_config
                .get_or_insert_with(FluidOptions::default)
                .unit = unit;
        }
    }
}
