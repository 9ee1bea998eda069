//! `vaultcss` command-line front end.
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG=debug` for
//! detail. Defaults to warnings only.

mod cli;
mod run;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use vaultcss::Compiler;

use crate::cli::Cli;
use crate::run::Output;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match try_main().await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let options = cli.options()?;
    let compiler = Compiler::new(&options).context("invalid compiler options")?;

    let output = Output::new(cli.out_dir.clone());
    let report = run::run(&compiler, &cli.inputs, cli.raw, &output).await?;
    log::info!("compiled {}, failed {}", report.compiled, report.failed);

    Ok(if report.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
