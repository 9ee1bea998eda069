//! Compiling the input files.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use vaultcss::Compiler;

/// Where results go.
#[derive(Debug, Clone)]
pub enum Output {
    Stdout,
    Dir(PathBuf),
}

impl Output {
    pub fn new(out_dir: Option<PathBuf>) -> Self {
        out_dir.map_or(Output::Stdout, Output::Dir)
    }
}

/// Per-run summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub compiled: usize,
    pub failed: usize,
}

impl Report {
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Compiles one file and returns the output text.
pub async fn compile_one(compiler: &Compiler, input: &Path, raw: bool) -> Result<String> {
    let source =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let name = input.to_string_lossy().into_owned();

    let css = if raw {
        compiler.optimize(&source, Some(name.as_str()))?
    } else {
        compiler.compile_file(&source, &name).await?
    };
    Ok(css)
}

fn write_result(output: &Output, input: &Path, css: &str) -> Result<()> {
    match output {
        Output::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(css.as_bytes())?;
            if !css.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
        Output::Dir(dir) => {
            let file_name = input
                .file_name()
                .ok_or_else(|| anyhow!("{} has no file name", input.display()))?;
            let target = dir.join(file_name);
            fs::write(&target, css).with_context(|| format!("writing {}", target.display()))?;
            log::info!("{} -> {}", input.display(), target.display());
            Ok(())
        }
    }
}

/// Compiles every input, reporting failures without stopping.
pub async fn run(
    compiler: &Compiler,
    inputs: &[PathBuf],
    raw: bool,
    output: &Output,
) -> Result<Report> {
    if let Output::Dir(dir) = output {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut report = Report::default();
    for input in inputs {
        let result = compile_one(compiler, input, raw)
            .await
            .and_then(|css| write_result(output, input, &css));
        match result {
            Ok(()) => report.compiled += 1,
            Err(e) => {
                log::error!("{}: {:#}", input.display(), e);
                report.failed += 1;
            }
        }
    }
    Ok(report)
}
