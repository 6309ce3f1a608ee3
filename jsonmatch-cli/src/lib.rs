//! Command line front end: loads two JSON documents, runs one of the
//! comparisons and prints a report.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use colored::*;
use jsonmatch_core::{equal, matches, ComparisonResult, MatchMode, MatchOptions, Mismatch, Node};
use tracing::{debug, info, warn};

#[derive(Debug, Parser)]
#[command(name = "jsonmatch")]
#[command(about = "Compare an expected JSON document against an actual one", long_about = None)]
pub struct Cli {
    /// File holding the expected document
    pub expected: PathBuf,

    /// File holding the actual document
    pub actual: PathBuf,

    /// Default comparison mode: exact or type
    #[arg(short, long)]
    pub mode: Option<MatchMode>,

    /// Alternate path flipping the mode at that location (repeatable)
    #[arg(short, long = "path")]
    pub paths: Vec<String>,

    /// Strict equality instead of a flexible match
    #[arg(short, long)]
    pub equal: bool,

    /// JSON file with `mode` and `alternate_paths`
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

/// Process exit status for the result of [`run`]: 0 pass, 1 mismatch,
/// 2 when the comparison could not run.
pub fn exit_status(result: &anyhow::Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Passed) => 0,
        Ok(Outcome::Failed) => 1,
        Err(_) => 2,
    }
}

pub fn load_document(path: &Path) -> anyhow::Result<Node> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    text.parse::<Node>()
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Options file first, then `--mode` and `--path` on top of it
pub fn resolve_options(cli: &Cli) -> anyhow::Result<MatchOptions> {
    let mut options = match &cli.options {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read options {}", path.display()))?;
            serde_json::from_str::<MatchOptions>(&text)
                .with_context(|| format!("Invalid options in {}", path.display()))?
        }
        None => MatchOptions::default(),
    };

    if let Some(mode) = cli.mode {
        options.mode = mode;
    }
    options.alternate_paths.extend(cli.paths.iter().cloned());
    Ok(options)
}

/// Run the comparison selected by `cli` on already loaded documents
pub fn compare(cli: &Cli, expected: &Node, actual: &Node) -> anyhow::Result<ComparisonResult> {
    if cli.equal {
        if cli.mode.is_some() || !cli.paths.is_empty() || cli.options.is_some() {
            warn!("--equal ignores mode and alternate paths");
        }
        return Ok(equal(expected, actual));
    }

    let options = resolve_options(cli)?;
    debug!(mode = %options.mode, paths = ?options.alternate_paths, "Resolved match options");
    Ok(matches(expected, actual, &options)?)
}

pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let expected = load_document(&cli.expected)?;
    let actual = load_document(&cli.actual)?;
    info!(
        "Comparing {} against {}",
        cli.expected.display(),
        cli.actual.display()
    );

    let result = compare(cli, &expected, &actual)?;
    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        write_report(out, &result)?;
    }

    Ok(if result.passed() {
        Outcome::Passed
    } else {
        Outcome::Failed
    })
}

pub fn write_report(out: &mut impl Write, result: &ComparisonResult) -> std::io::Result<()> {
    if result.passed() {
        return writeln!(out, "{} Expected and actual match.", "PASS".green().bold());
    }

    writeln!(
        out,
        "{} {} mismatch(es) found",
        "FAIL".red().bold(),
        result.mismatches().len()
    )?;
    writeln!(out, "{}", "─".repeat(60).dimmed())?;
    for mismatch in result.mismatches() {
        write_mismatch(out, mismatch)?;
    }
    Ok(())
}

fn write_mismatch(out: &mut impl Write, mismatch: &Mismatch) -> std::io::Result<()> {
    let key_path = if mismatch.key_path.is_root() {
        "(root)".to_string()
    } else {
        mismatch.key_path.to_string()
    };

    writeln!(out, "{} {}", "✗".red(), key_path.yellow().bold())?;
    writeln!(out, "    {}", mismatch.kind)?;
    if let Some(expected) = &mismatch.expected {
        writeln!(out, "    {} {}", "expected:".dimmed(), expected.to_string().cyan())?;
    }
    let actual = match &mismatch.actual {
        Some(actual) => actual.to_string().cyan(),
        None => "(absent)".dimmed(),
    };
    writeln!(out, "    {} {}", "actual:  ".dimmed(), actual)?;
    Ok(())
}
