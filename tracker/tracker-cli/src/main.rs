//! `tk2cmssw` - write CMSSW detector-description XML for one tracker subsystem.
//!
//! Reads a material-budget bundle exported as JSON by the analysis stage and
//! commits the subsystem's documents under the XML directory.
//!
//! # Usage
//!
//! - `tk2cmssw bundle.json --subsystem inner-pixel --subdir phase2` - translate and commit
//! - `tk2cmssw bundle.json --subsystem outer-tracker --dry-run` - build only, list documents
//! - `tk2cmssw bundle.json --subsystem inner-pixel --dump` - also print the bundle contents
//!
//! Logging goes to stderr and follows `RUST_LOG`; `-v` switches the default to `debug`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracker_cmssw::{describe_bundle, Subsystem, Translator, TranslatorConfig};
use tracker_types::Bundle;

/// Translate a tracker material budget into CMSSW XML
#[derive(Parser, Debug)]
#[command(name = "tk2cmssw")]
#[command(about = "Translate a tracker material budget into CMSSW XML", long_about = None)]
#[command(version)]
struct Cli {
    /// Bundle exported by the analysis stage (JSON)
    bundle: PathBuf,

    /// Subsystem to translate
    #[arg(long, value_enum)]
    subsystem: SubsystemArg,

    /// Translator configuration (JSON); missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Root XML directory, overriding the configuration
    #[arg(long)]
    xml_dir: Option<PathBuf>,

    /// Output subdirectory below the XML directory
    #[arg(long, default_value = "")]
    subdir: String,

    /// Print the bundle contents before translating
    #[arg(long)]
    dump: bool,

    /// Build the documents without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SubsystemArg {
    /// Outer tracker: one geometry document
    OuterTracker,
    /// Inner pixel: geometry plus four region documents
    InnerPixel,
}

impl From<SubsystemArg> for Subsystem {
    fn from(arg: SubsystemArg) -> Self {
        match arg {
            SubsystemArg::OuterTracker => Self::OuterTracker,
            SubsystemArg::InnerPixel => Self::InnerPixel,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let bundle = load_bundle(&cli.bundle)?;
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TranslatorConfig::default(),
    };
    if let Some(dir) = cli.xml_dir {
        config.xml_directory = dir;
    }

    if cli.dump {
        print!("{}", describe_bundle(&bundle));
    }

    let subsystem = Subsystem::from(cli.subsystem);
    let output_dir = config.output_dir(&cli.subdir);
    let translator = Translator::new(config);

    if cli.dry_run {
        let documents = translator
            .build(subsystem, &bundle)
            .with_context(|| format!("failed to build {subsystem} documents"))?;
        for doc in &documents {
            println!(
                "would write {} ({}, {} nodes)",
                output_dir.join(&doc.file_name).display(),
                doc.kind,
                doc.root.node_count()
            );
        }
        return Ok(());
    }

    let report = translator
        .translate(subsystem, &bundle, &output_dir)
        .with_context(|| format!("failed to translate {subsystem}"))?;
    for file in &report.files {
        println!("wrote {}", file.display());
    }
    println!(
        "{} documents committed to {} ({} replaced)",
        report.files.len(),
        report.output_dir.display(),
        report.replaced
    );
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_bundle(path: &Path) -> Result<Bundle> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read bundle {}", path.display()))?;
    let bundle: Bundle = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse bundle {}", path.display()))?;
    tracing::debug!(entities = bundle.entity_count(), "bundle loaded");
    Ok(bundle)
}

fn load_config(path: &Path) -> Result<TranslatorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse configuration {}", path.display()))
}
