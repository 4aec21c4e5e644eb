//! Command-line interface for dirbundle.
//!
//! Bundles a directory tree of text files into a single JSON document, driven
//! by a small JSON configuration file created with `dirbundle init`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{Input, theme::ColorfulTheme};
use dirbundle::config::{CONFIG_FILE_NAME, Config, DEFAULT_OUTPUT_NAME};
use dirbundle::{BundleBuilder, bundle, output};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// dirbundle — JSON snapshots of directory trees
#[derive(Parser)]
#[command(name = "dirbundle", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Root directory to bundle (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Extra ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Override the configured output file name
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize configuration in the current directory
    Init,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Some(Command::Init) => run_init(),
        None => run_bundle(cli),
    }
}

fn run_init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!(
            "{} {} already exists, delete it first to re-init",
            style("⚠").yellow(),
            CONFIG_FILE_NAME
        );
        return Ok(());
    }

    println!("{}", style("dirbundle setup").bold());
    let theme = ColorfulTheme::default();

    let output_name: String = Input::with_theme(&theme)
        .with_prompt("Output file name")
        .default(DEFAULT_OUTPUT_NAME.to_string())
        .interact_text()?;

    let raw_patterns: String = Input::with_theme(&theme)
        .with_prompt("Comma-separated ignore globs")
        .allow_empty(true)
        .interact_text()?;
    let ignore_patterns: Vec<String> = raw_patterns
        .split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(String::from)
        .collect();

    let config = Config {
        output_name,
        ignore_patterns,
    };
    config.save(config_path)?;

    println!(
        "{} configuration written to {}",
        style("✔").green(),
        CONFIG_FILE_NAME
    );
    println!("Run `dirbundle [path]` (default path is the current dir) to bundle your files.");
    Ok(())
}

fn run_bundle(cli: Cli) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    let mut config = if config_path.exists() {
        Config::load(config_path).with_context(|| format!("cannot load {}", CONFIG_FILE_NAME))?
    } else {
        tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
        Config::default()
    };
    if let Some(output_name) = cli.output {
        config.output_name = output_name;
    }

    let mut patterns = config.effective_ignore_patterns();
    patterns.extend(cli.ignore_patterns);

    let options = BundleBuilder::new(&cli.root)
        .ignore_patterns(patterns)
        .build();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("bundling {}", cli.root.display()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let entries = bundle(options)?;

    let out_path = cli.root.join(&config.output_name);
    output::write_to_file(&entries, &out_path, true)?;
    spinner.finish_and_clear();

    println!(
        "{} processed {} files and wrote {}",
        style("✔").green(),
        entries.len(),
        out_path.display()
    );
    Ok(())
}
