//! build-weights - regenerate weights.js from Deck Weights.xlsx
//!
//! Run with no arguments from the project root.

use clap::Parser;
use colored::*;
use deck_weights::{BuildOptions, Error};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;

/// Generate the deck weight lookup script from the catalog workbook
#[derive(Parser)]
#[command(
    name = "build-weights",
    author = "iyulab",
    version,
    about = "Generate weights.js from Deck Weights.xlsx",
    long_about = "build-weights - reads the Canam Deck Catalog sheet of Deck Weights.xlsx\n\
                  and writes the DECK_LBS_PER_SQ lookup table to weights.js."
)]
struct Cli {
    /// Project root that the workbook and output paths are relative to
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Workbook path
    #[arg(long, default_value = deck_weights::options::DEFAULT_WORKBOOK)]
    workbook: PathBuf,

    /// Sheet holding the deck catalog
    #[arg(long, default_value = deck_weights::options::DEFAULT_SHEET)]
    sheet: String,

    /// Output script path
    #[arg(short, long, default_value = deck_weights::options::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the generated script to stdout instead of writing the file
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> BuildOptions {
        BuildOptions::new()
            .with_root(&self.root)
            .with_workbook(&self.workbook)
            .with_sheet(&self.sheet)
            .with_output(&self.output)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        let (label, code) = failure(&e);
        eprintln!("{}: {}", label.red().bold(), e);
        std::process::exit(code);
    }
}

/// Message label and exit code for a failed run.
fn failure(e: &Error) -> (&'static str, i32) {
    match e {
        Error::WorkbookNotFound(_) => ("ERROR", 1),
        _ => ("Error", 1),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = cli.options();
    log::debug!("resolved options: {:?}", options);

    let pb = create_spinner("Reading workbook...");
    let generated = deck_weights::generate(&options);
    pb.finish_and_clear();
    let (table, script) = generated?;

    if cli.stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(script.as_bytes())?;
        return Ok(());
    }

    let output_path = options.output_path();
    deck_weights::render::write_script(&output_path, &script)?;
    println!(
        "{} Wrote {} with {} keys",
        "✓".green().bold(),
        output_path.display(),
        table.len()
    );

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
