//! `smear-features` — emit a CSV of placeholder blood-smear features for a
//! folder of images.
//!
//! The numeric columns are uniform-random placeholder values and the
//! `Sickle Cell` column is whatever `--label` says; nothing is measured
//! from the images. Files that are not readable images are logged and
//! skipped.
//!
//! ```bash
//! smear-features --input ./slides --output features.csv --label no
//! smear-features --input ./slides/positive --output features_sickle.csv --label yes -v
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use drepana::smear::{generate_report, write_csv, SickleLabel};

#[derive(Parser, Debug)]
#[command(
    name = "smear-features",
    about = "Generate a placeholder blood-smear feature CSV for a folder of images",
    version
)]
struct Cli {
    /// Folder containing the image files (png/jpg/jpeg/tiff/bmp)
    #[arg(long)]
    input: PathBuf,

    /// Output CSV path
    #[arg(long)]
    output: PathBuf,

    /// Value for the Sickle Cell column, constant for the whole run
    #[arg(long, value_parser = SickleLabel::from_str)]
    label: SickleLabel,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run(&cli) {
        tracing::error!("smear-features failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let records = generate_report(&cli.input, cli.label)?;
    tracing::info!(rows = records.len(), "sampled feature rows");

    write_csv(&records, &cli.output)?;
    println!(
        "CSV file saved as {} ({} rows)",
        cli.output.display(),
        records.len()
    );

    Ok(())
}
