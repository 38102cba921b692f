//! Longview CLI
//!
//! Runs a projection and writes it as JSON or CSV.
//!
//! # Usage
//!
//! ```bash
//! longview --co2 80 --renewable 10 --format csv --output run.csv
//! longview --params scenario.toml --year 77025
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use longview::config::{ParamOverrides, RunConfig};
use longview::output::{write_entries, OutputFormat};
use longview::{LongviewResult, Projector, YearData};
use longview_core::timepoints::validate_year;
use longview_core::Year;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "longview")]
#[command(about = "Project climate, economy and society over the next million years")]
struct Cli {
    /// TOML file with simulation parameters
    #[arg(long)]
    params: Option<PathBuf>,

    /// TOML file with projection coefficients
    #[arg(long)]
    coefficients: Option<PathBuf>,

    #[command(flatten)]
    overrides: ParamOverrides,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Evaluate time points on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Only print the entry nearest to this year
    #[arg(long)]
    year: Option<Year>,

    /// Downsample the series to at most this many entries
    #[arg(long)]
    max_points: Option<usize>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> LongviewResult<()> {
    let config = RunConfig::load(
        cli.params.as_deref(),
        cli.coefficients.as_deref(),
        &cli.overrides,
    )?;

    if cli.print_config {
        let document = config.to_toml_string()?;
        let mut writer = open_output(cli.output.as_deref())?;
        writer.write_all(document.as_bytes())?;
        writer.flush()?;
        return Ok(());
    }

    if let Some(year) = cli.year {
        validate_year(year)?;
    }

    let projector = Projector::from_coefficients(config.coefficients);
    let series = if cli.parallel {
        projector.project_parallel(&config.params)
    } else {
        projector.project(&config.params)
    };

    let entries: Vec<&YearData> = match (cli.year, cli.max_points) {
        (Some(year), _) => series.nearest(year).into_iter().collect(),
        (None, Some(max_points)) => series.downsample(max_points),
        (None, None) => series.iter().collect(),
    };
    info!(entries = entries.len(), format = ?cli.format, "Writing projection");

    // The output file is only truncated once there is something to write
    let mut writer = open_output(cli.output.as_deref())?;
    write_entries(&mut writer, &entries, cli.format)?;
    writer.flush()?;
    Ok(())
}

fn open_output(path: Option<&Path>) -> LongviewResult<Box<dyn Write>> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(writer)
}
