//! rentdash - Bicycle-rental analytics dashboard

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use rentdash_app::{Dashboard, DashboardData};
use rentdash_common::{format_count, init_logging};
use rentdash_config::ConfigLoader;
use rentdash_data::{load_dataset, DateRange, RangeSelector};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for rendered chart panels (overrides configuration)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Start of the initial date range (YYYY-MM-DD); defaults to the
    /// earliest date in the dataset
    #[arg(long)]
    start: Option<NaiveDate>,

    /// End of the initial date range (YYYY-MM-DD); defaults to the latest
    /// date in the dataset
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Render the initial range once and exit without prompting
    #[arg(long)]
    no_input: bool,

    /// Log level (overrides configuration)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ConfigLoader::load(args.config.as_deref())?;
    if let Some(output) = args.output {
        config.output.directory = output;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    init_logging(&config.logging.to_logging_config())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let table = load_dataset(&config.data.dataset_path)
        .with_context(|| format!("loading dataset {}", config.data.dataset_path.display()))?;
    let dashboard = Dashboard::new(&config, table)?;

    let selector = *dashboard.selector();
    info!(
        min = %selector.min_date(),
        max = %selector.max_date(),
        "selectable range"
    );

    // The default selection, before any interaction, is the full span.
    let initial = match selector.select(args.start, args.end) {
        Ok(range) => range,
        Err(e) => {
            warn!(error = %e, "invalid initial range, falling back to the full span");
            selector.full_span()
        }
    };

    let data = dashboard.render_pass(&initial)?;
    print_metrics(&initial, &data, &config.output.directory);

    if !args.no_input {
        interactive_loop(&dashboard, &selector, initial)?;
    }

    Ok(())
}

/// Prompt for date ranges until the user quits. Every accepted range
/// triggers one synchronous recompute-and-render pass; a rejected range
/// keeps the previous valid selection.
fn interactive_loop(
    dashboard: &Dashboard,
    selector: &RangeSelector,
    mut current: DateRange,
) -> Result<()> {
    let stdin = io::stdin();
    loop {
        print!(
            "\nrange [{} .. {}] (start end | all | quit) > ",
            selector.min_date(),
            selector.max_date()
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // end of input
        }

        let request = match parse_request(line.trim()) {
            Request::Quit => break,
            Request::FullSpan => selector.select(None, None),
            Request::Range(start, end) => selector.select(Some(start), Some(end)),
            Request::Invalid(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match request {
            Ok(range) => {
                current = range;
                let data = dashboard.render_pass(&current)?;
                print_metrics(&current, &data, Path::new(""));
            }
            Err(e) => {
                // Keep the previous valid selection.
                eprintln!("{e} (keeping {current})");
            }
        }
    }
    Ok(())
}

enum Request {
    Quit,
    FullSpan,
    Range(NaiveDate, NaiveDate),
    Invalid(String),
}

fn parse_request(line: &str) -> Request {
    match line {
        "q" | "quit" | "exit" => return Request::Quit,
        "" | "all" => return Request::FullSpan,
        _ => {}
    }

    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => {
            match (start.parse::<NaiveDate>(), end.parse::<NaiveDate>()) {
                (Ok(start), Ok(end)) => Request::Range(start, end),
                _ => Request::Invalid(format!(
                    "could not parse {line:?}: expected two dates like 2023-01-01 2023-06-30"
                )),
            }
        }
        _ => Request::Invalid(format!(
            "could not parse {line:?}: expected `start end`, `all`, or `quit`"
        )),
    }
}

fn print_metrics(range: &DateRange, data: &DashboardData, output_dir: &Path) {
    println!("\nBike Rentals - {range}");
    println!("  Casual User      {}", format_count(data.summary.total_casual));
    println!("  Registered User  {}", format_count(data.summary.total_registered));
    println!("  Total User       {}", format_count(data.summary.total_users));
    if !output_dir.as_os_str().is_empty() {
        println!("  panels in {}", output_dir.display());
    }
}
