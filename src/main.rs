//! # Printstream CLI
//!
//! Command-line interface for scanning line-printer channel output.
//!
//! ## Usage
//!
//! ```bash
//! # Plain text listing of a spool file
//! printstream job.prt
//!
//! # Event stream as JSON lines, from stdin
//! cat job.prt | printstream --format jsonl --job "JOB00042 PAYROLL"
//!
//! # Job summary, wrapping lines at 80 columns
//! printstream --format summary --columns 80 --overflow wrap job.prt
//! ```
//!
//! Set `RUST_LOG=printstream=trace` to log every scanned line.

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

use printstream::{
    ChannelConfig, JobStats, JsonLines, Listing, Overflow, PrintStreamError,
    transport::scan_reader,
};

/// Printstream - Line printer channel scanner
#[derive(Parser, Debug)]
#[command(name = "printstream")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Spool file to scan (omit or `-` for stdin)
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Listing)]
    format: Format,

    /// Print positions per line
    #[arg(long, default_value_t = ChannelConfig::IBM_1403.max_line_len)]
    columns: usize,

    /// Columns between tab stops
    #[arg(long, default_value_t = ChannelConfig::IBM_1403.tab_width)]
    tab_width: usize,

    /// What to do with characters past the last column: truncate or wrap
    #[arg(long, default_value_t = Overflow::Truncate)]
    overflow: Overflow,

    /// Job descriptor reported at end of job (defaults to a random job id)
    #[arg(long, value_name = "DESCRIPTOR")]
    job: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Plain text, overstrikes composed, pages separated by form feeds
    Listing,
    /// One JSON object per event
    Jsonl,
    /// JSON job summary
    Summary,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PrintStreamError> {
    let cli = Cli::parse();
    let config = channel_config(&cli)?;

    let jobinfo = cli
        .job
        .unwrap_or_else(|| format!("job-{}", Uuid::new_v4()));

    let reader: Box<dyn Read> = match &cli.input {
        Some(path) if path.as_os_str() != "-" => {
            info!(path = %path.display(), "scanning spool file");
            Box::new(BufReader::new(File::open(path)?))
        }
        _ => {
            info!("scanning stdin");
            Box::new(io::stdin().lock())
        }
    };

    let out = BufWriter::new(io::stdout().lock());

    match cli.format {
        Format::Listing => {
            let listing = scan_reader(reader, config, Listing::new(out), &jobinfo)?;
            listing.into_inner()?;
        }
        Format::Jsonl => {
            let json = scan_reader(reader, config, JsonLines::new(out), &jobinfo)?;
            json.into_inner()?;
        }
        Format::Summary => {
            let stats = scan_reader(reader, config, JobStats::default(), &jobinfo)?;
            write_summary(out, &config, &stats)?;
        }
    }

    info!(jobinfo = %jobinfo, "job complete");
    Ok(())
}

/// Channel geometry from the command-line flags
fn channel_config(cli: &Cli) -> Result<ChannelConfig, PrintStreamError> {
    let config = ChannelConfig::IBM_1403
        .with_max_line_len(cli.columns)
        .with_tab_width(cli.tab_width)
        .with_overflow(cli.overflow);
    config.validate()?;
    Ok(config)
}

/// Write the job summary as pretty-printed JSON
fn write_summary(
    mut out: impl Write,
    config: &ChannelConfig,
    stats: &JobStats,
) -> Result<(), PrintStreamError> {
    let summary = serde_json::json!({
        "channel": config,
        "pages": stats.pages(),
        "stats": stats,
    });
    serde_json::to_writer_pretty(&mut out, &summary)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
