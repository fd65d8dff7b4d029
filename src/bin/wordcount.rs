//! wordcount CLI — count one word across files and URLs.

use std::io::Read as _;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::info;

use wordcount::config::Config;
use wordcount::engine::Counter;
use wordcount::model::{Record, Report};
use wordcount::reader::FsHttpReader;
use wordcount::telemetry;

#[derive(Parser)]
#[command(name = "wordcount", about = "Count a word across files and URLs")]
struct Cli {
    /// Word to count (whole-token, case-insensitive).
    word: String,

    /// Sources: file paths or absolute URLs. With none given, sources are
    /// read from stdin, one per line.
    sources: Vec<String>,

    /// Maximum number of source reads in flight at once.
    #[arg(long)]
    max_in_flight: Option<usize>,

    /// Timeout in seconds for each HTTP request.
    #[arg(long)]
    http_timeout_secs: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One "Count for <source>: <n>" line per record, then the total.
    Text,
    /// A { records, total } document.
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    anyhow::ensure!(!cli.word.is_empty(), "word must not be empty");

    let mut config = Config::from_env()?;
    if let Some(max_in_flight) = cli.max_in_flight {
        anyhow::ensure!(max_in_flight >= 1, "--max-in-flight must be at least 1");
        config.max_in_flight = max_in_flight;
    }
    if let Some(secs) = cli.http_timeout_secs {
        config.http_timeout = Duration::from_secs(secs);
    }

    telemetry::init_tracing(&config.log_level)?;

    let sources = if cli.sources.is_empty() {
        sources_from_stdin()?
    } else {
        cli.sources
    };

    let reader = FsHttpReader::new(config.http_timeout)?;
    let counter = Counter::new(config.max_in_flight, reader);

    info!(
        word = %cli.word,
        sources = sources.len(),
        max_in_flight = config.max_in_flight,
        "counting"
    );

    let records = tokio::select! {
        res = counter.count(&sources, &cli.word) => res?,
        _ = tokio::signal::ctrl_c() => anyhow::bail!("interrupted"),
    };

    emit(records, cli.format)
}

/// Read newline-separated sources from stdin, ignoring a trailing empty
/// line.
fn sources_from_stdin() -> anyhow::Result<Vec<String>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input.lines().map(str::to_owned).collect())
}

/// Print records and the grand total to stdout.
fn emit(records: Vec<Record>, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => {
            let mut total = 0;
            for record in &records {
                println!("Count for {}: {}", record.source, record.count);
                total += record.count;
            }
            println!("Total: {total}");
        }
        Format::Json => {
            let report = Report::new(records);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
