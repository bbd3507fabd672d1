use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufRead, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

use taskaudit_callback::{Reporter, RunStats, run_event_stream};
use taskaudit_report::{ReportConfig, ReportSink};
use taskaudit_report_fs::FsReportSink;
use taskaudit_report_memory::MemoryReportSink;

/// taskaudit - Record PASS/FAIL/VERIFY per task and host from runner events
#[derive(Parser)]
#[command(name = "taskaudit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Newline-delimited JSON event file (default: stdin)
    #[arg(long)]
    events: Option<PathBuf>,

    /// Directory for report files; must already exist
    #[arg(long, default_value = "reports")]
    output_dir: PathBuf,

    /// File name of the cross-host summary report
    #[arg(long, default_value = "summary_report.csv")]
    summary_file: String,

    /// Omit the trailing quote on summary lines
    #[arg(long)]
    no_trailing_quote: bool,

    /// Print the reports to stdout instead of writing files
    #[arg(long)]
    dry_run: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn report_config(&self) -> ReportConfig {
        ReportConfig {
            output_dir: self.output_dir.clone(),
            summary_file: self.summary_file.clone(),
            summary_trailing_quote: !self.no_trailing_quote,
            ..ReportConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let token = CancellationToken::new();
    tokio::spawn({
        let token = token.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        }
    });

    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match &cli.events {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open event file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let config = cli.report_config();
    let span = tracing::info_span!("run", run_id = %ulid::Ulid::new());

    if cli.dry_run {
        let sink = Arc::new(MemoryReportSink::new(config));
        run(reader, sink.clone(), token).instrument(span).await?;
        for (name, contents) in sink.files().await {
            println!("==> {name} <==");
            println!("{contents}");
        }
    } else {
        let sink = Arc::new(FsReportSink::new(config));
        run(reader, sink, token).instrument(span).await?;
    }

    Ok(())
}

async fn run(
    reader: impl AsyncBufRead + Unpin,
    sink: Arc<dyn ReportSink>,
    token: CancellationToken,
) -> Result<RunStats> {
    let mut reporter = Reporter::new(sink);
    run_event_stream(reader, &mut reporter, token)
        .await
        .context("event stream aborted")
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
