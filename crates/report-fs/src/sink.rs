use std::path::Path;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use taskaudit_report::{HostEntry, ReportConfig, ReportError, ReportSink, SummaryEntry};

/// Writes reports as plain files under `ReportConfig::output_dir`.
///
/// Every entry opens its file in append mode, writes, flushes, and closes.
/// The output directory is never created here.
pub struct FsReportSink {
    config: ReportConfig,
}

impl FsReportSink {
    #[must_use]
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }
}

async fn append(path: &Path, text: &str) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(io_err)?;
    file.write_all(text.as_bytes()).await.map_err(io_err)?;
    // tokio::fs::File completes writes in the background; flush waits for them.
    file.flush().await.map_err(io_err)?;

    tracing::trace!(path = %path.display(), bytes = text.len(), "appended report entry");
    Ok(())
}

#[async_trait]
impl ReportSink for FsReportSink {
    async fn write_host_entry(&self, entry: &HostEntry) -> Result<(), ReportError> {
        append(&self.config.host_path(&entry.host), &entry.render()).await
    }

    async fn write_summary_entry(&self, entry: &SummaryEntry) -> Result<(), ReportError> {
        let text = entry.render(self.config.summary_trailing_quote);
        append(&self.config.summary_path(), &text).await
    }
}
