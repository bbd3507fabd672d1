use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use taskaudit_report::{HostEntry, ReportConfig, ReportError, ReportSink, SummaryEntry};

/// Keeps rendered report files in memory, keyed by file name.
///
/// File names follow the same `ReportConfig` rules as the filesystem sink;
/// `output_dir` is ignored.
pub struct MemoryReportSink {
    config: ReportConfig,
    files: Mutex<BTreeMap<String, String>>,
}

impl MemoryReportSink {
    #[must_use]
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            files: Mutex::new(BTreeMap::new()),
        }
    }

    /// Contents of one report file, if anything was written to it.
    pub async fn read(&self, file_name: &str) -> Option<String> {
        self.files.lock().await.get(file_name).cloned()
    }

    /// Snapshot of every file written so far.
    pub async fn files(&self) -> BTreeMap<String, String> {
        self.files.lock().await.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.lock().await.is_empty()
    }

    async fn append(&self, file_name: String, text: &str) {
        self.files
            .lock()
            .await
            .entry(file_name)
            .or_default()
            .push_str(text);
    }
}

impl Default for MemoryReportSink {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

#[async_trait]
impl ReportSink for MemoryReportSink {
    async fn write_host_entry(&self, entry: &HostEntry) -> Result<(), ReportError> {
        let name = self.config.host_file_name(&entry.host);
        self.append(name, &entry.render()).await;
        Ok(())
    }

    async fn write_summary_entry(&self, entry: &SummaryEntry) -> Result<(), ReportError> {
        let text = entry.render(self.config.summary_trailing_quote);
        self.append(self.config.summary_file.clone(), &text).await;
        Ok(())
    }
}
