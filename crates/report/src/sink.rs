use async_trait::async_trait;

use crate::entry::{HostEntry, SummaryEntry};
use crate::error::ReportError;

/// Append-only destination for audit entries.
///
/// Each call is an independent append; implementations hold no open
/// handles between calls. Errors are never swallowed.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Append one block to the report for `entry.host`.
    async fn write_host_entry(&self, entry: &HostEntry) -> Result<(), ReportError>;

    /// Append one line to the shared summary report.
    async fn write_summary_entry(&self, entry: &SummaryEntry) -> Result<(), ReportError>;
}
