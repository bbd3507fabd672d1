use std::sync::Arc;

use serde_json::Value;

use taskaudit_domain::{HostName, Outcome, RunnerEvent, classify_value};
use taskaudit_report::{HostEntry, ReportSink, SummaryEntry};

use crate::context::RunContext;
use crate::error::CallbackError;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Events handled, of any kind.
    pub events: u64,
    /// Events that carried a task result.
    pub results: u64,
    /// Results written to the host and summary reports.
    pub reported: u64,
    /// Results not reported: no active task, or no rule matched.
    pub dropped: u64,
}

/// Turns runner events into report entries.
///
/// Events must be handled one at a time, in stream order; each result is
/// fully written to both reports before `handle` returns.
pub struct Reporter {
    sink: Arc<dyn ReportSink>,
    stats: RunStats,
}

impl Reporter {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self {
            sink,
            stats: RunStats::default(),
        }
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Handle one lifecycle event. Returns the outcome when the event
    /// produced report entries.
    ///
    /// # Errors
    /// Fails on an unusable host name or when the sink cannot be written.
    pub async fn handle(
        &mut self,
        ctx: &mut RunContext,
        event: &RunnerEvent,
    ) -> Result<Option<Outcome>, CallbackError> {
        self.stats.events += 1;

        if let RunnerEvent::PlaybookOnTaskStart { name, .. } = event {
            tracing::info!(task = %name, "task started");
            ctx.start_task(name.as_str());
            return Ok(None);
        }

        let Some((host, result)) = event.task_result() else {
            tracing::debug!(event = event.kind(), "lifecycle event ignored");
            return Ok(None);
        };
        self.report(ctx, host, result).await
    }

    /// Classify one task result and append it to the host and summary
    /// reports, in that order.
    ///
    /// # Errors
    /// Fails on an unusable host name or when the sink cannot be written.
    pub async fn report(
        &mut self,
        ctx: &RunContext,
        host: &str,
        result: &Value,
    ) -> Result<Option<Outcome>, CallbackError> {
        self.stats.results += 1;

        let task = ctx.active_task();
        if task.is_empty() {
            tracing::debug!(host = %host, "result before any task started, not reported");
            self.stats.dropped += 1;
            return Ok(None);
        }

        let Some(outcome) = classify_value(result, task) else {
            tracing::debug!(host = %host, task = %task, "unclassifiable result, not reported");
            self.stats.dropped += 1;
            return Ok(None);
        };

        let host = HostName::new(host)?;
        self.sink
            .write_host_entry(&HostEntry::new(host.clone(), task, outcome.clone()))
            .await?;
        self.sink
            .write_summary_entry(&SummaryEntry::new(task, host, outcome.status))
            .await?;

        self.stats.reported += 1;
        Ok(Some(outcome))
    }
}
