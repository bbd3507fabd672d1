use serde_json::Value;

// -- Runner lifecycle events --
// One JSON object per line on the event stream, tagged by `event`.
// Only task starts and the result-bearing events affect the report.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunnerEvent {
    /// A new task begins; its name labels every result until the next one.
    PlaybookOnTaskStart {
        name: String,
        #[serde(default)]
        is_conditional: Option<bool>,
    },

    RunnerOnOk {
        host: String,
        #[serde(default)]
        result: Value,
    },

    RunnerOnFailed {
        host: String,
        #[serde(default)]
        result: Value,
        #[serde(default)]
        ignore_errors: bool,
    },

    RunnerOnUnreachable {
        host: String,
        #[serde(default)]
        result: Value,
    },

    RunnerOnAsyncPoll {
        host: String,
        #[serde(default)]
        result: Value,
        #[serde(default, deserialize_with = "crate::record::lenient_text")]
        jid: Option<String>,
        /// Seconds left before the async job times out.
        #[serde(default)]
        clock: Option<f64>,
    },

    RunnerOnAsyncOk {
        host: String,
        #[serde(default)]
        result: Value,
        #[serde(default, deserialize_with = "crate::record::lenient_text")]
        jid: Option<String>,
    },

    RunnerOnAsyncFailed {
        host: String,
        #[serde(default)]
        result: Value,
        #[serde(default, deserialize_with = "crate::record::lenient_text")]
        jid: Option<String>,
    },

    /// Skipped, error, stats, play start, notify, and every other lifecycle
    /// event. Accepted and ignored.
    #[serde(other)]
    Ignored,
}

impl RunnerEvent {
    /// Host and result payload for events that carry a task result.
    pub fn task_result(&self) -> Option<(&str, &Value)> {
        match self {
            Self::RunnerOnOk { host, result }
            | Self::RunnerOnFailed { host, result, .. }
            | Self::RunnerOnUnreachable { host, result }
            | Self::RunnerOnAsyncPoll { host, result, .. }
            | Self::RunnerOnAsyncOk { host, result, .. }
            | Self::RunnerOnAsyncFailed { host, result, .. } => Some((host.as_str(), result)),
            Self::PlaybookOnTaskStart { .. } | Self::Ignored => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::PlaybookOnTaskStart { .. } => "playbook_on_task_start",
            Self::RunnerOnOk { .. } => "runner_on_ok",
            Self::RunnerOnFailed { .. } => "runner_on_failed",
            Self::RunnerOnUnreachable { .. } => "runner_on_unreachable",
            Self::RunnerOnAsyncPoll { .. } => "runner_on_async_poll",
            Self::RunnerOnAsyncOk { .. } => "runner_on_async_ok",
            Self::RunnerOnAsyncFailed { .. } => "runner_on_async_failed",
            Self::Ignored => "ignored",
        }
    }
}
