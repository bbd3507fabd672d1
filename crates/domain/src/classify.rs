use serde_json::Value;

use crate::record::{ALL_ITEMS_COMPLETED, ITEMS_FAILED, Message, ResultRecord};
use crate::status::Status;

/// Host report text for a bare empty-list `msg`.
const EMPTY_SEQUENCE_TEXT: &str = "[]";

/// Verdict plus the text shown under it in the host report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub display_text: String,
}

impl Outcome {
    pub fn new(status: Status, display_text: impl Into<String>) -> Self {
        Self {
            status,
            display_text: display_text.into(),
        }
    }
}

/// Classifies a raw result payload.
///
/// Non-object payloads produce no outcome.
pub fn classify_value(result: &Value, active_task: &str) -> Option<Outcome> {
    if active_task.is_empty() {
        return None;
    }
    let record = ResultRecord::from_value(result)?;
    classify(&record, active_task)
}

/// Reduces a task result to a single verdict.
///
/// Rules are checked in order and the first one that applies decides:
///
/// 1. `failed` present: FAIL if truthy, else PASS.
/// 2. `msg` present: the batch summary phrases map to PASS and FAIL, an
///    empty list is PASS showing `[]`, anything else is VERIFY showing the
///    message.
/// 3. `rc == 0`: PASS.
///
/// Records matching none of these, and any record seen while no task is
/// active, produce `None`.
pub fn classify(record: &ResultRecord, active_task: &str) -> Option<Outcome> {
    if active_task.is_empty() {
        return None;
    }

    if let Some(failed) = record.failed {
        return Some(Outcome::new(
            Status::from_failed(failed),
            display_text(record),
        ));
    }

    if let Some(msg) = &record.msg {
        return Some(match msg {
            Message::Text(text) if text == ALL_ITEMS_COMPLETED => {
                Outcome::new(Status::Pass, display_text(record))
            }
            Message::Text(text) if text == ITEMS_FAILED => {
                Outcome::new(Status::Fail, display_text(record))
            }
            Message::EmptySequence => Outcome::new(Status::Pass, EMPTY_SEQUENCE_TEXT),
            other => Outcome::new(Status::Verify, other.text()),
        });
    }

    if record.rc == Some(0) {
        return Some(Outcome::new(Status::Pass, display_text(record)));
    }

    None
}

/// stdout, falling back to stderr; a non-empty `msg` wins whenever stderr
/// is empty.
fn display_text(record: &ResultRecord) -> String {
    let stderr = record.stderr();
    let msg = record.msg_text();
    if stderr.is_empty() && !msg.is_empty() {
        return msg;
    }
    match record.stdout() {
        "" => stderr.to_string(),
        stdout => stdout.to_string(),
    }
}
