use taskaudit_domain::{HostName, Outcome, Status};

/// One block in a per-host report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub host: HostName,
    pub task: String,
    pub status: Status,
    pub display_text: String,
}

impl HostEntry {
    pub fn new(host: HostName, task: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            host,
            task: task.into(),
            status: outcome.status,
            display_text: outcome.display_text,
        }
    }

    /// `\n<task>, <status>\n <text>\n`
    pub fn render(&self) -> String {
        format!("\n{}, {}\n {}\n", self.task, self.status, self.display_text)
    }
}

/// One line in the summary report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub task: String,
    pub host: HostName,
    pub status: Status,
}

impl SummaryEntry {
    pub fn new(task: impl Into<String>, host: HostName, status: Status) -> Self {
        Self {
            task: task.into(),
            host,
            status,
        }
    }

    /// `\n<task>, <host>, <status>` followed by `'` when `trailing_quote`.
    pub fn render(&self, trailing_quote: bool) -> String {
        let quote = if trailing_quote { "'" } else { "" };
        format!("\n{}, {}, {}{quote}", self.task, self.host, self.status)
    }
}
