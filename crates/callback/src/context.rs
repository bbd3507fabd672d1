/// Per-run state threaded through event handling.
///
/// Holds the name of the most recently started task. Results observed while
/// no task is active are not reported.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    active_task: String,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active task. An empty name deactivates reporting.
    pub fn start_task(&mut self, name: impl Into<String>) {
        self.active_task = name.into();
    }

    /// The active task name; empty before the first task starts.
    pub fn active_task(&self) -> &str {
        &self.active_task
    }

    pub fn has_active_task(&self) -> bool {
        !self.active_task.is_empty()
    }
}
