/// Audit verdict for a single task on a single host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
    /// Informational result that needs a human to check it.
    Verify,
}

impl Status {
    /// Maps an explicit `failed` flag to a verdict.
    pub fn from_failed(failed: bool) -> Self {
        if failed { Self::Fail } else { Self::Pass }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Verify => "VERIFY",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
