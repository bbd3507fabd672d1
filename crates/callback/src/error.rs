use taskaudit_domain::DomainError;
use taskaudit_report::ReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("report: {0}")]
    Report(#[from] ReportError),

    #[error("reading event stream: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed event on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
