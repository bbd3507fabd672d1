/// Errors for audit domain validation.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid host name: {0:?}")]
    InvalidHost(String),
}
