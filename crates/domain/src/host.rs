use crate::error::DomainError;

/// Target host name, safe to use as a report file stem.
///
/// Rejects names that would escape the output directory or that the
/// filesystem cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostName(String);

impl HostName {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty()
            || raw.len() > 250
            || raw == "."
            || raw == ".."
            || raw.chars().any(|c| matches!(c, '/' | '\\' | '\0'))
        {
            return Err(DomainError::InvalidHost(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HostName {
    type Error = DomainError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<HostName> for String {
    fn from(host: HostName) -> String {
        host.0
    }
}

impl std::fmt::Display for HostName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HostName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
