use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Normalized fully-qualified domain name: lowercase, surrounding whitespace
/// and trailing dots removed. Equality is plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim().trim_end_matches('.');
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is empty after normalization",
                raw
            )));
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c.is_control())
        {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains whitespace or quotes",
                raw
            )));
        }

        if trimmed.split('.').any(str::is_empty) {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains an empty label",
                raw
            )));
        }

        Ok(Self(Arc::from(trimmed.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    /// Drops the leftmost label when more than two labels remain.
    ///
    /// Purely syntactic: no public-suffix list is consulted, so `a.co.uk`
    /// yields `co.uk` as an explorable parent.
    pub fn parent(&self) -> Option<DomainName> {
        if self.label_count() <= 2 {
            return None;
        }
        self.0
            .split_once('.')
            .map(|(_, rest)| DomainName(Arc::from(rest)))
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DomainName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DomainName> for String {
    fn from(value: DomainName) -> Self {
        value.0.to_string()
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
