use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("All nameservers are unreachable")]
    AllNameserversUnreachable,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Export failed for {format}: {reason}")]
    ExportFailed { format: String, reason: String },
}
