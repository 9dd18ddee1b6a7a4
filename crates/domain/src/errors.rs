use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid DNS request: {0}")]
    InvalidDnsRequest(String),

    #[error("DNS request carries no question")]
    MissingQuestion,

    #[error("Unknown record type code {0}")]
    UnknownRecordType(u16),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid record data in '{record}': {reason}")]
    InvalidRecordData { record: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to serialize DNS message: {0}")]
    SerializationFailed(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Upstream {server} returned HTTP {status}")]
    TransportHttpStatus { server: String, status: u16 },

    #[error("Transport to {server} failed: {reason}")]
    TransportFailed { server: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn invalid_record(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecordData {
            record: record.into(),
            reason: reason.into(),
        }
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::TransportTimeout { .. }
                | Self::TransportHttpStatus { .. }
                | Self::TransportFailed { .. }
        )
    }
}
