//! DoH Relay Domain Layer
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use errors::DomainError;
pub use resolution::{RawAnswerEntry, RawQuestionEntry, RawResolutionResult};
