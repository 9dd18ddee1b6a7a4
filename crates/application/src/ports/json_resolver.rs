use async_trait::async_trait;
use doh_relay_domain::{DnsQuery, DomainError, RawResolutionResult};

/// Resolves one question against a DoH JSON API.
///
/// Implementations perform the network round-trip and decode the payload; they
/// report every failure as an error and leave the fallback policy to the caller.
#[async_trait]
pub trait JsonResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<RawResolutionResult, DomainError>;

    /// Human-readable upstream identifier for logs.
    fn upstream(&self) -> &str;
}
