use crate::ports::JsonResolver;
use doh_relay_domain::{DnsQuery, RawResolutionResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Relays one question upstream and always yields a payload to translate.
///
/// Upstream failures are not retried: they are logged and replaced by the
/// default payload (status 0, no records), so the client still receives a
/// well-formed reply for its transaction.
pub struct ResolveQueryUseCase {
    resolver: Arc<dyn JsonResolver>,
}

impl ResolveQueryUseCase {
    pub fn new(resolver: Arc<dyn JsonResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, query: &DnsQuery) -> RawResolutionResult {
        let start = Instant::now();

        match self.resolver.resolve(query).await {
            Ok(result) => {
                debug!(
                    domain = %query.domain,
                    record_type = query.record_type,
                    status = result.status,
                    records = result.record_count(),
                    elapsed_us = start.elapsed().as_micros() as u64,
                    comment = result.comment.as_deref().unwrap_or(""),
                    "Upstream resolution complete"
                );
                result
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = query.record_type,
                    upstream = %self.resolver.upstream(),
                    transport = e.is_transport_error(),
                    error = %e,
                    "Upstream resolution failed, answering with empty result"
                );
                RawResolutionResult::default()
            }
        }
    }
}
