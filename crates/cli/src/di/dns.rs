use doh_relay_application::use_cases::ResolveQueryUseCase;
use doh_relay_domain::Config;
use doh_relay_infrastructure::dns::{DnsServerHandler, JsonHttpsResolver};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let resolver = Arc::new(JsonHttpsResolver::new(
            config.upstream.endpoint.clone(),
            Duration::from_millis(config.upstream.timeout_ms),
        )?);

        let use_case = Arc::new(ResolveQueryUseCase::new(resolver));
        let handler = DnsServerHandler::new(use_case);

        Ok(Self { handler })
    }
}
