#![allow(dead_code)]
use async_trait::async_trait;
use doh_relay_application::ports::JsonResolver;
use doh_relay_domain::{DnsQuery, DomainError, RawResolutionResult};
use std::sync::{Arc, Mutex};

/// Returns one canned outcome for every query and records what it was asked.
pub struct MockJsonResolver {
    outcome: Arc<Mutex<Result<RawResolutionResult, DomainError>>>,
    calls: Arc<Mutex<Vec<DnsQuery>>>,
}

impl MockJsonResolver {
    pub fn returning(result: RawResolutionResult) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Ok(result))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Err(error))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonResolver for MockJsonResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<RawResolutionResult, DomainError> {
        self.calls.lock().unwrap().push(query.clone());
        self.outcome.lock().unwrap().clone()
    }

    fn upstream(&self) -> &str {
        "mock://resolver"
    }
}
