#![allow(dead_code)]
use async_trait::async_trait;
use doh_relay_application::ports::JsonResolver;
use doh_relay_domain::{DnsQuery, DomainError, RawResolutionResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub struct MockJsonResolver {
    responses: Arc<Mutex<HashMap<String, RawResolutionResult>>>,
    error: Arc<Mutex<Option<DomainError>>>,
    calls: Arc<Mutex<Vec<DnsQuery>>>,
}

impl MockJsonResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            error: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_response(&self, domain: &str, result: RawResolutionResult) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), result);
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockJsonResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JsonResolver for MockJsonResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<RawResolutionResult, DomainError> {
        self.calls.lock().unwrap().push(query.clone());

        if let Some(err) = self.error.lock().unwrap().clone() {
            return Err(err);
        }

        self.responses
            .lock()
            .unwrap()
            .get(query.domain.as_ref())
            .cloned()
            .ok_or_else(|| DomainError::InvalidDnsResponse("no mock response".to_string()))
    }

    fn upstream(&self) -> &str {
        "mock://resolver"
    }
}
