//! HTTPS Transport for DoH JSON resolvers
//!
//! Sends each question as an HTTP GET with the query name and numeric type as
//! URL parameters. The response body is the resolver's JSON payload.
//!
//! Wire format (HTTP):
//! ```text
//! GET /resolve?name=example.com.&type=1 HTTP/2
//! Accept: application/dns-json
//! ```

use async_trait::async_trait;
use doh_relay_application::ports::JsonResolver;
use doh_relay_domain::{DnsQuery, DomainError, RawResolutionResult};
use std::time::Duration;
use tracing::debug;

/// Content type advertised by DoH JSON APIs
const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// DoH JSON API client
pub struct JsonHttpsResolver {
    endpoint: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl JsonHttpsResolver {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTPS client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// URL parameters for one question: the name as given and the decimal type code.
    pub fn query_params(query: &DnsQuery) -> [(&'static str, String); 2] {
        [
            ("name", query.domain.to_string()),
            ("type", query.record_type.to_string()),
        ]
    }

    pub fn decode(body: &[u8]) -> Result<RawResolutionResult, DomainError> {
        serde_json::from_slice(body)
            .map_err(|e| DomainError::InvalidDnsResponse(format!("Malformed JSON payload: {}", e)))
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.endpoint.clone(),
        }
    }

    fn request_error(&self, error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            return self.timeout_error();
        }
        DomainError::TransportFailed {
            server: self.endpoint.clone(),
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl JsonResolver for JsonHttpsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<RawResolutionResult, DomainError> {
        debug!(
            url = %self.endpoint,
            domain = %query.domain,
            record_type = query.record_type,
            "Sending DoH JSON query"
        );

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .get(&self.endpoint)
                .query(&Self::query_params(query))
                .header("Accept", DNS_JSON_CONTENT_TYPE)
                .send(),
        )
        .await
        .map_err(|_| self.timeout_error())?
        .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::TransportHttpStatus {
                server: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = tokio::time::timeout(self.timeout, response.bytes())
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.request_error(e))?;

        debug!(
            url = %self.endpoint,
            response_len = body.len(),
            "DoH JSON response received"
        );

        Self::decode(&body)
    }

    fn upstream(&self) -> &str {
        &self.endpoint
    }
}
