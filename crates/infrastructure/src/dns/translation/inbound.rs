use super::compression::uses_name_compression;
use doh_relay_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Message, Query};

/// A parsed client request together with its compression preference.
#[derive(Debug, Clone)]
pub struct InboundQuery {
    message: Message,
    compress: bool,
}

impl InboundQuery {
    pub fn new(message: Message, compress: bool) -> Self {
        Self { message, compress }
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsRequest(format!("Failed to parse DNS request: {}", e))
        })?;

        Ok(Self::new(message, uses_name_compression(bytes)))
    }

    pub fn id(&self) -> u16 {
        self.message.id()
    }

    pub fn compress(&self) -> bool {
        self.compress
    }

    /// Only the first question is ever consulted.
    pub fn first_question(&self) -> Result<&Query, DomainError> {
        self.message
            .queries()
            .first()
            .ok_or(DomainError::MissingQuestion)
    }

    pub fn to_dns_query(&self) -> Result<DnsQuery, DomainError> {
        let question = self.first_question()?;
        Ok(DnsQuery::new(
            question.name().to_ascii(),
            u16::from(question.query_type()),
        ))
    }
}
