use std::sync::Arc;

/// The single question relayed upstream for one inbound request.
///
/// `domain` is kept exactly as the client asked it (ASCII form, trailing dot
/// included for fully-qualified names) and `record_type` is the raw DNS type
/// code, so unknown types are forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: u16,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: u16) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }
}
