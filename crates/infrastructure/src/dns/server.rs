use crate::dns::translation::{DnsResponse, InboundQuery, MessageAssembler};
use doh_relay_application::use_cases::ResolveQueryUseCase;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::RecordType;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Answers raw UDP DNS requests by relaying them to the DoH JSON upstream.
///
/// Holds no per-request state, so one instance is shared by every task.
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the wire-format reply, or `None` when nothing can be sent back.
    pub async fn handle_raw_udp(&self, query_buf: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let start = Instant::now();

        let request = match InboundQuery::parse(query_buf) {
            Ok(request) => request,
            Err(e) => {
                warn!(client = %client, error = %e, "Malformed DNS request");
                let id = request_id(query_buf)?;
                return encode(MessageAssembler::error_response(id, ResponseCode::FormErr));
            }
        };

        let query = match request.to_dns_query() {
            Ok(query) => query,
            Err(e) => {
                warn!(client = %client, id = request.id(), error = %e, "Rejecting DNS request");
                return encode(MessageAssembler::error_response(
                    request.id(),
                    ResponseCode::FormErr,
                ));
            }
        };

        debug!(
            domain = %query.domain,
            record_type = query.record_type,
            client = %client,
            "DNS query received"
        );

        let result = self.use_case.execute(&query).await;
        let response = MessageAssembler::assemble(&result, &request);

        info!(
            domain = %query.domain,
            record_type = %RecordType::from(query.record_type),
            rcode = ?response.message().response_code(),
            answers = response.message().answers().len(),
            elapsed_ns = start.elapsed().as_nanos() as u64,
            "DNS query answered"
        );

        match response.to_wire() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(domain = %query.domain, error = %e, "Failed to encode response");
                encode(MessageAssembler::error_response(
                    request.id(),
                    ResponseCode::ServFail,
                ))
            }
        }
    }
}

fn request_id(query_buf: &[u8]) -> Option<u16> {
    match query_buf {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}

fn encode(response: DnsResponse) -> Option<Vec<u8>> {
    match response.to_wire() {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            error!(error = %e, "Failed to encode error response");
            None
        }
    }
}
