use super::inbound::InboundQuery;
use super::section_translator::{Section, SectionTranslator};
use doh_relay_domain::{DomainError, RawQuestionEntry, RawResolutionResult};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use tracing::warn;

/// A response ready for the wire, carrying the request's compression preference.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    message: Message,
    compress: bool,
}

impl DnsResponse {
    pub fn new(message: Message, compress: bool) -> Self {
        Self { message, compress }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn into_message(self) -> Message {
        self.message
    }

    pub fn compress(&self) -> bool {
        self.compress
    }

    /// Serialize to wire format.
    ///
    /// Without compression every name is written out label by label. Owner and
    /// question names keep their case; hickory's canonical mode lower-cases the
    /// names embedded in NS, CNAME, PTR, MX, SOA and SRV data.
    pub fn to_wire(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        encoder.set_canonical_names(!self.compress);

        self.message
            .emit(&mut encoder)
            .map_err(|e| DomainError::SerializationFailed(e.to_string()))?;

        Ok(buf)
    }
}

pub struct MessageAssembler;

impl MessageAssembler {
    /// Builds the reply to `request` from an upstream payload.
    ///
    /// Identity (id, opcode, compression) always comes from the request; the
    /// payload only supplies content, result flags and the response code.
    pub fn assemble(result: &RawResolutionResult, request: &InboundQuery) -> DnsResponse {
        let mut message = Self::response_header(request.id());
        let response_code: ResponseCode = result.response_code().into();

        message
            .set_truncated(result.truncated)
            .set_recursion_desired(result.recursion_desired)
            .set_recursion_available(result.recursion_available)
            .set_authentic_data(result.authenticated_data)
            .set_checking_disabled(result.checking_disabled)
            .set_response_code(response_code);

        message
            .add_queries(Self::translate_questions(&result.question))
            .add_answers(SectionTranslator::translate(Section::Answer, &result.answer))
            .add_name_servers(SectionTranslator::translate(
                Section::Authority,
                &result.authority,
            ))
            .add_additionals(SectionTranslator::translate(
                Section::Additional,
                &result.additional,
            ));

        DnsResponse::new(message, request.compress())
    }

    /// Header-only reply for requests that cannot be relayed.
    pub fn error_response(id: u16, code: ResponseCode) -> DnsResponse {
        let mut message = Self::response_header(id);
        message.set_response_code(code);
        DnsResponse::new(message, false)
    }

    fn response_header(id: u16) -> Message {
        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_authoritative(false);
        message
    }

    fn translate_questions(questions: &[RawQuestionEntry]) -> Vec<Query> {
        questions
            .iter()
            .filter_map(|question| match Name::from_str(&question.name) {
                Ok(name) => {
                    let mut query = Query::query(name, RecordType::from(question.record_type));
                    query.set_query_class(DNSClass::IN);
                    Some(query)
                }
                Err(e) => {
                    warn!(
                        name = %question.name,
                        record_type = question.record_type,
                        error = %e,
                        "Dropping question with invalid name"
                    );
                    None
                }
            })
            .collect()
    }
}
