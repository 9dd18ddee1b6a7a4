#![allow(dead_code)]
use doh_relay_domain::{RawAnswerEntry, RawQuestionEntry, RawResolutionResult};
use doh_relay_infrastructure::dns::InboundQuery;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn query_message(id: u16, domain: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(Query::query(name(domain), record_type));
    message
}

pub fn query_bytes(id: u16, domain: &str, record_type: RecordType) -> Vec<u8> {
    query_message(id, domain, record_type).to_vec().unwrap()
}

/// A query whose additional record repeats the question name, so the encoder
/// emits a compression pointer for it.
pub fn compressed_query_bytes(id: u16, domain: &str) -> Vec<u8> {
    let mut message = query_message(id, domain, RecordType::A);
    message.add_additional(Record::from_rdata(
        name(domain),
        60,
        RData::A(A(Ipv4Addr::new(192, 0, 2, 1))),
    ));
    message.to_vec().unwrap()
}

pub fn inbound_query(id: u16, domain: &str, record_type: RecordType) -> InboundQuery {
    InboundQuery::parse(&query_bytes(id, domain, record_type)).unwrap()
}

pub fn a_data(record: &Record) -> Option<Ipv4Addr> {
    match record.data() {
        Some(RData::A(a)) => Some(a.0),
        _ => None,
    }
}

#[derive(Default)]
pub struct ResolutionBuilder {
    result: RawResolutionResult,
}

impl ResolutionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: i32) -> Self {
        self.result.status = status;
        self
    }

    pub fn flags(mut self, tc: bool, rd: bool, ra: bool, ad: bool, cd: bool) -> Self {
        self.result.truncated = tc;
        self.result.recursion_desired = rd;
        self.result.recursion_available = ra;
        self.result.authenticated_data = ad;
        self.result.checking_disabled = cd;
        self
    }

    pub fn question(mut self, name: &str, record_type: u16) -> Self {
        self.result.question.push(RawQuestionEntry {
            name: name.to_string(),
            record_type,
        });
        self
    }

    pub fn answer(mut self, name: &str, record_type: u16, ttl: u32, data: &str) -> Self {
        self.result
            .answer
            .push(RawAnswerEntry::new(name, record_type, ttl, data));
        self
    }

    pub fn authority(mut self, name: &str, record_type: u16, ttl: u32, data: &str) -> Self {
        self.result
            .authority
            .push(RawAnswerEntry::new(name, record_type, ttl, data));
        self
    }

    pub fn additional(mut self, name: &str, record_type: u16, ttl: u32, data: &str) -> Self {
        self.result
            .additional
            .push(RawAnswerEntry::new(name, record_type, ttl, data));
        self
    }

    pub fn build(self) -> RawResolutionResult {
        self.result
    }
}
