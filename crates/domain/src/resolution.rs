//! Shape of the upstream DoH JSON payload.
//!
//! Field names follow the JSON API (`Status`, `TC`, `Answer`, ...). Every field is
//! optional on the wire: a missing key decodes to its default, so a payload that
//! carries nothing but `{"Status": 3}` is still a valid result.

use serde::{Deserialize, Serialize};

const SERVFAIL: u16 = 2;
/// Largest RCODE the message header can carry without an EDNS OPT record.
const MAX_RESPONSE_CODE: u16 = 0x000F;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawQuestionEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: u16,
}

/// One record of the `Answer`, `Authority` or `Additional` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawAnswerEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: u16,

    #[serde(rename = "TTL")]
    pub ttl: u32,

    pub data: String,
}

impl RawAnswerEntry {
    pub fn new(name: impl Into<String>, record_type: u16, ttl: u32, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawResolutionResult {
    #[serde(rename = "Status")]
    pub status: i32,

    #[serde(rename = "TC")]
    pub truncated: bool,

    #[serde(rename = "RD")]
    pub recursion_desired: bool,

    #[serde(rename = "RA")]
    pub recursion_available: bool,

    #[serde(rename = "AD")]
    pub authenticated_data: bool,

    #[serde(rename = "CD")]
    pub checking_disabled: bool,

    #[serde(rename = "Question")]
    pub question: Vec<RawQuestionEntry>,

    #[serde(rename = "Answer")]
    pub answer: Vec<RawAnswerEntry>,

    #[serde(rename = "Authority")]
    pub authority: Vec<RawAnswerEntry>,

    #[serde(rename = "Additional")]
    pub additional: Vec<RawAnswerEntry>,

    /// Free-form diagnostic text from the resolver. Informational only.
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl RawResolutionResult {
    /// DNS response code for `status`.
    ///
    /// Replies carry no OPT record, so only the 4-bit header RCODE reaches the
    /// client. Extended codes (16 and up) and negative values are reported as
    /// SERVFAIL.
    pub fn response_code(&self) -> u16 {
        match u16::try_from(self.status) {
            Ok(code) if code <= MAX_RESPONSE_CODE => code,
            _ => SERVFAIL,
        }
    }

    pub fn record_count(&self) -> usize {
        self.answer.len() + self.authority.len() + self.additional.len()
    }
}
