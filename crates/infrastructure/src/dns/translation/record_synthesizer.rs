//! Builds one resource record from a JSON answer entry.
//!
//! The `data` field of an answer is the record's RDATA in presentation
//! (zone-file) form, so it goes straight through hickory's zone-file RDATA
//! parser. The owner name and TTL come from the entry itself.

use doh_relay_domain::{DomainError, RawAnswerEntry};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::txt::{ParseError, ParseErrorKind, RDataParser};
use std::str::FromStr;

/// Longest `<character-string>` the wire format can carry.
const MAX_CHARACTER_STRING: usize = 255;

pub struct RecordSynthesizer;

impl RecordSynthesizer {
    /// Canonical mnemonic for a type code, `None` when the code is unassigned.
    pub fn mnemonic(type_code: u16) -> Option<String> {
        Self::record_type(type_code).ok().map(|t| t.to_string())
    }

    pub fn record_type(type_code: u16) -> Result<RecordType, DomainError> {
        match RecordType::from(type_code) {
            RecordType::Unknown(code) => Err(DomainError::UnknownRecordType(code)),
            known => Ok(known),
        }
    }

    /// Zone-file line for the entry, `<name> <ttl> IN <mnemonic> <data>`.
    pub fn record_line(entry: &RawAnswerEntry) -> Result<String, DomainError> {
        let record_type = Self::record_type(entry.record_type)?;
        Ok(Self::line(entry, record_type))
    }

    pub fn synthesize(entry: &RawAnswerEntry) -> Result<Record, DomainError> {
        let record_type = Self::record_type(entry.record_type)?;
        let invalid =
            |reason: String| DomainError::invalid_record(Self::line(entry, record_type), reason);

        let owner = Name::from_str(&entry.name)
            .map_err(|e| invalid(format!("invalid owner name: {}", e)))?;

        let rdata = RData::try_from_str(record_type, &entry.data).map_err(|e: ParseError| {
            match e.kind() {
                ParseErrorKind::UnsupportedRecordType(unsupported) => {
                    DomainError::UnsupportedRecordType(unsupported.to_string())
                }
                _ => invalid(e.to_string()),
            }
        })?;

        Ok(Record::from_rdata(owner, entry.ttl, split_long_strings(rdata)))
    }

    fn line(entry: &RawAnswerEntry, record_type: RecordType) -> String {
        format!(
            "{} {} IN {} {}",
            entry.name, entry.ttl, record_type, entry.data
        )
    }
}

/// TXT strings longer than 255 bytes are split into consecutive strings.
fn split_long_strings(rdata: RData) -> RData {
    let RData::TXT(txt) = &rdata else {
        return rdata;
    };
    if txt
        .txt_data()
        .iter()
        .all(|s| s.len() <= MAX_CHARACTER_STRING)
    {
        return rdata;
    }

    let mut strings: Vec<&[u8]> = Vec::with_capacity(txt.txt_data().len() + 1);
    for s in txt.txt_data() {
        if s.len() <= MAX_CHARACTER_STRING {
            strings.push(s);
        } else {
            strings.extend(s.chunks(MAX_CHARACTER_STRING));
        }
    }
    RData::TXT(TXT::from_bytes(strings))
}
