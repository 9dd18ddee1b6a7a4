use super::record_synthesizer::RecordSynthesizer;
use doh_relay_domain::RawAnswerEntry;
use hickory_proto::rr::Record;
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Answer,
    Authority,
    Additional,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct SectionTranslator;

impl SectionTranslator {
    /// Translates a section entry by entry, keeping the upstream order.
    ///
    /// Entries that fail to synthesize are logged and left out; the rest of the
    /// section is still translated.
    pub fn translate(section: Section, entries: &[RawAnswerEntry]) -> Vec<Record> {
        entries
            .iter()
            .filter_map(|entry| match RecordSynthesizer::synthesize(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(
                        section = %section,
                        name = %entry.name,
                        record_type = entry.record_type,
                        error = %e,
                        "Dropping record that failed to synthesize"
                    );
                    None
                }
            })
            .collect()
    }
}
