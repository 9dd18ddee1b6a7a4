//! Translation of DoH JSON results into DNS messages.

pub mod compression;
pub mod inbound;
pub mod message_assembler;
pub mod record_synthesizer;
pub mod section_translator;

pub use compression::uses_name_compression;
pub use inbound::InboundQuery;
pub use message_assembler::{DnsResponse, MessageAssembler};
pub use record_synthesizer::RecordSynthesizer;
pub use section_translator::{Section, SectionTranslator};
