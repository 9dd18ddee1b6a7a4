pub mod server;
pub mod translation;
pub mod transport;

pub use server::DnsServerHandler;
pub use translation::{DnsResponse, InboundQuery, MessageAssembler, RecordSynthesizer};
pub use transport::JsonHttpsResolver;
