pub mod forwarding;
pub mod record_resolver;
pub mod transport;

pub use forwarding::DnsForwarder;
pub use record_resolver::WireRecordResolver;
