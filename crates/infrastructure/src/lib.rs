//! dnsmap infrastructure: wire-protocol resolution and graph exporters
pub mod dns;
pub mod export;
