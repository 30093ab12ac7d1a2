#![allow(dead_code)]
pub mod builders;
pub mod dns_server_mock;

pub use builders::{d, SnapshotBuilder};
pub use dns_server_mock::{MockDnsServer, MockZone, SilentDnsServer};
