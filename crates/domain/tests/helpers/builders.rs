#![allow(dead_code)]
use dnsmap_domain::{DomainName, RecordSet, RecordType};
use std::collections::HashMap;

pub fn d(name: &str) -> DomainName {
    DomainName::parse(name).unwrap()
}

/// In-memory zone data standing in for live resolution.
pub struct ZoneBuilder {
    records: HashMap<DomainName, RecordSet>,
}

impl ZoneBuilder {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn record(mut self, domain: &str, record_type: RecordType, values: &[&str]) -> Self {
        let set = self.records.remove(&d(domain)).unwrap_or_default();
        self.records.insert(
            d(domain),
            set.with_values(record_type, values.iter().copied()),
        );
        self
    }

    pub fn build(self) -> FakeZone {
        FakeZone {
            records: self.records,
            calls: HashMap::new(),
        }
    }
}

pub struct FakeZone {
    records: HashMap<DomainName, RecordSet>,
    calls: HashMap<DomainName, usize>,
}

impl FakeZone {
    pub fn resolve(&mut self, domain: &DomainName) -> RecordSet {
        *self.calls.entry(domain.clone()).or_insert(0) += 1;
        self.records.get(domain).cloned().unwrap_or_default()
    }

    pub fn calls(&self) -> &HashMap<DomainName, usize> {
        &self.calls
    }
}
