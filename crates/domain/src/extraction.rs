//! Next-hop domain extraction from resolved records.

pub mod parsers;

use crate::dns_record::{RecordSet, RecordType};
use crate::domain_name::DomainName;
use crate::graph::EdgeOrigin;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// A domain referenced by a record (or by the naming hierarchy) of the
/// domain being explored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractedLink {
    pub target: DomainName,
    pub via: EdgeOrigin,
}

fn targets_of(record_type: RecordType, value: &str) -> Vec<DomainName> {
    match record_type {
        RecordType::CNAME => parsers::cname_target(value).into_iter().collect(),
        RecordType::MX => parsers::mx_exchange(value).into_iter().collect(),
        RecordType::NS => parsers::ns_target(value).into_iter().collect(),
        RecordType::SOA => parsers::soa_primary(value).into_iter().collect(),
        RecordType::SRV => parsers::srv_target(value).into_iter().collect(),
        RecordType::TXT => parsers::spf_targets(value),
        RecordType::CAA => parsers::caa_domain(value).into_iter().collect(),
        RecordType::PTR => parsers::ptr_target(value).into_iter().collect(),
        RecordType::A | RecordType::AAAA => Vec::new(),
    }
}

/// The structural parent of `domain` (when it has one) followed by every
/// `(target, origin)` pair implied by `records`.
///
/// Pairs are unique; record pairs are ordered by record type, then by value
/// order.
pub fn extract_links(records: &RecordSet, domain: &DomainName) -> Vec<ExtractedLink> {
    let mut seen = FxHashSet::default();
    let mut links = Vec::new();

    let record_links = records.answered().flat_map(|(record_type, values)| {
        values.iter().flat_map(move |value| {
            targets_of(record_type, value)
                .into_iter()
                .map(move |target| ExtractedLink {
                    target,
                    via: EdgeOrigin::Record(record_type),
                })
        })
    });

    let parent_link = domain.parent().map(|target| ExtractedLink {
        target,
        via: EdgeOrigin::Parent,
    });

    for link in parent_link.into_iter().chain(record_links) {
        if seen.insert(link.clone()) {
            links.push(link);
        }
    }

    links
}

/// Distinct next-hop domains for `domain`, including its parent.
pub fn extract(records: &RecordSet, domain: &DomainName) -> BTreeSet<DomainName> {
    extract_links(records, domain)
        .into_iter()
        .map(|link| link.target)
        .collect()
}
