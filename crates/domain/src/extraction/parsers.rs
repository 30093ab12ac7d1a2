//! Total parsers turning one textual record value into referenced domains.
//!
//! Every function accepts arbitrary text and returns `None` (or an empty
//! vector) for values that do not carry a usable name.

use crate::domain_name::DomainName;
use aho_corasick::AhoCorasick;
use std::sync::LazyLock;

const SPF_DIRECTIVES: [&str; 2] = ["include:", "redirect="];

static SPF_MATCHER: LazyLock<Option<AhoCorasick>> =
    LazyLock::new(|| AhoCorasick::new(SPF_DIRECTIVES).ok());

fn name(token: &str) -> Option<DomainName> {
    DomainName::parse(token).ok()
}

pub fn cname_target(value: &str) -> Option<DomainName> {
    name(value)
}

pub fn ns_target(value: &str) -> Option<DomainName> {
    name(value)
}

pub fn ptr_target(value: &str) -> Option<DomainName> {
    name(value)
}

/// `<preference> <exchange>`
pub fn mx_exchange(value: &str) -> Option<DomainName> {
    value.split_whitespace().nth(1).and_then(name)
}

/// First SOA field, the primary name server.
pub fn soa_primary(value: &str) -> Option<DomainName> {
    value.split_whitespace().next().and_then(name)
}

/// `<priority> <weight> <port> <target>`
pub fn srv_target(value: &str) -> Option<DomainName> {
    value.split_whitespace().nth(3).and_then(name)
}

/// Domains named by `include:` and `redirect=` directives.
///
/// A token is the maximal run of non-whitespace, non-quote characters after
/// the directive. Directives appearing inside an earlier token are part of
/// that token and are not matched again.
pub fn spf_targets(value: &str) -> Vec<DomainName> {
    let Some(matcher) = SPF_MATCHER.as_ref() else {
        return Vec::new();
    };

    let mut targets = Vec::new();
    let mut consumed = 0;

    for found in matcher.find_iter(value) {
        if found.start() < consumed {
            continue;
        }
        let rest = &value[found.end()..];
        let token_len = rest
            .find(|c: char| c.is_whitespace() || c == '"')
            .unwrap_or(rest.len());
        consumed = found.end() + token_len;

        if let Some(target) = name(&rest[..token_len]) {
            targets.push(target);
        }
    }

    targets
}

/// `<flags> <tag> <value>`; the value names a domain when it contains a dot
/// and is not a URI.
pub fn caa_domain(value: &str) -> Option<DomainName> {
    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() < 3 {
        return None;
    }

    let candidate = fields[fields.len() - 1].trim_matches('"').trim_end_matches('.');
    if !candidate.contains('.') || candidate.starts_with("http") {
        return None;
    }
    name(candidate)
}
