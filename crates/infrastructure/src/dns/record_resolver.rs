use super::forwarding::DnsForwarder;
use async_trait::async_trait;
use dnsmap_application::ports::RecordResolver;
use dnsmap_domain::{
    DomainError, DomainName, LookupFailure, LookupOutcome, RecordSet, RecordType, ResolverConfig,
};
use futures::future::join_all;
use std::time::Duration;
use tracing::{debug, info};

/// [`RecordResolver`] that speaks the DNS wire protocol to the configured
/// nameservers. One query per record type, all types of a domain in flight
/// at once. The forwarder keeps each lookup, failover included, within the
/// timeout.
pub struct WireRecordResolver {
    forwarder: DnsForwarder,
}

impl WireRecordResolver {
    pub fn new(forwarder: DnsForwarder) -> Self {
        Self { forwarder }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let nameservers = config.socket_addrs()?;
        info!(
            nameservers = ?nameservers,
            tcp_fallback = config.tcp_fallback,
            "Wire record resolver created"
        );
        Ok(Self::new(DnsForwarder::new(nameservers, config.tcp_fallback)))
    }

    async fn lookup(
        &self,
        domain: &DomainName,
        record_type: RecordType,
        timeout: Duration,
    ) -> LookupOutcome {
        let outcome = match self.forwarder.query(domain, record_type, timeout).await {
            Ok(response) => response.outcome_for(record_type),
            Err(e) => LookupOutcome::Failed(Self::failure_from(e)),
        };

        debug!(
            domain = %domain,
            record_type = %record_type,
            outcome = ?outcome,
            "Lookup finished"
        );
        outcome
    }

    fn failure_from(error: DomainError) -> LookupFailure {
        match error {
            DomainError::QueryTimeout => LookupFailure::Timeout,
            DomainError::InvalidDnsResponse(reason) => LookupFailure::ServerError(reason),
            other => LookupFailure::Transport(other.to_string()),
        }
    }
}

#[async_trait]
impl RecordResolver for WireRecordResolver {
    async fn resolve(
        &self,
        domain: &DomainName,
        types: &[RecordType],
        timeout: Duration,
    ) -> RecordSet {
        let outcomes = join_all(
            types
                .iter()
                .map(|&record_type| async move {
                    (record_type, self.lookup(domain, record_type, timeout).await)
                }),
        )
        .await;

        let mut records = RecordSet::new();
        for (record_type, outcome) in outcomes {
            records.insert(record_type, outcome);
        }
        records
    }
}
