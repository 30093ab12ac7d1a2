use async_trait::async_trait;
use dnsmap_domain::{DomainName, RecordSet, RecordType};
use std::time::Duration;

#[async_trait]
pub trait RecordResolver: Send + Sync {
    /// Looks up every type in `types` for `domain`, each bounded by
    /// `timeout`.
    ///
    /// Never fails as a whole: a type that errors or times out is recorded
    /// as [`dnsmap_domain::LookupOutcome::Failed`] in the returned set.
    async fn resolve(
        &self,
        domain: &DomainName,
        types: &[RecordType],
        timeout: Duration,
    ) -> RecordSet;
}
