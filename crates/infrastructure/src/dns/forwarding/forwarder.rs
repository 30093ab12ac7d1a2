use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use crate::dns::transport::Transport;
use dnsmap_domain::{DomainError, DomainName, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Sends queries to an ordered list of nameservers.
///
/// A nameserver is skipped only when talking to it fails (timeout, refused
/// connection, garbled reply). Any parsed response, NXDOMAIN included, is
/// returned as-is.
pub struct DnsForwarder {
    nameservers: Vec<SocketAddr>,
    tcp_fallback: bool,
}

impl DnsForwarder {
    pub fn new(nameservers: Vec<SocketAddr>, tcp_fallback: bool) -> Self {
        Self {
            nameservers,
            tcp_fallback,
        }
    }

    /// `timeout` bounds the whole lookup. Each nameserver gets an equal
    /// share of whatever time is left when its turn comes.
    pub async fn query(
        &self,
        domain: &DomainName,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        if self.nameservers.is_empty() {
            return Err(DomainError::AllNameserversUnreachable);
        }

        let (id, request) = MessageBuilder::build_query(domain, record_type)?;
        let deadline = Instant::now() + timeout;
        let mut all_timed_out = true;
        let mut last_error = DomainError::AllNameserversUnreachable;

        for (index, server) in self.nameservers.iter().enumerate() {
            let budget = server_budget(deadline, self.nameservers.len() - index);
            if budget.is_zero() {
                break;
            }

            let attempt =
                tokio::time::timeout(budget, self.query_server(*server, id, &request, budget))
                    .await
                    .unwrap_or(Err(DomainError::QueryTimeout));

            match attempt {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!(
                        server = %server,
                        domain = %domain,
                        record_type = %record_type,
                        error = %e,
                        "Nameserver failed, trying next"
                    );
                    all_timed_out &= e == DomainError::QueryTimeout;
                    last_error = e;
                }
            }
        }

        if all_timed_out {
            return Err(DomainError::QueryTimeout);
        }
        if self.nameservers.len() > 1 {
            return Err(DomainError::AllNameserversUnreachable);
        }
        Err(last_error)
    }

    async fn query_server(
        &self,
        server: SocketAddr,
        id: u16,
        request: &[u8],
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let response = Self::exchange(&Transport::udp(server), server, id, request, timeout).await?;

        if response.truncated && self.tcp_fallback {
            debug!(server = %server, "Truncated UDP response, retrying over TCP");
            return Self::exchange(&Transport::tcp(server), server, id, request, timeout).await;
        }

        Ok(response)
    }

    async fn exchange(
        transport: &Transport,
        server: SocketAddr,
        id: u16,
        request: &[u8],
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let reply = transport.send(request, timeout).await?;
        let response = ResponseParser::parse(&reply.bytes)?;

        if response.id != id {
            return Err(DomainError::Transport {
                server: server.to_string(),
                reason: format!(
                    "{} response ID mismatch: expected {:#06x}, got {:#06x}",
                    reply.protocol_used, id, response.id
                ),
            });
        }

        Ok(response)
    }
}

/// Equal share of the time left before `deadline` for `servers_left` servers.
fn server_budget(deadline: Instant, servers_left: usize) -> Duration {
    let remaining = deadline.saturating_duration_since(Instant::now());
    match u32::try_from(servers_left) {
        Ok(n) if n > 1 => remaining / n,
        _ => remaining,
    }
}
