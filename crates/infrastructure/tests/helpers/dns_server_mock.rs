use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, CNAME, MX, NS, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::collections::{HashMap, HashSet};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Static answers served by [`MockDnsServer`].
#[derive(Default, Clone)]
pub struct MockZone {
    records: HashMap<(String, RecordType), Vec<RData>>,
    nxdomain: HashSet<String>,
    servfail: HashSet<String>,
    truncate_udp: bool,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(mut self, name: &str, rdata: RData) -> Self {
        self.records
            .entry((name.to_string(), rdata.record_type()))
            .or_default()
            .push(rdata);
        self
    }

    pub fn a(self, name: &str, ip: [u8; 4]) -> Self {
        self.record(name, RData::A(A(Ipv4Addr::from(ip))))
    }

    pub fn mx(self, name: &str, preference: u16, exchange: &str) -> Self {
        self.record(name, RData::MX(MX::new(preference, fqdn(exchange))))
    }

    pub fn ns(self, name: &str, host: &str) -> Self {
        self.record(name, RData::NS(NS(fqdn(host))))
    }

    pub fn cname(self, name: &str, target: &str) -> Self {
        self.record(name, RData::CNAME(CNAME(fqdn(target))))
    }

    pub fn txt(self, name: &str, text: &str) -> Self {
        self.record(name, RData::TXT(TXT::new(vec![text.to_string()])))
    }

    pub fn nxdomain(mut self, name: &str) -> Self {
        self.nxdomain.insert(name.to_string());
        self
    }

    pub fn servfail(mut self, name: &str) -> Self {
        self.servfail.insert(name.to_string());
        self
    }

    /// Every UDP answer comes back empty with TC set; TCP answers normally.
    pub fn truncate_udp(mut self) -> Self {
        self.truncate_udp = true;
        self
    }

    fn respond(&self, query_bytes: &[u8], over_udp: bool) -> Option<Vec<u8>> {
        let request = Message::from_vec(query_bytes).ok()?;
        let query = request.queries().first()?.clone();
        let owner = query.name().to_utf8().trim_end_matches('.').to_lowercase();

        let mut response = Message::new(request.id(), MessageType::Response, OpCode::Query);
        response.set_recursion_desired(true);
        response.set_recursion_available(true);
        response.add_query(query.clone());

        if self.nxdomain.contains(&owner) {
            response.set_response_code(ResponseCode::NXDomain);
        } else if self.servfail.contains(&owner) {
            response.set_response_code(ResponseCode::ServFail);
        } else if over_udp && self.truncate_udp {
            response.set_truncated(true);
        } else if let Some(answers) = self.records.get(&(owner, query.query_type())) {
            for rdata in answers {
                response.add_answer(Record::from_rdata(query.name().clone(), 300, rdata.clone()));
            }
        }

        response.to_vec().ok()
    }
}

fn fqdn(name: &str) -> Name {
    Name::from_str(&format!("{}.", name.trim_end_matches('.'))).unwrap()
}

/// Loopback DNS server answering from a [`MockZone`] over UDP and TCP on
/// the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(zone: MockZone) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = zone.respond(&buf[..len], true) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            counter.fetch_add(1, Ordering::SeqCst);
                            let zone = zone.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = zone.respond(&query, false) {
                                    let len = (response.len() as u16).to_be_bytes();
                                    let _ = stream.write_all(&len).await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Queries received over both transports.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Bound UDP socket that never answers.
pub struct SilentDnsServer {
    socket: UdpSocket,
}

impl SilentDnsServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        Ok(Self {
            socket: UdpSocket::bind("127.0.0.1:0").await?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.socket.local_addr().unwrap()
    }
}
