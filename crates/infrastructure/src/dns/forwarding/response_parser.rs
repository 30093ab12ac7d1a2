use super::record_type_map::RecordTypeMapper;
use dnsmap_domain::{DomainError, LookupFailure, LookupOutcome, RecordType};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// Answer values of `record_type` rendered as zone-file style text.
    /// Records of other types (e.g. a CNAME chain in front) are skipped.
    pub fn values_for(&self, record_type: RecordType) -> Vec<String> {
        let wanted = RecordTypeMapper::to_hickory(record_type);
        self.answers
            .iter()
            .filter(|r| r.record_type() == wanted)
            .map(|r| ResponseParser::rdata_to_text(r.data()))
            .collect()
    }

    pub fn outcome_for(&self, record_type: RecordType) -> LookupOutcome {
        if self.is_nxdomain() {
            return LookupOutcome::Failed(LookupFailure::NxDomain);
        }
        if self.rcode != ResponseCode::NoError {
            return LookupOutcome::Failed(LookupFailure::ServerError(
                ResponseParser::rcode_to_status(self.rcode).to_string(),
            ));
        }

        let values = self.values_for(record_type);
        if values.is_empty() {
            LookupOutcome::NoRecords
        } else {
            LookupOutcome::Answered(values)
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let response = DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            answers: message.answers().to_vec(),
        };

        debug!(
            rcode = ?response.rcode,
            answers = response.answers.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }

    pub fn rdata_to_text(data: &RData) -> String {
        match data {
            RData::A(a) => a.0.to_string(),
            RData::AAAA(aaaa) => aaaa.0.to_string(),
            RData::CNAME(name) => name.to_utf8(),
            RData::NS(name) => name.to_utf8(),
            RData::PTR(name) => name.to_utf8(),
            RData::MX(mx) => format!("{} {}", mx.preference(), mx.exchange().to_utf8()),
            RData::SRV(srv) => format!(
                "{} {} {} {}",
                srv.priority(),
                srv.weight(),
                srv.port(),
                srv.target().to_utf8()
            ),
            RData::TXT(txt) => txt
                .txt_data()
                .iter()
                .map(|chunk| format!("\"{}\"", String::from_utf8_lossy(chunk)))
                .collect::<Vec<_>>()
                .join(" "),
            other => other.to_string(),
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
