#![allow(dead_code)]

use async_trait::async_trait;
use dnsmap_application::ports::{GraphExporter, GraphSnapshot, RecordResolver};
use dnsmap_domain::{
    DomainError, DomainName, ExportFormat, LookupFailure, LookupOutcome, RecordSet, RecordType,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn d(name: &str) -> DomainName {
    DomainName::parse(name).unwrap()
}

#[derive(Clone, Default)]
pub struct MockRecordResolver {
    answers: Arc<Mutex<HashMap<(DomainName, RecordType), Vec<String>>>>,
    failures: Arc<Mutex<HashMap<(DomainName, RecordType), LookupFailure>>>,
    delays: Arc<Mutex<HashMap<DomainName, Duration>>>,
    calls: Arc<Mutex<Vec<DomainName>>>,
    requested_types: Arc<Mutex<Vec<RecordType>>>,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, domain: &str, record_type: RecordType, values: &[&str]) -> Self {
        self.answers.lock().unwrap().insert(
            (d(domain), record_type),
            values.iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    pub fn with_failure(
        self,
        domain: &str,
        record_type: RecordType,
        failure: LookupFailure,
    ) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert((d(domain), record_type), failure);
        self
    }

    pub fn with_delay(self, domain: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(d(domain), delay);
        self
    }

    pub fn calls(&self) -> Vec<DomainName> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, domain: &str) -> usize {
        let target = d(domain);
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| **c == target)
            .count()
    }

    pub fn requested_types(&self) -> Vec<RecordType> {
        self.requested_types.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn resolve(
        &self,
        domain: &DomainName,
        types: &[RecordType],
        _timeout: Duration,
    ) -> RecordSet {
        self.calls.lock().unwrap().push(domain.clone());
        *self.requested_types.lock().unwrap() = types.to_vec();

        let delay = self.delays.lock().unwrap().get(domain).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let answers = self.answers.lock().unwrap();
        let failures = self.failures.lock().unwrap();
        let mut set = RecordSet::new();
        for &record_type in types {
            let key = (domain.clone(), record_type);
            if let Some(failure) = failures.get(&key) {
                set.insert(record_type, LookupOutcome::Failed(failure.clone()));
            } else if let Some(values) = answers.get(&key) {
                set.insert(record_type, LookupOutcome::Answered(values.clone()));
            } else {
                set.insert(record_type, LookupOutcome::NoRecords);
            }
        }
        set
    }
}

/// Records every export request; a `failing` exporter always errors.
#[derive(Clone)]
pub struct RecordingExporter {
    format: ExportFormat,
    fail: bool,
    written: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl RecordingExporter {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            fail: false,
            written: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(format: ExportFormat) -> Self {
        Self {
            fail: true,
            ..Self::new(format)
        }
    }

    pub fn written(&self) -> Vec<(PathBuf, String)> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphExporter for RecordingExporter {
    fn format(&self) -> ExportFormat {
        self.format
    }

    async fn export(&self, snapshot: &GraphSnapshot, output: &Path) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::ExportFailed {
                format: self.format.to_string(),
                reason: "renderer missing".to_string(),
            });
        }
        self.written
            .lock()
            .unwrap()
            .push((output.to_path_buf(), snapshot.dot.clone()));
        Ok(())
    }
}
