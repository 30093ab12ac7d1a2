use super::RecordType;
use std::collections::BTreeMap;

/// Why a single record-type lookup produced nothing usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    Timeout,
    NxDomain,
    ServerError(String),
    Transport(String),
}

/// Result of querying one record type for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Answered(Vec<String>),
    NoRecords,
    Failed(LookupFailure),
}

/// Per-type lookup results for one domain, keyed in [`RecordType`] order.
///
/// Only `Answered` entries expose values; empty and failed lookups are kept
/// so callers can tell "nothing there" from "could not ask".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    outcomes: BTreeMap<RecordType, LookupOutcome>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupTally {
    pub answered: usize,
    pub empty: usize,
    pub failed: usize,
}

impl LookupTally {
    pub fn merge(&mut self, other: LookupTally) {
        self.answered += other.answered;
        self.empty += other.empty;
        self.failed += other.failed;
    }
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record_type: RecordType, outcome: LookupOutcome) {
        let outcome = match outcome {
            LookupOutcome::Answered(values) if values.is_empty() => LookupOutcome::NoRecords,
            other => other,
        };
        self.outcomes.insert(record_type, outcome);
    }

    pub fn with_values<I, S>(mut self, record_type: RecordType, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(
            record_type,
            LookupOutcome::Answered(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    pub fn outcome(&self, record_type: RecordType) -> Option<&LookupOutcome> {
        self.outcomes.get(&record_type)
    }

    /// Values for `record_type`, empty unless the lookup answered.
    pub fn values(&self, record_type: RecordType) -> &[String] {
        match self.outcomes.get(&record_type) {
            Some(LookupOutcome::Answered(values)) => values,
            _ => &[],
        }
    }

    pub fn answered(&self) -> impl Iterator<Item = (RecordType, &[String])> {
        self.outcomes.iter().filter_map(|(rt, outcome)| match outcome {
            LookupOutcome::Answered(values) => Some((*rt, values.as_slice())),
            _ => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (RecordType, &LookupFailure)> {
        self.outcomes.iter().filter_map(|(rt, outcome)| match outcome {
            LookupOutcome::Failed(failure) => Some((*rt, failure)),
            _ => None,
        })
    }

    /// True when no record type produced a value.
    pub fn is_empty(&self) -> bool {
        self.answered().next().is_none()
    }

    pub fn tally(&self) -> LookupTally {
        let mut tally = LookupTally::default();
        for outcome in self.outcomes.values() {
            match outcome {
                LookupOutcome::Answered(_) => tally.answered += 1,
                LookupOutcome::NoRecords => tally.empty += 1,
                LookupOutcome::Failed(_) => tally.failed += 1,
            }
        }
        tally
    }
}

impl<S: Into<String>> FromIterator<(RecordType, Vec<S>)> for RecordSet {
    fn from_iter<T: IntoIterator<Item = (RecordType, Vec<S>)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(RecordSet::new(), |set, (rt, values)| set.with_values(rt, values))
    }
}
