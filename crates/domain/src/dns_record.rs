mod record_set;
mod record_type;

pub use record_set::{LookupFailure, LookupOutcome, LookupTally, RecordSet};
pub use record_type::RecordType;
