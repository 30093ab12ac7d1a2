pub mod mock_resolver;

pub use mock_resolver::{d, MockRecordResolver, RecordingExporter};
