pub mod output_format;
pub mod snapshot_request;
pub mod snapshot_response;

pub use output_format::OutputFormat;
pub use snapshot_request::SnapshotRequest;
pub use snapshot_response::SnapshotResponse;
