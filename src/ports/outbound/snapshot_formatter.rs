use crate::eol_tracking::domain::FleetSnapshot;
use crate::shared::Result;

/// SnapshotFormatter port for rendering a fleet snapshot.
///
/// This port abstracts the output representation (JSON, Markdown, a
/// terminal table) of the urgency-ordered snapshot.
pub trait SnapshotFormatter {
    /// Renders the snapshot to its final textual form.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, snapshot: &FleetSnapshot) -> Result<String>;
}
