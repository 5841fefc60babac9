/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (life-cycle source, file system,
/// console, etc.).
pub mod inventory_reader;
pub mod life_cycle_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod snapshot_formatter;

pub use inventory_reader::{Inventory, InventoryReader};
pub use life_cycle_source::{LifeCycleSource, SourceError};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use snapshot_formatter::SnapshotFormatter;
