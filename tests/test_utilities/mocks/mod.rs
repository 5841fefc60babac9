/// Mock implementations for testing
mod mock_inventory_reader;
mod mock_life_cycle_source;
mod mock_progress_reporter;

pub use mock_inventory_reader::MockInventoryReader;
pub use mock_life_cycle_source::MockLifeCycleSource;
pub use mock_progress_reporter::MockProgressReporter;
