pub mod resolve_component;
pub mod snapshot_fleet;

pub use resolve_component::ComponentResolver;
pub use snapshot_fleet::SnapshotFleetUseCase;
