pub mod coalescing_source;
pub mod endoflife_client;

pub use coalescing_source::CoalescingSource;
pub use endoflife_client::EndOfLifeClient;
