//! eol-watch - EOL risk tracking for software portfolios
//!
//! This library resolves vendor end-of-life dates for tracked software
//! components and classifies each into a fixed risk taxonomy, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`eol_tracking`): Pure resolution logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use eol_watch::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let inventory_reader = InventoryFileReader::new();
//! let source = EndOfLifeClient::new()?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = SnapshotFleetUseCase::new(inventory_reader, source, progress_reporter);
//!
//! // Execute
//! let request = SnapshotRequest::new(PathBuf::from("inventory.toml"), None, 8);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = MarkdownFormatter::new();
//! let output = formatter.format(&response.snapshot)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod eol_tracking;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, InventoryFileReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TableFormatter,
    };
    pub use crate::adapters::outbound::network::{CoalescingSource, EndOfLifeClient};
    pub use crate::application::dto::{OutputFormat, SnapshotRequest, SnapshotResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{ComponentResolver, SnapshotFleetUseCase};
    pub use crate::eol_tracking::domain::{
        AbsenceReason, ComponentId, EolDeclaration, FamilySlug, FleetEntry, FleetSnapshot,
        FleetSummary, LifeCycleRecord, Product, ProductId, ResolvedEol, RiskLevel,
        TrackedComponent,
    };
    pub use crate::eol_tracking::services::{CycleResolver, DateMath};
    pub use crate::ports::outbound::{
        Inventory, InventoryReader, LifeCycleSource, OutputPresenter, ProgressReporter,
        SnapshotFormatter, SourceError,
    };
    pub use crate::shared::Result;
}
