//! Shared application service layer for pipetree.
//!
//! Loads network files into an in-memory host, selects seeds the way the
//! editor add-in does, and runs the build -> trace/walk -> assemble pipeline.

pub mod error;
pub mod export_service;
pub mod fingerprint;
pub mod network_service;
pub mod selection;
pub mod sequence_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use export_service::{run_export, ExportMode, ExportOutcome, ExportRequest, SeedStrategy};
pub use fingerprint::compute_export_id;
pub use network_service::{build_network, load_network, LoadedNetwork};
pub use selection::{
    containers_in_system, elements_in_system, equipment_in_system, start_pipes, system_names,
    StartPipe,
};
pub use sequence_service::order_system;
