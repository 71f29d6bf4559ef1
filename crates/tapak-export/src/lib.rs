//! Export orchestrator
//!
//! The façade the surrounding application calls. Resolves the project
//! and its polygons through the `ProjectDirectory` collaborator,
//! dispatches to the map sheet composer or the interchange packager,
//! and returns a finished `ExportArtifact`. Synchronous and
//! side-effect free: inputs are read-only snapshots and nothing is
//! cached between calls, so concurrent exports need no coordination.

pub mod directory;
pub mod error;
pub mod export;

pub use directory::ProjectDirectory;
pub use error::ExportError;
pub use export::{export_interchange, export_map, interchange_artifact, map_artifact};
