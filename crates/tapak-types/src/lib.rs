//! Shared data model for the tapak-proyek export pipeline
//!
//! The records here mirror the persistence layer's rows; the pipeline
//! consumes them read-only. `attributes` carries the fixed AMDALNET
//! interchange schema shared by the PDF attribute table and the
//! shapefile writer.

pub mod attributes;
pub mod types;

pub use attributes::{attribute_rows, parse_area, AttributeError, AttributeField, DbaseType, ATTRIBUTE_SCHEMA};
pub use types::{Author, ExportArtifact, MimeType, PolygonRecord, ProjectRecord, DEFAULT_LAYER};
