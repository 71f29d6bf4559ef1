//! Geodetic groundwork for the export pipeline
//!
//! Three leaf concerns, all pure functions over decimal-degree
//! coordinates:
//! - `normalize`: GeoJSON ring validation, geodesic-consistent area,
//!   bounding box
//! - `dms`: degrees/minutes/seconds display formatting
//! - `project`: bbox-to-panel affine fit for page drawing

pub mod dms;
pub mod error;
pub mod normalize;
pub mod project;

pub use dms::{format_dms, Axis};
pub use error::{CoordinateError, GeometryError, ProjectionError};
pub use normalize::{normalize, GeoBounds, LonLat, NormalizedRing};
pub use project::{PanelTransform, DEFAULT_PADDING};
