//! AMDALNET interchange packager
//!
//! Serializes polygon records into an ESRI shapefile bundle
//! (.shp/.shx/.dbf/.prj) and wraps the file set in a deflate zip under
//! the `Tapak_proyek` folder the regulator expects. Everything is
//! assembled in memory; a packaging call either returns the complete
//! container or fails without emitting bytes.

pub mod dbf;
pub mod error;
pub mod pack;
pub mod shp;

pub use error::PackageError;
pub use pack::{pack_interchange, LAYER_NAME};
