//! Peta Tapak Proyek map sheet composer
//!
//! Produces the regulator-format A3 landscape map sheet as a single
//! in-memory PDF: map panel with coordinate grid, polygon, scale bar
//! and north arrow on the left, banded information panel on the right.
//!
//! Every band renders through a pure function taking an explicit ops
//! builder and its region rectangle; no document state is ambient. The
//! composer is deterministic: identical inputs (including the supplied
//! render instant) yield byte-identical PDFs.

pub mod compose;
pub mod draw;
pub mod error;
pub mod info_panel;
pub mod layout;
pub mod map_panel;

pub use compose::{compose_map_sheet, SheetMeta};
pub use error::SheetError;
