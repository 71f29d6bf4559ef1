//! Bbox-to-panel fit
//!
//! Maps geodetic bounds into a page panel with uniform scale, the
//! polygon centered on the leftover axis and Y flipped (page
//! coordinates grow downward, latitude grows northward).

use crate::error::ProjectionError;
use crate::normalize::GeoBounds;

/// Fraction of each axis range added on both sides before fitting, so
/// the polygon never touches the panel border.
pub const DEFAULT_PADDING: f64 = 0.15;

#[derive(Debug, Clone, Copy)]
pub struct PanelTransform {
    /// Points per degree; same on both axes.
    pub scale: f64,
    /// Bounds after symmetric padding; grid ticks sample these.
    pub padded: GeoBounds,
    origin_x: f64,
    origin_y: f64,
}

impl PanelTransform {
    /// Fit `bbox` into a `panel_width` x `panel_height` region.
    ///
    /// The limiting axis determines the scale; the other axis is
    /// centered in the leftover space.
    pub fn fit(
        bbox: &GeoBounds,
        panel_width: f64,
        panel_height: f64,
        padding_fraction: f64,
    ) -> Result<Self, ProjectionError> {
        let pad_lon = bbox.lon_range() * padding_fraction;
        let pad_lat = bbox.lat_range() * padding_fraction;
        let padded = GeoBounds {
            min_lon: bbox.min_lon - pad_lon,
            max_lon: bbox.max_lon + pad_lon,
            min_lat: bbox.min_lat - pad_lat,
            max_lat: bbox.max_lat + pad_lat,
        };

        let lon_range = padded.lon_range();
        let lat_range = padded.lat_range();
        if lon_range <= 1e-12 || lat_range <= 1e-12 {
            return Err(ProjectionError::ZeroRange);
        }

        let scale = (panel_width / lon_range).min(panel_height / lat_range);
        let origin_x = (panel_width - lon_range * scale) / 2.0;
        let origin_y = (panel_height + lat_range * scale) / 2.0;

        Ok(Self { scale, padded, origin_x, origin_y })
    }

    /// Project a coordinate to (x, y) relative to the panel's top-left
    /// corner.
    pub fn apply(&self, lon: f64, lat: f64) -> (f64, f64) {
        let x = self.origin_x + (lon - self.padded.min_lon) * self.scale;
        let y = self.origin_y - (lat - self.padded.min_lat) * self.scale;
        (x, y)
    }
}
