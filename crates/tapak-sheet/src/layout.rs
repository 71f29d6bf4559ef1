//! Page geometry
//!
//! All layout constants for the canonical sheet, named in one place.
//! Page coordinates here grow downward from the top-left corner, like
//! the drawing code; conversion to PDF user space happens in `draw`.

/// A3 landscape at 72 dpi (420mm x 297mm).
pub const PAGE_W: f64 = 1191.0;
pub const PAGE_H: f64 = 842.0;

pub const PAGE_MARGIN: f64 = 20.0;

/// Map panel width; the information panel takes the rest of the page
/// minus margins.
pub const MAP_PANEL_W: f64 = 820.0;

/// Inset between the map border and the grid border, reserved for the
/// coordinate tick labels.
pub const GRID_MARGIN: f64 = 40.0;

/// Grid lines per axis inside the map frame.
pub const GRID_STEPS: usize = 10;

/// Tick label intervals per axis (labels at 0..=TICK_STEPS).
pub const TICK_STEPS: usize = 4;

/// Information panel band heights as fractions of the panel height.
/// The footer takes whatever remains.
pub const TITLE_BAND_FRACTION: f64 = 0.12;
pub const TECH_BAND_FRACTION: f64 = 0.13;
pub const LEGEND_BAND_FRACTION: f64 = 0.35;
pub const INSET_BAND_FRACTION: f64 = 0.25;

/// Leading ring vertices listed in the coordinate table.
pub const VERTEX_TABLE_ROWS: usize = 4;

/// Two-segment scale bar, 1 km total at the nominal sheet scale.
pub const SCALE_BAR_W: f64 = 100.0;
pub const SCALE_BAR_H: f64 = 8.0;

#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Split a horizontal band of the given height off the top.
    pub fn take_band(&mut self, height: f64) -> Rect {
        let band = Rect::new(self.x, self.y, self.w, height);
        self.y += height;
        self.h -= height;
        band
    }

    /// Shrink uniformly on all sides.
    pub fn inset(&self, by: f64) -> Rect {
        Rect::new(self.x + by, self.y + by, self.w - 2.0 * by, self.h - 2.0 * by)
    }
}

/// The map panel region of the sheet.
pub fn map_panel_rect() -> Rect {
    Rect::new(PAGE_MARGIN, PAGE_MARGIN, MAP_PANEL_W, PAGE_H - 2.0 * PAGE_MARGIN)
}

/// The information panel region to the right of the map.
pub fn info_panel_rect() -> Rect {
    let x = PAGE_MARGIN + MAP_PANEL_W + PAGE_MARGIN;
    Rect::new(x, PAGE_MARGIN, PAGE_W - x - PAGE_MARGIN, PAGE_H - 2.0 * PAGE_MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_tile_the_page() {
        let map = map_panel_rect();
        let info = info_panel_rect();
        assert!(map.x + map.w + PAGE_MARGIN <= info.x + 1e-9);
        assert!((info.x + info.w + PAGE_MARGIN - PAGE_W).abs() < 1e-9);
        assert_eq!(map.h, info.h);
    }

    #[test]
    fn band_fractions_leave_room_for_the_footer() {
        let used = TITLE_BAND_FRACTION + TECH_BAND_FRACTION + LEGEND_BAND_FRACTION + INSET_BAND_FRACTION;
        assert!(used < 1.0);
    }

    #[test]
    fn take_band_consumes_from_the_top() {
        let mut r = Rect::new(0.0, 10.0, 100.0, 100.0);
        let band = r.take_band(25.0);
        assert_eq!(band.y, 10.0);
        assert_eq!(band.h, 25.0);
        assert_eq!(r.y, 35.0);
        assert_eq!(r.h, 75.0);
    }
}
