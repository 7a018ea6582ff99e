// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure sizes, dpi, paddings).

/// Resolution at which one logical layout unit equals one device pixel.
pub const BASE_DPI: f32 = 100.0;
/// Font sizes and stroke widths are expressed in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert points to logical layout units.
#[inline]
pub fn pt_to_px(pt: f32) -> f32 {
    pt * BASE_DPI / POINTS_PER_INCH
}

/// Physical figure size in inches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in }
    }

    /// Size in logical units (1/100 inch), independent of output dpi.
    pub fn logical(&self) -> (f32, f32) {
        (self.width_in * BASE_DPI, self.height_in * BASE_DPI)
    }

    /// Raster size in device pixels at `dpi`.
    pub fn pixels(&self, dpi: f32) -> (i32, i32) {
        (
            (self.width_in * dpi).round() as i32,
            (self.height_in * dpi).round() as i32,
        )
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(6.4, 4.8)
    }
}

/// Screen margins, in logical units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}
