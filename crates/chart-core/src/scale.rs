// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-screen transforms for the X and Y axes of a plot area.

use crate::axis::Axis;
use crate::geometry::RectF;

/// Maps a data interval onto a pixel interval. The pixel interval may be
/// reversed (Y grows downward on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        let d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
        Self { d0, d1, p0, p1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.p0 + t as f32 * (self.p1 - self.p0)
    }
}

/// Pair of scales bound to one plot rectangle.
#[derive(Clone, Copy, Debug)]
pub struct PlotScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PlotScales {
    pub fn new(x_axis: &Axis, y_axis: &Axis, plot: RectF) -> Self {
        Self {
            x: LinearScale::new(x_axis.min, x_axis.max, plot.left, plot.right),
            y: LinearScale::new(y_axis.min, y_axis.max, plot.bottom, plot.top),
        }
    }

    #[inline]
    pub fn to_screen(&self, (x, y): (f64, f64)) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }
}
