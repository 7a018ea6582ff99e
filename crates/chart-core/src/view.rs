// File: crates/chart-core/src/view.rs
// Visible data ranges derived from chart content, used for autoscaling.

use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Tight bounds over all series points and reference lines.
    /// Reference lines contribute to Y only.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        for r in &chart.reference_lines {
            y_min = y_min.min(r.y);
            y_max = y_max.max(r.y);
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            y_min = 0.0;
            y_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        Self { x_min, x_max, y_min, y_max }
    }

    /// Pad each side of both ranges by `margin` times the span.
    pub fn with_margin(self, margin: f64) -> Self {
        let mx = (self.x_max - self.x_min) * margin;
        let my = (self.y_max - self.y_min) * margin;
        Self {
            x_min: self.x_min - mx,
            x_max: self.x_max + mx,
            y_min: self.y_min - my,
            y_max: self.y_max + my,
        }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
