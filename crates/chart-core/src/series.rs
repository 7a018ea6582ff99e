// File: crates/chart-core/src/series.rs
// Summary: Series model for connected lines and marker-only scatter data,
// plus horizontal reference lines.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,    // connected path, markers optional
    Scatter, // markers only
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
}

impl LineDash {
    /// On/off intervals for a stroke of `width`, or `None` for solid.
    pub fn intervals(&self, width: f32) -> Option<[f32; 2]> {
        match self {
            LineDash::Solid => None,
            LineDash::Dashed => Some([3.7 * width, 1.6 * width]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Marker {
    /// Filled circle; `size` is the diameter in points.
    Circle { size: f32 },
}

impl Marker {
    pub const fn circle() -> Self {
        Marker::Circle { size: 6.0 }
    }
}

/// Stroke and marker appearance. Widths are in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    /// Explicit color; the theme color cycle is used when `None`.
    pub color: Option<skia::Color>,
    pub stroke_width: f32,
    pub dash: LineDash,
    pub marker: Option<Marker>,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self { color: None, stroke_width: 1.5, dash: LineDash::Solid, marker: None }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub label: Option<String>,
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        let style = match series_type {
            SeriesType::Line => SeriesStyle::default(),
            SeriesType::Scatter => SeriesStyle { marker: Some(Marker::circle()), ..SeriesStyle::default() },
        };
        Self { series_type, label: None, data_xy: data, style }
    }

    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self::with_data(SeriesType::Line, data)
    }

    pub fn scatter(data: Vec<(f64, f64)>) -> Self {
        Self::with_data(SeriesType::Scatter, data)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width_pt: f32) -> Self {
        self.style.stroke_width = width_pt;
        self
    }

    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.style.dash = dash;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.style.marker = Some(marker);
        self
    }

    /// Whether the connecting path is drawn.
    pub fn is_connected(&self) -> bool {
        matches!(self.series_type, SeriesType::Line)
    }
}

/// Horizontal line at a fixed data `y`, spanning the full plot width.
#[derive(Clone, Debug)]
pub struct ReferenceLine {
    pub y: f64,
    pub label: Option<String>,
    pub color: skia::Color,
    pub stroke_width: f32,
    pub dash: LineDash,
}

impl ReferenceLine {
    pub fn horizontal(y: f64, color: skia::Color) -> Self {
        Self { y, label: None, color, stroke_width: 1.5, dash: LineDash::Solid }
    }

    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
