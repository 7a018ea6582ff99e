// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::error::ChartError;
use crate::figure::Figure;
use crate::geometry::RectF;
use crate::grid::tick_labels;
use crate::scale::PlotScales;
use crate::series::{LineDash, Marker, ReferenceLine, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{pt_to_px, FigureSize, Insets, BASE_DPI};
use crate::view::ViewState;

/// Tick count the axis locator aims for.
const TARGET_TICKS: usize = 6;
/// Gap between stacked layout elements, in points.
const PAD_PT: f32 = 4.0;
/// Outward tick mark length, in points.
const TICK_LEN_PT: f32 = 3.5;
/// Frame, tick and grid stroke width, in points.
const FRAME_PT: f32 = 0.8;
/// Legend handle length, in points.
const LEGEND_HANDLE_PT: f32 = 20.0;

/// Font sizes in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizes {
    pub title: f32,
    pub label: f32,
    pub tick: f32,
    pub legend: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self { title: 12.0, label: 10.0, tick: 10.0, legend: 10.0 }
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub figure: FigureSize,
    pub dpi: f32,
    pub fonts: FontSizes,
    pub theme: Theme,
    /// Fixed margins in logical units; derived from font sizes when `None`.
    pub insets: Option<Insets>,
    /// Titles, axis labels, tick labels and legend. Off gives font-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            figure: FigureSize::default(),
            dpi: BASE_DPI,
            fonts: FontSizes::default(),
            theme: Theme::paper(),
            insets: None,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Output raster size in device pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        self.figure.pixels(self.dpi)
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            reference_lines: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_grid: false,
            show_legend: false,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_reference_line(&mut self, line: ReferenceLine) {
        self.reference_lines.push(line);
    }

    /// Fit both axes to the content, padding each side by `margin` times the span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self).with_margin(margin).apply_to_chart(self);
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut figure = Figure::open(opts.figure, opts.dpi)?;
        self.draw(figure.canvas(), opts);
        figure.encode_png()
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<(), ChartError> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| ChartError::Io { path: parent.to_path_buf(), source })?;
        }
        std::fs::write(path, &bytes)
            .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), bytes = bytes.len(), "png written");
        Ok(())
    }

    /// Plot area for the given options, in logical units.
    pub fn plot_rect(&self, opts: &RenderOptions) -> RectF {
        let (w, h) = opts.figure.logical();
        let insets = opts.insets.unwrap_or_else(|| self.auto_insets(opts));
        RectF::inside(w, h, &insets)
    }

    /// Margins sized to fit title, axis labels and tick labels.
    /// Tick label widths are estimated from character counts so layout
    /// does not depend on which fonts are installed.
    fn auto_insets(&self, opts: &RenderOptions) -> Insets {
        let pad = pt_to_px(PAD_PT);
        let tick_len = pt_to_px(TICK_LEN_PT);
        let tick_px = pt_to_px(opts.fonts.tick);
        let label_px = pt_to_px(opts.fonts.label);
        let title_px = pt_to_px(opts.fonts.title);

        let y_chars = tick_labels(self.y_axis.min, self.y_axis.max, TARGET_TICKS)
            .iter()
            .map(|(_, s)| s.chars().count())
            .max()
            .unwrap_or(1);
        let x_last_chars = tick_labels(self.x_axis.min, self.x_axis.max, TARGET_TICKS)
            .last()
            .map(|(_, s)| s.chars().count())
            .unwrap_or(1);
        let char_w = tick_px * 0.62;

        let left = pad * 2.0 + label_px * 1.2 + pad + char_w * y_chars as f32 + pad + tick_len;
        let bottom = pad * 2.0 + label_px * 1.2 + pad + tick_px * 1.2 + pad + tick_len;
        let top = if self.title.is_some() { pad * 3.0 + title_px * 1.2 } else { pad * 3.0 };
        let right = pad * 3.0 + char_w * x_last_chars as f32 * 0.5;
        Insets::new(left.ceil() as u32, right.ceil() as u32, top.ceil() as u32, bottom.ceil() as u32)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = self.plot_rect(opts);
        let scales = PlotScales::new(&self.x_axis, &self.y_axis, plot);
        let x_ticks = tick_labels(self.x_axis.min, self.x_axis.max, TARGET_TICKS);
        let y_ticks = tick_labels(self.y_axis.min, self.y_axis.max, TARGET_TICKS);

        let mut fill = skia::Paint::default();
        fill.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &fill);

        if self.show_grid {
            draw_grid(canvas, plot, &scales, &x_ticks, &y_ticks, theme);
        }

        // Data, clipped to the plot frame
        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for r in &self.reference_lines {
            let y = scales.y.to_px(r.y);
            let paint = stroke_paint(r.color, r.stroke_width, r.dash);
            canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
        for (i, s) in self.series.iter().enumerate() {
            let color = s.style.color.unwrap_or_else(|| theme.cycle_color(i));
            if s.is_connected() {
                draw_line_series(canvas, &scales, s, color);
            }
            if let Some(marker) = s.style.marker {
                for &p in &s.data_xy {
                    draw_marker(canvas, scales.to_screen(p), marker, color);
                }
            }
        }
        canvas.restore();

        draw_frame(canvas, plot, &scales, &x_ticks, &y_ticks, theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            self.draw_text(canvas, &shaper, plot, &scales, &x_ticks, &y_ticks, opts);
            if self.show_legend {
                self.draw_legend(canvas, &shaper, plot, opts);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        plot: RectF,
        scales: &PlotScales,
        x_ticks: &[(f64, String)],
        y_ticks: &[(f64, String)],
        opts: &RenderOptions,
    ) {
        let theme = &opts.theme;
        let pad = pt_to_px(PAD_PT);
        let tick_len = pt_to_px(TICK_LEN_PT);
        let tick_px = pt_to_px(opts.fonts.tick);
        let label_px = pt_to_px(opts.fonts.label);
        let title_px = pt_to_px(opts.fonts.title);
        let (_, h) = opts.figure.logical();

        for (v, s) in x_ticks {
            let x = scales.x.to_px(*v);
            let baseline = plot.bottom + tick_len + pad + tick_px * 0.8;
            shaper.draw_centered(canvas, s, x, baseline, tick_px, theme.tick);
        }
        for (v, s) in y_ticks {
            let y = scales.y.to_px(*v);
            let right = plot.left - tick_len - pad;
            shaper.draw_right(canvas, s, right, y + tick_px * 0.35, tick_px, theme.tick);
        }

        if !self.x_axis.label.is_empty() {
            let baseline = h - pad * 2.0 - label_px * 0.2;
            shaper.draw_centered(canvas, &self.x_axis.label, plot.center_x(), baseline, label_px, theme.axis_label);
        }
        if !self.y_axis.label.is_empty() {
            let baseline = pad * 2.0 + label_px * 0.9;
            shaper.draw_vertical(canvas, &self.y_axis.label, baseline, plot.center_y(), label_px, theme.axis_label);
        }
        if let Some(title) = &self.title {
            let baseline = plot.top - pad * 2.0;
            shaper.draw_centered(canvas, title, plot.center_x(), baseline, title_px, theme.axis_label);
        }
    }

    /// Legend box in the upper-right corner of the plot area.
    fn draw_legend(&self, canvas: &skia::Canvas, shaper: &TextShaper, plot: RectF, opts: &RenderOptions) {
        let theme = &opts.theme;
        let entries = self.legend_entries(theme);
        if entries.is_empty() {
            return;
        }

        let pad = pt_to_px(PAD_PT);
        let text_px = pt_to_px(opts.fonts.legend);
        let handle = pt_to_px(LEGEND_HANDLE_PT);
        let row_h = text_px * 1.4;
        let text_w = entries
            .iter()
            .map(|e| shaper.measure_width(&e.label, text_px))
            .fold(0.0f32, f32::max);

        let box_w = pad + handle + pad + text_w + pad;
        let box_h = pad + row_h * entries.len() as f32 + pad * 0.5;
        let right = plot.right - pad * 2.0;
        let top = plot.top + pad * 2.0;
        let rect = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(theme.legend_background);
        canvas.draw_round_rect(rect, 3.0, 3.0, &bg);
        let mut frame = skia::Paint::default();
        frame.set_anti_alias(true);
        frame.set_style(skia::paint::Style::Stroke);
        frame.set_stroke_width(pt_to_px(FRAME_PT));
        frame.set_color(theme.legend_frame);
        canvas.draw_round_rect(rect, 3.0, 3.0, &frame);

        for (i, e) in entries.iter().enumerate() {
            let cy = top + pad + row_h * (i as f32 + 0.5);
            let x0 = rect.left + pad;
            let x1 = x0 + handle;
            if let Some((width, dash)) = e.stroke {
                let paint = stroke_paint(e.color, width, dash);
                canvas.draw_line((x0, cy), (x1, cy), &paint);
            }
            if let Some(marker) = e.marker {
                draw_marker(canvas, ((x0 + x1) * 0.5, cy), marker, e.color);
            }
            shaper.draw_left(canvas, &e.label, x1 + pad, cy + text_px * 0.35, text_px, theme.axis_label);
        }
    }

    /// Labelled series first, in insertion order, then labelled reference lines.
    pub fn legend_entries(&self, theme: &Theme) -> Vec<LegendEntry> {
        let series = self.series.iter().enumerate().filter_map(|(i, s)| {
            let label = s.label.clone()?;
            Some(LegendEntry {
                label,
                color: s.style.color.unwrap_or_else(|| theme.cycle_color(i)),
                stroke: s.is_connected().then_some((s.style.stroke_width, s.style.dash)),
                marker: s.style.marker,
            })
        });
        let refs = self.reference_lines.iter().filter_map(|r| {
            Some(LegendEntry {
                label: r.label.clone()?,
                color: r.color,
                stroke: Some((r.stroke_width, r.dash)),
                marker: None,
            })
        });
        series.chain(refs).collect()
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

/// One legend row: label plus the handle drawn next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
    /// Stroke width in points and dash, when the handle shows a line.
    pub stroke: Option<(f32, LineDash)>,
    pub marker: Option<Marker>,
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width_pt: f32, dash: LineDash) -> skia::Paint {
    let width = pt_to_px(width_pt);
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    if let Some(intervals) = dash.intervals(width) {
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectF,
    scales: &PlotScales,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(pt_to_px(FRAME_PT));

    // verticals
    for (v, _) in x_ticks {
        let x = scales.x.to_px(*v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    // horizontals
    for (v, _) in y_ticks {
        let y = scales.y.to_px(*v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    plot: RectF,
    scales: &PlotScales,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(pt_to_px(FRAME_PT));
    canvas.draw_rect(plot.to_skia(), &axis_paint);

    let tick_len = pt_to_px(TICK_LEN_PT);
    axis_paint.set_color(theme.tick);
    for (v, _) in x_ticks {
        let x = scales.x.to_px(*v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + tick_len), &axis_paint);
    }
    for (v, _) in y_ticks {
        let y = scales.y.to_px(*v);
        canvas.draw_line((plot.left - tick_len, y), (plot.left, y), &axis_paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, scales: &PlotScales, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut builder = skia::PathBuilder::new();
    builder.move_to(scales.to_screen(data[0]));
    for &p in data.iter().skip(1) {
        builder.line_to(scales.to_screen(p));
    }
    let path = builder.detach();

    let mut stroke = stroke_paint(color, series.style.stroke_width, series.style.dash);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &stroke);
}

fn draw_marker(canvas: &skia::Canvas, center: (f32, f32), marker: Marker, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    match marker {
        Marker::Circle { size } => {
            canvas.draw_circle(center, pt_to_px(size) * 0.5, &paint);
        }
    }
}
