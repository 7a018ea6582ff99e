// File: crates/spectral-plots/src/charts.rs
// Summary: The three chart render operations over the sample table.

use std::path::{Path, PathBuf};

use chart_core::{
    Axis, Chart, FigureSize, FontSizes, LineDash, Marker, ReferenceLine, RenderOptions, Series,
};
use skia_safe::Color;
use tracing::{info, info_span};

use crate::error::PlotError;
use crate::regression::LogLogRegression;
use crate::table::SampleTable;

pub const MEAN_SQUARE_ERROR_PNG: &str = "mean_square_error.png";
pub const ZETA_SPECTRUM_PNG: &str = "zeta_spectrum_collatz.png";
pub const LOGLOG_REGRESSION_PNG: &str = "loglog_regression.png";

const PUBLICATION_DPI: f32 = 300.0;
const SCREEN_DPI: f32 = 100.0;
/// Padding on each side of autoscaled axes, as a fraction of the data span.
const AXIS_MARGIN: f64 = 0.05;

const E_SQUARED_LABEL: &str = "|E(1/2 + it)|²";
const REFERENCE_RED: Color = Color::RED;

fn zero_line() -> ReferenceLine {
    ReferenceLine::horizontal(0.0, REFERENCE_RED).with_dash(LineDash::Dashed)
}

fn save(chart: &Chart, opts: &RenderOptions, out_dir: &Path, file_name: &str) -> Result<PathBuf, PlotError> {
    let path = out_dir.join(file_name);
    chart.render_to_png(opts, &path)?;
    let (width, height) = opts.pixel_size();
    info!(path = %path.display(), width, height, "chart saved");
    Ok(path)
}

/// E² against t as a marked line over a dashed zero line; 8x5 in at 300 dpi.
pub fn render_decay_chart(table: &SampleTable<'_>, out_dir: &Path) -> Result<PathBuf, PlotError> {
    let _span = info_span!("render", chart = "decay").entered();

    let mut chart = Chart::new();
    chart.set_title("Mean-Square Error Decay on Critical Line");
    chart.x_axis = Axis::new("t", 0.0, 1.0);
    chart.y_axis = Axis::new(E_SQUARED_LABEL, 0.0, 1.0);
    chart.show_grid = true;
    chart.show_legend = true;
    chart.add_series(
        Series::line(table.points())
            .with_marker(Marker::circle())
            .with_stroke_width(2.0)
            .with_label(E_SQUARED_LABEL),
    );
    chart.add_reference_line(zero_line());
    chart.autoscale_axes(AXIS_MARGIN);

    let opts = RenderOptions {
        figure: FigureSize::new(8.0, 5.0),
        dpi: PUBLICATION_DPI,
        ..RenderOptions::default()
    };
    save(&chart, &opts, out_dir, MEAN_SQUARE_ERROR_PNG)
}

/// Same data as the decay chart in blue, larger fonts, 10x6 in at screen dpi.
pub fn render_raw_chart(table: &SampleTable<'_>, out_dir: &Path) -> Result<PathBuf, PlotError> {
    let _span = info_span!("render", chart = "raw").entered();

    let mut chart = Chart::new();
    chart.set_title("Mean-Square Spectral Error on Critical Line");
    chart.x_axis = Axis::new("t", 0.0, 1.0);
    chart.y_axis = Axis::new(E_SQUARED_LABEL, 0.0, 1.0);
    chart.show_grid = true;
    chart.show_legend = true;
    chart.add_series(
        Series::line(table.points())
            .with_marker(Marker::circle())
            .with_color(Color::BLUE)
            .with_label(E_SQUARED_LABEL),
    );
    chart.add_reference_line(zero_line());
    chart.autoscale_axes(AXIS_MARGIN);

    let opts = RenderOptions {
        figure: FigureSize::new(10.0, 6.0),
        dpi: SCREEN_DPI,
        fonts: FontSizes { title: 16.0, label: 14.0, ..FontSizes::default() },
        ..RenderOptions::default()
    };
    save(&chart, &opts, out_dir, ZETA_SPECTRUM_PNG)
}

/// log10 E² against log10 t with its least-squares line; 8x5 in at 300 dpi.
/// Fails before drawing if any table value is not strictly positive.
pub fn render_loglog_regression_chart(table: &SampleTable<'_>, out_dir: &Path) -> Result<PathBuf, PlotError> {
    let _span = info_span!("render", chart = "loglog").entered();

    let regression = LogLogRegression::compute(table)?;
    info!(slope = regression.fit.slope, intercept = regression.fit.intercept, "log-log fit");

    let mut chart = Chart::new();
    chart.set_title("Log-Log Regression of Spectral Error");
    chart.x_axis = Axis::new("log₁₀(t)", 0.0, 1.0);
    chart.y_axis = Axis::new("log₁₀(|E|²)", 0.0, 1.0);
    chart.show_grid = true;
    chart.show_legend = true;
    chart.add_series(Series::scatter(regression.data_points()).with_label("Data"));
    chart.add_series(
        Series::line(regression.line_points())
            .with_color(REFERENCE_RED)
            .with_dash(LineDash::Dashed)
            .with_label(regression.fit_label()),
    );
    chart.autoscale_axes(AXIS_MARGIN);

    let opts = RenderOptions {
        figure: FigureSize::new(8.0, 5.0),
        dpi: PUBLICATION_DPI,
        ..RenderOptions::default()
    };
    save(&chart, &opts, out_dir, LOGLOG_REGRESSION_PNG)
}

/// Decay, raw and log-log charts in that order; stops at the first failure.
pub fn render_all(table: &SampleTable<'_>, out_dir: &Path) -> Result<Vec<PathBuf>, PlotError> {
    Ok(vec![
        render_decay_chart(table, out_dir)?,
        render_raw_chart(table, out_dir)?,
        render_loglog_regression_chart(table, out_dir)?,
    ])
}
