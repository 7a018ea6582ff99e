// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, Chart, Marker, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series with markers
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.set_title("Smoke");
    chart.show_grid = true;
    chart.show_legend = true;
    chart.add_series(
        Series::line(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
            .with_marker(Marker::circle())
            .with_label("data"),
    );

    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_replaces_existing_file() {
    let mut chart = Chart::new();
    chart.add_series(Series::scatter(vec![(0.0, 1.0), (1.0, 0.5)]));
    chart.autoscale_axes(0.05);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("scatter.png");
    std::fs::write(&out, b"stale").expect("seed file");

    chart.render_to_png(&opts, &out).expect("first render");
    let first = std::fs::read(&out).expect("read first");
    chart.render_to_png(&opts, &out).expect("second render");
    let second = std::fs::read(&out).expect("read second");

    assert!(first.starts_with(&[137, 80, 78, 71]));
    assert_eq!(first, second, "re-rendering must be deterministic");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
