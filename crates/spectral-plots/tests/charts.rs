// File: crates/spectral-plots/tests/charts.rs
// Purpose: End-to-end rendering of the three charts into a scratch directory.

use spectral_plots::{
    render_all, render_decay_chart, render_loglog_regression_chart, render_raw_chart, PlotError,
    RegressionError, SampleTable, LOGLOG_REGRESSION_PNG, MEAN_SQUARE_ERROR_PNG, SAMPLE_TABLE,
    ZETA_SPECTRUM_PNG,
};

fn non_empty_png(path: &std::path::Path) {
    let bytes = std::fs::read(path).expect("output exists");
    assert!(!bytes.is_empty(), "{} is empty", path.display());
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "{} is not a PNG", path.display());
}

#[test]
fn decay_chart_is_written_at_300_dpi() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = render_decay_chart(&SAMPLE_TABLE, dir.path()).expect("render decay chart");
    assert_eq!(path, dir.path().join(MEAN_SQUARE_ERROR_PNG));
    non_empty_png(&path);
    assert_eq!(image::image_dimensions(&path).expect("dimensions"), (2400, 1500));
}

#[test]
fn raw_chart_is_written_at_default_dpi() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = render_raw_chart(&SAMPLE_TABLE, dir.path()).expect("render raw chart");
    assert_eq!(path, dir.path().join(ZETA_SPECTRUM_PNG));
    non_empty_png(&path);
    assert_eq!(image::image_dimensions(&path).expect("dimensions"), (1000, 600));
}

#[test]
fn loglog_chart_is_written_at_300_dpi() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = render_loglog_regression_chart(&SAMPLE_TABLE, dir.path()).expect("render loglog chart");
    assert_eq!(path, dir.path().join(LOGLOG_REGRESSION_PNG));
    non_empty_png(&path);
    assert_eq!(image::image_dimensions(&path).expect("dimensions"), (2400, 1500));
}

#[test]
fn render_all_writes_three_files_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = render_all(&SAMPLE_TABLE, dir.path()).expect("render all");
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![MEAN_SQUARE_ERROR_PNG, ZETA_SPECTRUM_PNG, LOGLOG_REGRESSION_PNG]);
    for p in &paths {
        non_empty_png(p);
    }
}

#[test]
fn rerendering_overwrites_the_same_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first_path = render_raw_chart(&SAMPLE_TABLE, dir.path()).expect("first render");
    let first = std::fs::read(&first_path).expect("read first");
    let second_path = render_raw_chart(&SAMPLE_TABLE, dir.path()).expect("second render");
    let second = std::fs::read(&second_path).expect("read second");

    assert_eq!(first_path, second_path);
    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn zero_error_value_fails_loglog_without_output() {
    let t = [100.0, 500.0, 1000.0];
    let e = [0.382, 0.0, 0.088];
    let table = SampleTable::new(&t, &e).expect("valid table");
    let dir = tempfile::tempdir().expect("tempdir");

    let err = render_loglog_regression_chart(&table, dir.path()).unwrap_err();
    match err {
        PlotError::Regression(RegressionError::NonPositive { column, index, value }) => {
            assert_eq!(column, "E²");
            assert_eq!(index, 1);
            assert_eq!(value, 0.0);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join(LOGLOG_REGRESSION_PNG).exists());
}

#[test]
fn negative_error_value_fails_loglog() {
    let t = [100.0, 500.0];
    let e = [0.382, -0.157];
    let table = SampleTable::new(&t, &e).expect("valid table");
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        render_loglog_regression_chart(&table, dir.path()),
        Err(PlotError::Regression(RegressionError::NonPositive { index: 1, .. }))
    ));

    // The linear charts have no log domain and still render.
    render_decay_chart(&table, dir.path()).expect("decay chart");
}
