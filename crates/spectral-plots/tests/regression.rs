// File: crates/spectral-plots/tests/regression.rs
// Purpose: Least-squares fit and the log-log regression over the built-in table.

use spectral_plots::regression::log10_all;
use spectral_plots::{fit_linear, LogLogRegression, RegressionError, SampleTable, SAMPLE_TABLE};

#[test]
fn builtin_slope_shows_decay() {
    let r = LogLogRegression::compute(&SAMPLE_TABLE).expect("fit");
    assert!(r.fit.slope < 0.0, "E² must decay with t");
    assert!(r.fit.slope.abs() > 0.3 && r.fit.slope.abs() < 1.0, "slope {}", r.fit.slope);
    assert!((r.fit.slope + 0.8274).abs() < 1e-3);
    assert!((r.fit.intercept - 1.3413).abs() < 1e-3);
    assert_eq!(r.fit_label(), "Fit: slope = -0.83");
}

#[test]
fn fitted_line_is_evaluated_at_each_log_t() {
    let r = LogLogRegression::compute(&SAMPLE_TABLE).expect("fit");
    assert_eq!(r.log_t.len(), SAMPLE_TABLE.len());
    assert_eq!(r.fitted.len(), SAMPLE_TABLE.len());
    assert!((r.log_t[0] - 2.0).abs() < 1e-12);
    assert!((r.log_t[5] - 4.0).abs() < 1e-12);
    for (x, y) in r.line_points() {
        assert!((y - (r.fit.slope * x + r.fit.intercept)).abs() < 1e-12);
    }
    // residuals of an OLS fit sum to zero
    let resid: f64 = r.log_e.iter().zip(&r.fitted).map(|(a, b)| a - b).sum();
    assert!(resid.abs() < 1e-9);
}

#[test]
fn exact_line_is_recovered() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let ys = [1.0, 3.0, 5.0, 7.0];
    let fit = fit_linear(&xs, &ys).expect("fit");
    assert!((fit.slope - 2.0).abs() < 1e-12);
    assert!((fit.intercept - 1.0).abs() < 1e-12);
    assert!((fit.eval(10.0) - 21.0).abs() < 1e-12);
}

#[test]
fn degenerate_inputs_are_rejected() {
    assert_eq!(fit_linear(&[1.0], &[2.0]), Err(RegressionError::TooFewPoints(1)));
    assert_eq!(fit_linear(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]), Err(RegressionError::DegenerateX));
    assert_eq!(
        fit_linear(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(RegressionError::LengthMismatch { xs: 3, ys: 2 })
    );
}

#[test]
fn small_spread_x_still_fits() {
    let fit = fit_linear(&[0.0, 1e-9, 2e-9], &[0.0, 1.0, 2.0]).expect("tiny-magnitude x");
    assert!((fit.slope / 1e9 - 1.0).abs() < 1e-6, "slope {}", fit.slope);
    assert!(fit.intercept.abs() < 1e-6);

    let t = [1000.0, 1000.000001, 1000.000002];
    let e = [0.3, 0.2, 0.1];
    let table = SampleTable::new(&t, &e).expect("table");
    let r = LogLogRegression::compute(&table).expect("closely spaced t");
    assert!(r.fit.slope.is_finite() && r.fit.slope < 0.0, "slope {}", r.fit.slope);
}

#[test]
fn log_domain_is_strictly_positive() {
    assert!(matches!(
        log10_all(&[1.0, 0.0], "t"),
        Err(RegressionError::NonPositive { column: "t", index: 1, .. })
    ));
    assert!(matches!(
        log10_all(&[-5.0], "t"),
        Err(RegressionError::NonPositive { index: 0, .. })
    ));
    assert!(log10_all(&[f64::NAN], "t").is_err());

    let t = [0.0, 10.0];
    let e = [1.0, 0.1];
    let table = SampleTable::new(&t, &e).expect("table");
    assert!(matches!(
        LogLogRegression::compute(&table),
        Err(RegressionError::NonPositive { column: "t", index: 0, .. })
    ));
}
