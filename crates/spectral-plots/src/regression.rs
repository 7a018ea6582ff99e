// File: crates/spectral-plots/src/regression.rs
// Summary: Ordinary least-squares line fit and the log10/log10 regression of E² on t.

use thiserror::Error;

use crate::table::SampleTable;

#[derive(Debug, Error, PartialEq)]
pub enum RegressionError {
    #[error("log10 undefined for {column} value {value} at index {index}")]
    NonPositive { column: &'static str, index: usize, value: f64 },
    #[error("a line fit needs at least two points, got {0}")]
    TooFewPoints(usize),
    #[error("x values have zero variance")]
    DegenerateX,
    #[error("length mismatch: {xs} x values vs {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },
}

/// `y = slope * x + intercept`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Least-squares degree-1 fit of `ys` on `xs`.
pub fn fit_linear(xs: &[f64], ys: &[f64]) -> Result<LinearFit, RegressionError> {
    if xs.len() != ys.len() {
        return Err(RegressionError::LengthMismatch { xs: xs.len(), ys: ys.len() });
    }
    if xs.len() < 2 {
        return Err(RegressionError::TooFewPoints(xs.len()));
    }
    if xs.iter().all(|&x| x == xs[0]) {
        return Err(RegressionError::DegenerateX);
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (sxx, sxy) = xs.iter().zip(ys).fold((0.0, 0.0), |(sxx, sxy), (x, y)| {
        let dx = x - mean_x;
        (sxx + dx * dx, sxy + dx * (y - mean_y))
    });
    // distinct x values can still underflow to a zero spread
    if sxx == 0.0 {
        return Err(RegressionError::DegenerateX);
    }

    let slope = sxy / sxx;
    Ok(LinearFit { slope, intercept: mean_y - slope * mean_x })
}

/// Base-10 logarithm of every value. Zero, negative and NaN inputs are errors.
pub fn log10_all(values: &[f64], column: &'static str) -> Result<Vec<f64>, RegressionError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value > 0.0 {
                Ok(value.log10())
            } else {
                Err(RegressionError::NonPositive { column, index, value })
            }
        })
        .collect()
}

/// Fit of `log10 E²` against `log10 t`, with the fit evaluated at each input.
#[derive(Clone, Debug, PartialEq)]
pub struct LogLogRegression {
    pub log_t: Vec<f64>,
    pub log_e: Vec<f64>,
    pub fit: LinearFit,
    pub fitted: Vec<f64>,
}

impl LogLogRegression {
    pub fn compute(table: &SampleTable<'_>) -> Result<Self, RegressionError> {
        let log_t = log10_all(table.t(), "t")?;
        let log_e = log10_all(table.e_squared(), "E²")?;
        let fit = fit_linear(&log_t, &log_e)?;
        let fitted = log_t.iter().map(|&x| fit.eval(x)).collect();
        Ok(Self { log_t, log_e, fit, fitted })
    }

    pub fn data_points(&self) -> Vec<(f64, f64)> {
        self.log_t.iter().copied().zip(self.log_e.iter().copied()).collect()
    }

    pub fn line_points(&self) -> Vec<(f64, f64)> {
        self.log_t.iter().copied().zip(self.fitted.iter().copied()).collect()
    }

    /// Legend text for the fit line, slope to two decimals.
    pub fn fit_label(&self) -> String {
        format!("Fit: slope = {:.2}", self.fit.slope)
    }
}
