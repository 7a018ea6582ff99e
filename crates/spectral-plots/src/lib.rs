// File: crates/spectral-plots/src/lib.rs
// Summary: Spectral error charts: sample table, log-log regression and PNG renderers.

pub mod charts;
pub mod error;
pub mod regression;
pub mod table;

pub use charts::{
    render_all, render_decay_chart, render_loglog_regression_chart, render_raw_chart,
    LOGLOG_REGRESSION_PNG, MEAN_SQUARE_ERROR_PNG, ZETA_SPECTRUM_PNG,
};
pub use error::PlotError;
pub use regression::{fit_linear, LinearFit, LogLogRegression, RegressionError};
pub use table::{SampleTable, TableError, SAMPLE_TABLE};
