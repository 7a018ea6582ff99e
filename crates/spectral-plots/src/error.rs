// File: crates/spectral-plots/src/error.rs

use thiserror::Error;

use crate::regression::RegressionError;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Chart(#[from] chart_core::ChartError),
    #[error("log-log regression failed")]
    Regression(#[from] RegressionError),
}
