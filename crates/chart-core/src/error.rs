// File: crates/chart-core/src/error.rs
// Summary: Error type for figure allocation, encoding and output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid dpi {0}: must be finite and positive")]
    InvalidDpi(f32),
    #[error("invalid figure size {width} x {height} px")]
    InvalidFigureSize { width: i32, height: i32 },
    #[error("failed to create {width} x {height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
