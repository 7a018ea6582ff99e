// File: crates/spectral-plots/src/table.rs
// Summary: The fixed (t, E²) sample table shared by every chart.

use thiserror::Error;

/// Independent variable, ascending.
pub const T_VALUES: [f64; 6] = [100.0, 500.0, 1000.0, 5000.0, 8000.0, 10000.0];
/// Mean-square spectral error at each `T_VALUES` entry.
pub const E_SQUARED: [f64; 6] = [0.382, 0.157, 0.088, 0.021, 0.012, 0.009];

/// Built-in table.
pub const SAMPLE_TABLE: SampleTable<'static> = SampleTable { t: &T_VALUES, e_squared: &E_SQUARED };

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("column length mismatch: {t} t values vs {e_squared} E² values")]
    LengthMismatch { t: usize, e_squared: usize },
    #[error("sample table is empty")]
    Empty,
}

/// Paired columns of equal, non-zero length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleTable<'a> {
    t: &'a [f64],
    e_squared: &'a [f64],
}

impl<'a> SampleTable<'a> {
    pub fn new(t: &'a [f64], e_squared: &'a [f64]) -> Result<Self, TableError> {
        if t.len() != e_squared.len() {
            return Err(TableError::LengthMismatch { t: t.len(), e_squared: e_squared.len() });
        }
        if t.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { t, e_squared })
    }

    pub fn t(&self) -> &'a [f64] {
        self.t
    }

    pub fn e_squared(&self) -> &'a [f64] {
        self.e_squared
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// `(t, E²)` pairs in table order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.t.iter().copied().zip(self.e_squared.iter().copied()).collect()
    }
}
