//! Drift Detection Core
//!
//! Statistical tests, table loading and the column-by-column drift detector.
//!
//! - [`KolmogorovSmirnov`]: two-sample test for numeric columns
//! - [`ChiSquare`]: homogeneity test for categorical columns

mod chi_square;
mod detector;
mod ks;
mod samples;
mod table;

pub use chi_square::{chi_square_sf, gamma_q, ln_gamma, ChiSquare};
pub use detector::{detect_drift, detect_drift_or_empty, DriftDetector};
pub use ks::{
    kolmogorov_sf, ks_asymptotic_p_value, ks_exact_p_value, ks_statistic, KolmogorovSmirnov,
    EXACT_MAX_SAMPLE,
};
pub use table::Table;
