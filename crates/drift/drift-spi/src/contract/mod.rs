//! Contract definitions for drift detection.
//!
//! This module contains trait definitions that statistical tests must implement.


pub use distribution_test::DistributionTest;
