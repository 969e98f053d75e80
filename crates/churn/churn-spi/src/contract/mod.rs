//! Contract definitions for churn classifiers.
//!
//! This module contains trait definitions that model backends must implement.

mod classifier;

pub use classifier::Classifier;
