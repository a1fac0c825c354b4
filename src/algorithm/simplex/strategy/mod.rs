//! # Strategies
//!
//! Choices that don't affect the correctness of the Simplex method, only the path it takes.
pub mod pivot_rule;
