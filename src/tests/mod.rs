//! # Tests that require a look inside the crate.
//!
//! Each `problem_*` module solves one small problem completely, checking the intermediate results
//! of both methods as well as the reported outcome.
mod problem_3;
