//! # Number types
//!
//! The algorithms in this crate work with floating point numbers, and are generic over the precise
//! type through the traits in this module.
pub mod traits;
