//! Lap aggregation and ranking.
//!
//! This module computes each driver's average and fastest lap from a
//! validated dataset, ranks the top drivers by average, and writes the
//! joined summary.

pub mod analyzer;
pub mod average;
pub mod fastest;
pub mod summary;
pub mod types;
pub mod utility;
