//! Course filtering and GPA aggregation.
//!
//! This module applies the inclusion policy to transcript rows, converts
//! scores and letter grades into grade-points, and accumulates the
//! credit-weighted average with the degree-course multiplier.

pub mod aggregate;
pub mod grade;
pub mod types;
pub mod utility;
