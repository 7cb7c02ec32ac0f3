//! Baseline comparison
//!
//! This module classifies every watched path by comparing a fresh scan
//! against the trusted baseline.
//!
//! ## Components
//!
//! - `change_record`: the per-path classification and its log rendering
//! - `comparator`: the diff algorithm producing a `Report`

pub mod change_record;
pub mod comparator;
