//! Integrity data structures and algorithms
//!
//! - `core`: configuration, error kinds and shared file helpers
//! - `scan`: digests, scan results, hashers and the parallel scan engine
//! - `compare`: baseline vs. scan comparison and change records

pub mod compare;
pub mod core;
pub mod scan;
