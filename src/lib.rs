//! File integrity checker
//!
//! Hashes a user-maintained watch-list of files into a trusted baseline and
//! later compares fresh scans against it to detect tampering.
//!
//! - `areas`: persisted state (watch-list, baseline database, audit log) and
//!   the `Checker` that coordinates them
//! - `artifacts`: scan/compare data structures and algorithms
//! - `commands`: the `init`, `check`, `add` and `remove` commands

pub mod areas;
pub mod artifacts;
pub mod commands;
