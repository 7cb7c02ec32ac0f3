//! Checker command implementations
//!
//! Each command is implemented as a method on `Checker`:
//!
//! - `init`: hash the watch-list into a fresh baseline
//! - `check`: compare a fresh scan against the baseline
//! - `add`: append a path to the watch-list
//! - `remove`: drop a path from the watch-list

pub mod add;
pub mod check;
pub mod init;
pub mod remove;
