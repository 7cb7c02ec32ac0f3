//! Core utilities and shared types
//!
//! This module contains the pieces every area depends on: the explicit
//! configuration struct, the error kinds surfaced to the user and the
//! atomic file writer.

pub mod atomic_file;
pub mod config;
pub mod errors;
