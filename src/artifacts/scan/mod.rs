//! File scanning
//!
//! A scan hashes every watch-list entry and records one result per path.
//!
//! ## Components
//!
//! - `digest`: validated 256-bit hex digests
//! - `scan_result`: the per-path outcome (digest, missing or error)
//! - `scan`: the path-keyed mapping and its on-disk line format
//! - `hasher`: the content hashing capability and its registry
//! - `engine`: parallel execution of a hasher over a watch-list
//! - `watch_entry`: a single watch-list path and its `~/` expansion

pub mod digest;
pub mod engine;
pub mod hasher;
pub mod scan;
pub mod scan_result;
pub mod watch_entry;

/// Length of a SHA-256 digest in hexadecimal format
pub const DIGEST_LENGTH: usize = 64;
