//! Persisted checker state
//!
//! - `watch_list`: the user-maintained list of files to monitor
//! - `database`: the baseline and last-scan artifacts
//! - `audit_log`: the append-only, timestamped log
//! - `checker`: high-level coordination of the areas above

pub mod audit_log;
pub mod checker;
pub mod database;
pub mod watch_list;
