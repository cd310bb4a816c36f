//! # `tarefas`
//!
//! A local to-do list with a calendar view, plus a small static file server
//! for hosting the front-end assets.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod paths;
pub mod request_log;
pub mod server;
pub mod storage;
pub mod tasks;
pub mod testing;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
