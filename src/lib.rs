//! Country directory: one authenticated fetch of the country list, then
//! region filtering, free-text search and incremental paging over it, in a
//! terminal UI or as plain command output.

pub mod cli;
pub mod config;
pub mod country;
pub mod loader;
pub mod logging;
pub mod plain;
pub mod ui;
