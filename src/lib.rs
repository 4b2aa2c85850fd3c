//! Retrodock - Retro game unit distribution and installation.
//!
//! Retrodock manages "units": zip-packaged games, boot runtimes, and agents,
//! each carrying a `header.yml` describing what it is. A unit is addressed
//! by bare id, direct URL, or local path; bare ids are resolved against an
//! ordered list of source repositories with per-source fallback. Installed
//! units live under per-type builtin directories and are read uniformly
//! whether stored as archive or directory.
//!
//! The main entry points are [`pull::pull`], [`reader::open`], and
//! [`list::list_units`]; the `retrodock` binary wraps them in a CLI.

pub mod cli;
pub mod download;
pub mod error;
pub mod header;
pub mod list;
pub mod paths;
pub mod platform;
pub mod pull;
pub mod reader;
pub mod source;
pub mod sources;
pub mod target;
pub mod ui;

pub use error::{Result, RetrodockError};
