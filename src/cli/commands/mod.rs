//! CLI command implementations.

pub mod completions;
pub mod dispatcher;
pub mod info;
pub mod list;
pub mod pack;
pub mod pull;
pub mod rm;
pub mod unpack;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
