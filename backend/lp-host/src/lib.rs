pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;


pub use cli::{Cli, Commands, GroupCommands};
pub use error::{HostError, Result as HostErrorResult};
