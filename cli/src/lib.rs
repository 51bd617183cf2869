//! somac - compile species anatomy definitions from the command line.

mod cli;
mod format;

pub use cli::{Cli, CliError};
pub use format::summary;
