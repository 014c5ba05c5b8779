//! Interactive terminal front end for the ordering session.

pub mod io;
pub mod nav;
pub mod output;
pub mod screens;
pub mod session;
pub mod shell;

pub use session::Session;
pub use shell::{run_cli, CliError};
