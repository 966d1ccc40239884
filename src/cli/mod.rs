//! Command-line interface
//!
//! Commands:
//! - reserve: create a reservation, print the localizer
//! - arrival: check a guest in from a JSON request file, print the room key
//! - checkout: close a stay on its departure day

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
pub use io::{read_arrival_request, ArrivalRequest};
