//! CLI argument definitions using clap
//!
//! Commands:
//! - hotelier reserve --id-card ... --credit-card ... --name ... --phone ...
//!   --room-type ... --arrival ... --nights ...
//! - hotelier arrival --input <request.json>
//! - hotelier checkout --room-key ...

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hotelier - A strict, deterministic hotel reservation lifecycle manager
#[derive(Parser, Debug)]
#[command(name = "hotelier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the JSON store files
    #[arg(long, global = true, default_value = "./store")]
    pub data_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a reservation and print its localizer
    Reserve {
        /// National id, 8 digits + check letter
        #[arg(long)]
        id_card: String,

        /// Credit card number, 16 digits (Luhn-checked)
        #[arg(long)]
        credit_card: String,

        /// Guest name and surname
        #[arg(long)]
        name: String,

        /// Phone number, + followed by 9 digits
        #[arg(long)]
        phone: String,

        /// Room type: SINGLE, DOUBLE or SUITE
        #[arg(long)]
        room_type: String,

        /// Arrival date, dd/mm/yyyy
        #[arg(long)]
        arrival: String,

        /// Number of nights, 1-10
        #[arg(long)]
        nights: String,
    },

    /// Check a guest in from a JSON request file and print the room key
    Arrival {
        /// Request file holding `Localizer` and `IdCard`
        #[arg(long)]
        input: PathBuf,
    },

    /// Check a guest out of a room
    Checkout {
        /// Room key, 64 hex digits
        #[arg(long)]
        room_key: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
