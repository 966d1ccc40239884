//! Command dispatch
//!
//! Each command builds a manager over the configured stores, runs one
//! lifecycle operation, logs a structured event and prints the operation's
//! result on stdout.

use crate::config::StoreConfig;
use crate::manager::{HotelManager, ReservationRequest};
use crate::observability::{Logger, Severity};

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io;

/// Parses arguments and runs the selected command.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Runs one parsed command against the configured stores.
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = StoreConfig::at(cli.data_dir);
    let manager = HotelManager::new(&config);

    match cli.command {
        Command::Reserve {
            id_card,
            credit_card,
            name,
            phone,
            room_type,
            arrival,
            nights,
        } => {
            let request = ReservationRequest {
                id_card,
                credit_card,
                name_surname: name,
                phone_number: phone,
                room_type,
                arrival_date: arrival,
                num_days: nights,
            };
            let localizer = manager.reserve(&request)?;
            Logger::log(
                Severity::Info,
                "reservation_created",
                &[("localizer", localizer.as_str())],
            );
            println!("{}", localizer);
        }
        Command::Arrival { input } => {
            let request = io::read_arrival_request(&input)?;
            let room_key = manager.guest_arrival(&request.localizer, &request.id_card)?;
            Logger::log(
                Severity::Info,
                "guest_checked_in",
                &[
                    ("localizer", request.localizer.as_str()),
                    ("room_key", room_key.as_str()),
                ],
            );
            println!("{}", room_key);
        }
        Command::Checkout { room_key } => {
            manager.guest_checkout(&room_key)?;
            Logger::log(
                Severity::Info,
                "guest_checked_out",
                &[("room_key", room_key.as_str())],
            );
            println!("checkout complete");
        }
    }
    Ok(())
}
