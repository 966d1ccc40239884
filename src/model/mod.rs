//! Persisted record types for the three lifecycle stages
//!
//! Records are immutable once written; a stage transition appends a new
//! record to the next store rather than mutating the previous one.

mod checkout;
mod reservation;
mod stay;

pub use checkout::CheckoutRecord;
pub use reservation::{Reservation, RoomType};
pub use stay::Stay;
