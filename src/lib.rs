//! hotelier - A strict, deterministic hotel reservation lifecycle manager
//!
//! The lifecycle runs Reservation -> Stay -> Checkout. Each stage persists
//! to its own append-only JSON store; stage transitions are gated on
//! content-derived identifiers, ownership and calendar-date equality.

pub mod cli;
pub mod config;
pub mod integrity;
pub mod manager;
pub mod model;
pub mod observability;
pub mod store;
pub mod validation;
