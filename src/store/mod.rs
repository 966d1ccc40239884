//! Append-only JSON record stores
//!
//! Each lifecycle stage persists to an independent store: a JSON array of
//! flat records, rewritten wholesale on every append. A missing file is an
//! empty store; a malformed file is a corruption error.
//!
//! The read-entire-file -> mutate-in-memory -> rewrite-entire-file pattern
//! is only safe for a single writer in a single process. A concurrent
//! external writer to the same file is an unguarded hazard: nothing here
//! locks, retries or detects interleaved writes.

mod errors;
mod json_store;

pub use errors::{StoreError, StoreResult};
pub use json_store::JsonStore;
