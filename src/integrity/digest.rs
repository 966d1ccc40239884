//! Hex digest helpers for identifier derivation
//!
//! The localizer uses a 128-bit digest (32 hex digits), the room key a
//! 256-bit digest (64 hex digits); the width difference plus the domain tag
//! in each signature payload keeps the two derivations structurally apart.

use md5::Md5;
use sha2::{Digest, Sha256};

/// Lowercase MD5 hex of the payload (32 hex digits).
pub fn md5_hex(payload: &str) -> String {
    to_hex(&Md5::digest(payload.as_bytes()))
}

/// Lowercase SHA-256 hex of the payload (64 hex digits).
pub fn sha256_hex(payload: &str) -> String {
    to_hex(&Sha256::digest(payload.as_bytes()))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
