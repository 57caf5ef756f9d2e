//! Precondition errors for the MAC entry points.
//!
//! The core has no I/O and no mid-computation failure modes: a call either
//! produces a 16-byte tag or is rejected at entry, before any subkey
//! schedule is derived or state allocated. `soft-aes` reports this kind of
//! error as a string-message `Box<dyn Error>`; this crate keeps that same
//! `std::error::Error` shape but as a small matchable enum, so callers that
//! need to distinguish "bad key" from "bad nonce" from "bad version" don't
//! have to parse a message.

use std::error::Error;
use std::fmt;

/// A precondition violation at a MAC entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacError {
    /// The supplied key was not exactly 16 bytes.
    InvalidKeyLength {
        /// The length a key must have (always 16).
        expected: usize,
        /// The length the caller actually supplied.
        actual: usize,
    },
    /// The supplied nonce was not exactly 16 bytes.
    InvalidNonceLength {
        /// The length a nonce must have (always 16).
        expected: usize,
        /// The length the caller actually supplied.
        actual: usize,
    },
    /// The requested LeMac version was neither 0 nor 1.
    UnsupportedVersion(u8),
}

impl fmt::Display for MacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacError::InvalidKeyLength { expected, actual } => write!(
                f,
                "MAC ERROR: invalid key length: expected {expected} bytes, got {actual} bytes"
            ),
            MacError::InvalidNonceLength { expected, actual } => write!(
                f,
                "MAC ERROR: invalid nonce length: expected {expected} bytes, got {actual} bytes"
            ),
            MacError::UnsupportedVersion(v) => {
                write!(f, "MAC ERROR: unsupported LeMac version: {v} (expected 0 or 1)")
            }
        }
    }
}

impl Error for MacError {}
