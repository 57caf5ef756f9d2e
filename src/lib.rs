//! Reference core of the LeMac (v0/v1) and PetitMac AES-round-based MACs.
//!
//! Both constructions are nonce-based message authentication codes built
//! entirely from AES-128 primitives: a "universal hash function" phase that
//! absorbs the message through unkeyed AES rounds into a lane of internal
//! state, followed by a finalization phase that folds that state through a
//! 10-round AES-shaped permutation keyed with subkeys derived from the MAC
//! key. See [`mac::lemac`] and [`mac::petitmac`] for the two entry points.
//!
//! ```
//! use lemac_petitmac::{lemac, LeMacVersion};
//!
//! let key = [0u8; 16];
//! let nonce = [0u8; 16];
//! let tag = lemac(&key, &nonce, b"authenticate me", LeMacVersion::V1);
//! assert_eq!(tag.len(), 16);
//! ```

pub mod aes;
pub mod error;
pub mod mac;
pub mod padding;
pub mod uhf;

/// A 16-byte AES block: the unit every key, nonce, internal state lane, and
/// tag is expressed in throughout this crate.
pub type Block = [u8; 16];

pub use error::MacError;
pub use mac::{
    lemac, lemac_slices, petitmac, petitmac_slices, LeMacKeySchedule, PetitMacKeySchedule,
};
pub use uhf::LeMacVersion;
