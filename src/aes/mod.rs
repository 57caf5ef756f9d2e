//! AES-128 primitives: standard single-block encryption plus the two
//! non-standard building blocks (`aes_round_no_key`, `aes_modified`) the
//! UHF and finalization phases of LeMac/PetitMac are built from.

mod aes_core;
mod aes_round;

pub use aes_core::{aes_enc_block, AES_128_KEY_SIZE, AES_BLOCK_SIZE};
pub use aes_round::{aes_modified, aes_round_no_key};
