//! The PetitMac MAC driver.

use super::{derive_subkey, xor};
use crate::aes::{aes_enc_block, aes_modified};
use crate::error::MacError;
use crate::padding::pad_01;
use crate::uhf::petitmac_uhf;
use crate::Block;

const KEY_SIZE: usize = 16;
const NONCE_SIZE: usize = 16;

/// The 1 init block, 15 finalization subkeys, and 2 nonce keys PetitMac
/// derives from a user key (spec.md §4.5). Pure function of the key, so
/// it is safe to derive once and reuse across every MAC computed under
/// that key.
#[derive(Clone)]
pub struct PetitMacKeySchedule {
    init_state: Block,
    final_keys: [Block; 15],
    nonce_key_1: Block,
    nonce_key_2: Block,
}

impl PetitMacKeySchedule {
    /// Derive the full PetitMac subkey schedule from a 16-byte key.
    pub fn derive(key: &Block) -> Self {
        let init_state = derive_subkey(key, 0);

        let mut final_keys = [[0u8; 16]; 15];
        for (j, block) in final_keys.iter_mut().enumerate() {
            *block = derive_subkey(key, 1 + j as u8);
        }

        let nonce_key_1 = derive_subkey(key, 16);
        let nonce_key_2 = derive_subkey(key, 17);

        PetitMacKeySchedule {
            init_state,
            final_keys,
            nonce_key_1,
            nonce_key_2,
        }
    }

    /// Compute the PetitMac tag for `message` under this schedule's key
    /// and a given `nonce`.
    pub fn mac(&self, nonce: &Block, message: &[u8]) -> Block {
        let mut padded = message.to_vec();
        pad_01(&mut padded, 16);

        let out = petitmac_uhf(self.init_state, &padded);

        let mut t = xor(nonce, &aes_enc_block(nonce, &self.nonce_key_1));
        let lanes = [out.state, out.r0, out.r1, out.r2, out.r3, out.r4];
        for (offset, lane) in lanes.iter().enumerate() {
            let lane_keys = &self.final_keys[offset..offset + 10];
            t = xor(&t, &aes_modified(lane, lane_keys));
        }

        aes_enc_block(&t, &self.nonce_key_2)
    }
}

/// Compute a PetitMac tag in one call, deriving the subkey schedule from
/// `key` internally.
///
/// For repeated calls under the same key, derive a [`PetitMacKeySchedule`]
/// once with [`PetitMacKeySchedule::derive`] and call
/// [`PetitMacKeySchedule::mac`] instead.
pub fn petitmac(key: &Block, nonce: &Block, message: &[u8]) -> Block {
    PetitMacKeySchedule::derive(key).mac(nonce, message)
}

/// Byte-slice entry point for callers (e.g. an FFI boundary) that cannot
/// enforce the 16-byte key/nonce lengths at the type level.
///
/// # Errors
///
/// Returns [`MacError::InvalidKeyLength`] or [`MacError::InvalidNonceLength`]
/// if `key` or `nonce` is not exactly 16 bytes.
pub fn petitmac_slices(key: &[u8], nonce: &[u8], message: &[u8]) -> Result<Block, MacError> {
    if key.len() != KEY_SIZE {
        return Err(MacError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        });
    }
    if nonce.len() != NONCE_SIZE {
        return Err(MacError::InvalidNonceLength {
            expected: NONCE_SIZE,
            actual: nonce.len(),
        });
    }

    let mut key_block = [0u8; KEY_SIZE];
    key_block.copy_from_slice(key);
    let mut nonce_block = [0u8; NONCE_SIZE];
    nonce_block.copy_from_slice(nonce);

    Ok(petitmac(&key_block, &nonce_block, message))
}
