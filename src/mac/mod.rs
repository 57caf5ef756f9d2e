//! MAC drivers: subkey derivation, padding, UHF invocation, finalization.
//!
//! `lemac`/`petitmac` are one-shot convenience functions; `LeMacKeySchedule`
//! and `PetitMacKeySchedule` split subkey derivation out so repeated calls
//! under the same key don't re-run the ~29 (LeMac) or ~17 (PetitMac) AES
//! encryptions spec.md's precomputation note calls for every time.

mod lemac;
mod petitmac;

pub use lemac::{lemac, lemac_slices, LeMacKeySchedule};
pub use petitmac::{petitmac, petitmac_slices, PetitMacKeySchedule};

use crate::aes::aes_enc_block;
use crate::Block;

/// A 16-byte block whose first byte is `i` and whose remaining 15 bytes
/// are zero, used exclusively as the plaintext input to `AES_enc(key, ·)`
/// for subkey derivation.
pub(crate) fn constant(i: u8) -> Block {
    let mut block = [0u8; 16];
    block[0] = i;
    block
}

pub(crate) fn xor(a: &Block, b: &Block) -> Block {
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = a[i] ^ b[i];
    }
    out
}

/// `AES_enc(key, constant(i))`, the building block every subkey and nonce
/// key is derived from.
pub(crate) fn derive_subkey(key: &Block, i: u8) -> Block {
    aes_enc_block(&constant(i), key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_layout() {
        let c = constant(5);
        assert_eq!(c[0], 5);
        assert!(c[1..].iter().all(|&b| b == 0));
    }
}
