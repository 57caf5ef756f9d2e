//! Keyless AES round and the `aes_modified` finalization permutation.
//!
//! These two primitives sit alongside standard AES-128 encryption
//! (`aes_core::aes_enc_block`) as the building blocks LeMac and PetitMac
//! actually need:
//!
//! - [`aes_round_no_key`] is a single `SubBytes -> ShiftRows -> MixColumns`
//!   round with **no** `AddRoundKey` at all. The UHF pipelines use this to
//!   advance each lane of internal state every chunk, injecting message and
//!   feedback material by XOR afterwards instead of through a key schedule.
//! - [`aes_modified`] is a 10-round AES-128-shaped permutation that takes 10
//!   externally supplied subkeys (not a key-scheduled key) and, unlike
//!   standard AES, omits the trailing `AddRoundKey` after its last round.
//!   Finalization applies it per-lane to mix the UHF's final state into the
//!   tag.
//!
//! Neither function is standard AES-128, and reusing a stock AES
//! implementation for either would silently produce wrong tags: the first
//! never adds a key, the second drops the final key addition.

use super::aes_core::{
    add_round_key, copy_block_to_state, copy_state_to_block, mix_columns, shift_rows, sub_bytes,
    AES_BLOCK_SIZE,
};

/// One AES round with no key addition: `SubBytes -> ShiftRows -> MixColumns`.
pub fn aes_round_no_key(block: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
    let mut state = copy_block_to_state(block);
    sub_bytes(&mut state);
    shift_rows(&mut state);
    mix_columns(&mut state);
    copy_state_to_block(&state)
}

/// The 10-round, externally-keyed permutation used by LeMac and PetitMac
/// finalization.
///
/// `subkeys` supplies exactly 10 round keys: `state = plaintext XOR
/// subkeys[0]`, then 10 rounds of `SubBytes; ShiftRows; MixColumns`, each
/// followed by `AddRoundKey(subkeys[j + 1])` for `j in 0..9` — the 10th
/// (final) round has no trailing key addition. This is AES-128 with the
/// key schedule replaced by a flat list of subkeys and the final-round key
/// addition removed; treat it as a keyed tweak permutation, not as AES.
///
/// # Panics
///
/// Panics if `subkeys` does not have exactly 10 elements.
pub fn aes_modified(
    plaintext: &[u8; AES_BLOCK_SIZE],
    subkeys: &[[u8; AES_BLOCK_SIZE]],
) -> [u8; AES_BLOCK_SIZE] {
    assert_eq!(subkeys.len(), 10, "aes_modified requires exactly 10 subkeys");

    let mut expanded_key = [0u8; 176];
    for (i, k) in subkeys.iter().enumerate() {
        expanded_key[i * 16..(i + 1) * 16].copy_from_slice(k);
    }

    let mut state = copy_block_to_state(plaintext);
    add_round_key(0, &mut state, &expanded_key);

    for round in 0..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        if round != 9 {
            add_round_key(round + 1, &mut state, &expanded_key);
        }
    }

    copy_state_to_block(&state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aes_round_no_key_is_not_identity() {
        let block = [0u8; AES_BLOCK_SIZE];
        let out = aes_round_no_key(&block);
        // SubBytes(0x00) = 0x63 for every byte; ShiftRows/MixColumns on a
        // uniform block is also uniform, so the all-zero block's image is
        // deterministic and non-trivial.
        assert_ne!(out, block);
    }

    #[test]
    fn test_aes_round_no_key_deterministic() {
        let block = [0x42u8; AES_BLOCK_SIZE];
        assert_eq!(aes_round_no_key(&block), aes_round_no_key(&block));
    }

    #[test]
    fn test_aes_modified_final_round_has_no_trailing_key() {
        // With all-zero subkeys, aes_modified should equal plain
        // (unkeyed) full AES rounds with no AddRoundKey at all, including
        // at round 0 and after the last round.
        let plaintext = [0x11u8; AES_BLOCK_SIZE];
        let zero_keys = vec![[0u8; AES_BLOCK_SIZE]; 10];
        let out = aes_modified(&plaintext, &zero_keys);

        let mut expected = plaintext;
        for _ in 0..10 {
            expected = aes_round_no_key(&expected);
        }
        assert_eq!(out, expected);
    }

    #[test]
    #[should_panic(expected = "exactly 10 subkeys")]
    fn test_aes_modified_requires_ten_subkeys() {
        let plaintext = [0u8; AES_BLOCK_SIZE];
        let too_few = vec![[0u8; AES_BLOCK_SIZE]; 9];
        let _ = aes_modified(&plaintext, &too_few);
    }
}
