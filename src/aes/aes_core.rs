//! AES-128 Core Implementation
//!
//! This module provides the core AES-128 building blocks used throughout the
//! crate: standard single-block encryption (`aes_enc_block`), the individual
//! round transformations (`SubBytes`, `ShiftRows`, `MixColumns`,
//! `AddRoundKey`), and the key-expansion routine that produces round keys
//! from a 16-byte cipher key.
//!
//! The implementation follows a software-based approach, primarily utilizing
//! lookup tables for the S-box and GF(256) multiplication. It is not
//! optimized for high-performance hardware-accelerated use; it exists to
//! serve as a clear, auditable reference.
//!
//! Only the AES-128 key size is supported: every subkey and nonce key in
//! LeMac and PetitMac is itself a plain 16-byte AES key, and the MAC's own
//! key is always 16 bytes (see `crate::error::MacError::InvalidKeyLength`).
//! Decryption is not provided — neither MAC ever decrypts a block.
//!
//! # Notes
//! - The round keys are stored and managed using a fixed byte buffer instead
//!   of a multi-dimensional array as traditionally specified.
//! - The test vectors used in unit tests are sourced from
//!   https://www.cryptool.org/en/cto/aes-step-by-step.

// AES block size is fixed at 16 bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 uses a 16-byte key.
pub const AES_128_KEY_SIZE: usize = 16;

// Number of 32-bit words in an AES-128 key.
const NK: usize = 4;
// Number of encryption rounds for AES-128.
const NR: usize = 10;
// Number of columns comprising a state in AES.
const NB: usize = 4;

/// The S-box is a substitution box used in the SubBytes step of the AES
/// encryption process. It's a fixed (non-key-dependent) table used in the
/// byte substitution transformation of the AES algorithm. Each byte in the
/// state array is replaced with its corresponding value in the S-box. This
/// provides the non-linear transformation in the cipher, a critical
/// component for its security.
///
/// Note: These values are specific to the AES algorithm and part of its
/// standard specification.
const S_BOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

// The round constant word array, RCON[i], contains the values given by
// x to the power (i-1), x being {02}, in the field GF(2^8).
// Note that i starts at 1, not 0.
const RCON: [u8; 11] = [
    0x8D, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1B, 0x36,
];

/// `LOG_TABLE` is a lookup table used to perform multiplications in GF(256).
/// Each element represents the logarithm to the base generator of the
/// index, used together with `ALOG_TABLE` to perform finite-field
/// multiplication.
const LOG_TABLE: [u8; 256] = [
    0x00, 0x00, 0x19, 0x01, 0x32, 0x02, 0x1a, 0xc6, 0x4b, 0xc7, 0x1b, 0x68, 0x33, 0xee, 0xdf, 0x03,
    0x64, 0x04, 0xe0, 0x0e, 0x34, 0x8d, 0x81, 0xef, 0x4c, 0x71, 0x08, 0xc8, 0xf8, 0x69, 0x1c, 0xc1,
    0x7d, 0xc2, 0x1d, 0xb5, 0xf9, 0xb9, 0x27, 0x6a, 0x4d, 0xe4, 0xa6, 0x72, 0x9a, 0xc9, 0x09, 0x78,
    0x65, 0x2f, 0x8a, 0x05, 0x21, 0x0f, 0xe1, 0x24, 0x12, 0xf0, 0x82, 0x45, 0x35, 0x93, 0xda, 0x8e,
    0x96, 0x8f, 0xdb, 0xbd, 0x36, 0xd0, 0xce, 0x94, 0x13, 0x5c, 0xd2, 0xf1, 0x40, 0x46, 0x83, 0x38,
    0x66, 0xdd, 0xfd, 0x30, 0xbf, 0x06, 0x8b, 0x62, 0xb3, 0x25, 0xe2, 0x98, 0x22, 0x88, 0x91, 0x10,
    0x7e, 0x6e, 0x48, 0xc3, 0xa3, 0xb6, 0x1e, 0x42, 0x3a, 0x6b, 0x28, 0x54, 0xfa, 0x85, 0x3d, 0xba,
    0x2b, 0x79, 0x0a, 0x15, 0x9b, 0x9f, 0x5e, 0xca, 0x4e, 0xd4, 0xac, 0xe5, 0xf3, 0x73, 0xa7, 0x57,
    0xaf, 0x58, 0xa8, 0x50, 0xf4, 0xea, 0xd6, 0x74, 0x4f, 0xae, 0xe9, 0xd5, 0xe7, 0xe6, 0xad, 0xe8,
    0x2c, 0xd7, 0x75, 0x7a, 0xeb, 0x16, 0x0b, 0xf5, 0x59, 0xcb, 0x5f, 0xb0, 0x9c, 0xa9, 0x51, 0xa0,
    0x7f, 0x0c, 0xf6, 0x6f, 0x17, 0xc4, 0x49, 0xec, 0xd8, 0x43, 0x1f, 0x2d, 0xa4, 0x76, 0x7b, 0xb7,
    0xcc, 0xbb, 0x3e, 0x5a, 0xfb, 0x60, 0xb1, 0x86, 0x3b, 0x52, 0xa1, 0x6c, 0xaa, 0x55, 0x29, 0x9d,
    0x97, 0xb2, 0x87, 0x90, 0x61, 0xbe, 0xdc, 0xfc, 0xbc, 0x95, 0xcf, 0xcd, 0x37, 0x3f, 0x5b, 0xd1,
    0x53, 0x39, 0x84, 0x3c, 0x41, 0xa2, 0x6d, 0x47, 0x14, 0x2a, 0x9e, 0x5d, 0x56, 0xf2, 0xd3, 0xab,
    0x44, 0x11, 0x92, 0xd9, 0x23, 0x20, 0x2e, 0x89, 0xb4, 0x7c, 0xb8, 0x26, 0x77, 0x99, 0xe3, 0xa5,
    0x67, 0x4a, 0xed, 0xde, 0xc5, 0x31, 0xfe, 0x18, 0x0d, 0x63, 0x8c, 0x80, 0xc0, 0xf7, 0x70, 0x07,
];

/// `ALOG_TABLE` (antilog table) is a lookup table used for exponentiation in
/// GF(256). Each element represents the generator raised to the power equal
/// to the index.
const ALOG_TABLE: [u8; 256] = [
    0x01, 0x03, 0x05, 0x0f, 0x11, 0x33, 0x55, 0xff, 0x1a, 0x2e, 0x72, 0x96, 0xa1, 0xf8, 0x13, 0x35,
    0x5f, 0xe1, 0x38, 0x48, 0xd8, 0x73, 0x95, 0xa4, 0xf7, 0x02, 0x06, 0x0a, 0x1e, 0x22, 0x66, 0xaa,
    0xe5, 0x34, 0x5c, 0xe4, 0x37, 0x59, 0xeb, 0x26, 0x6a, 0xbe, 0xd9, 0x70, 0x90, 0xab, 0xe6, 0x31,
    0x53, 0xf5, 0x04, 0x0c, 0x14, 0x3c, 0x44, 0xcc, 0x4f, 0xd1, 0x68, 0xb8, 0xd3, 0x6e, 0xb2, 0xcd,
    0x4c, 0xd4, 0x67, 0xa9, 0xe0, 0x3b, 0x4d, 0xd7, 0x62, 0xa6, 0xf1, 0x08, 0x18, 0x28, 0x78, 0x88,
    0x83, 0x9e, 0xb9, 0xd0, 0x6b, 0xbd, 0xdc, 0x7f, 0x81, 0x98, 0xb3, 0xce, 0x49, 0xdb, 0x76, 0x9a,
    0xb5, 0xc4, 0x57, 0xf9, 0x10, 0x30, 0x50, 0xf0, 0x0b, 0x1d, 0x27, 0x69, 0xbb, 0xd6, 0x61, 0xa3,
    0xfe, 0x19, 0x2b, 0x7d, 0x87, 0x92, 0xad, 0xec, 0x2f, 0x71, 0x93, 0xae, 0xe9, 0x20, 0x60, 0xa0,
    0xfb, 0x16, 0x3a, 0x4e, 0xd2, 0x6d, 0xb7, 0xc2, 0x5d, 0xe7, 0x32, 0x56, 0xfa, 0x15, 0x3f, 0x41,
    0xc3, 0x5e, 0xe2, 0x3d, 0x47, 0xc9, 0x40, 0xc0, 0x5b, 0xed, 0x2c, 0x74, 0x9c, 0xbf, 0xda, 0x75,
    0x9f, 0xba, 0xd5, 0x64, 0xac, 0xef, 0x2a, 0x7e, 0x82, 0x9d, 0xbc, 0xdf, 0x7a, 0x8e, 0x89, 0x80,
    0x9b, 0xb6, 0xc1, 0x58, 0xe8, 0x23, 0x65, 0xaf, 0xea, 0x25, 0x6f, 0xb1, 0xc8, 0x43, 0xc5, 0x54,
    0xfc, 0x1f, 0x21, 0x63, 0xa5, 0xf4, 0x07, 0x09, 0x1b, 0x2d, 0x77, 0x99, 0xb0, 0xcb, 0x46, 0xca,
    0x45, 0xcf, 0x4a, 0xde, 0x79, 0x8b, 0x86, 0x91, 0xa8, 0xe3, 0x3e, 0x42, 0xc6, 0x51, 0xf3, 0x0e,
    0x12, 0x36, 0x5a, 0xee, 0x29, 0x7b, 0x8d, 0x8c, 0x8f, 0x8a, 0x85, 0x94, 0xa7, 0xf2, 0x0d, 0x17,
    0x39, 0x4b, 0xdd, 0x7c, 0x84, 0x97, 0xa2, 0xfd, 0x1c, 0x24, 0x6c, 0xb4, 0xc7, 0x52, 0xf6, 0x01,
];

/// Multiply two elements of GF(256).
///
/// Required by the MixColumns transformation. Uses precomputed log and
/// antilog tables to perform the multiplication in the finite field.
fn mul(a: u8, b: u8) -> u8 {
    if a != 0 && b != 0 {
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        let log_sum = (log_a + log_b) % 255;
        ALOG_TABLE[log_sum]
    } else {
        0
    }
}

/// Expand a 16-byte AES-128 key into a buffer of round keys.
///
/// # Returns
///
/// A `[u8; 176]` array containing the 11 round keys (16 bytes each)
/// produced by the AES-128 key schedule.
pub(crate) fn expand_key(key: &[u8; AES_128_KEY_SIZE]) -> [u8; 176] {
    let mut expanded_key = [0u8; 176];
    let mut temp = [0u8; 4];

    expanded_key[0..16].copy_from_slice(key);

    let mut i = NK;
    while i < NB * (NR + 1) {
        for j in 0..4 {
            temp[j] = expanded_key[(i - 1) * 4 + j];
        }

        if i % NK == 0 {
            let k = temp[0];
            temp.rotate_left(1);
            temp[3] = k;

            for j in 0..4 {
                temp[j] = S_BOX[temp[j] as usize];
            }

            temp[0] ^= RCON[i / NK];
        }

        for j in 0..4 {
            expanded_key[i * 4 + j] = expanded_key[(i - NK) * 4 + j] ^ temp[j];
        }
        i += 1;
    }
    expanded_key
}

/// Add a round key to the state using an XOR operation.
///
/// The state is modified in place by XORing it with the round key at
/// `round` from the expanded key buffer.
pub(crate) fn add_round_key(round: usize, state: &mut [[u8; 4]; 4], expanded_key: &[u8; 176]) {
    for i in 0..4 {
        for j in 0..4 {
            state[j][i] ^= expanded_key[round * NB * 4 + i * NB + j];
        }
    }
}

/// Perform the SubBytes transformation: each byte is replaced by its
/// corresponding value in the S-box, the non-linear step of the cipher.
pub(crate) fn sub_bytes(state: &mut [[u8; 4]; 4]) {
    for i in 0..4 {
        for j in 0..4 {
            state[i][j] = S_BOX[state[i][j] as usize];
        }
    }
}

/// Perform the ShiftRows transformation: cyclically shift each row of the
/// state matrix to the left, by an offset equal to the row index.
pub(crate) fn shift_rows(state: &mut [[u8; 4]; 4]) {
    let temp = state[1][0];
    state[1][0] = state[1][1];
    state[1][1] = state[1][2];
    state[1][2] = state[1][3];
    state[1][3] = temp;

    let temp = state[2][0];
    state[2][0] = state[2][2];
    state[2][2] = temp;

    let temp = state[2][1];
    state[2][1] = state[2][3];
    state[2][3] = temp;

    let temp = state[3][0];
    state[3][0] = state[3][3];
    state[3][3] = state[3][2];
    state[3][2] = state[3][1];
    state[3][1] = temp;
}

/// Perform the MixColumns transformation: each column is transformed using
/// a fixed polynomial over GF(256).
pub(crate) fn mix_columns(state: &mut [[u8; 4]; 4]) {
    for i in 0..4 {
        let t = state[0][i];
        let tmp = state[0][i] ^ state[1][i] ^ state[2][i] ^ state[3][i];

        let mut tm = state[0][i] ^ state[1][i];
        tm = mul(tm, 2);
        state[0][i] ^= tm ^ tmp;

        tm = state[1][i] ^ state[2][i];
        tm = mul(tm, 2);
        state[1][i] ^= tm ^ tmp;

        tm = state[2][i] ^ state[3][i];
        tm = mul(tm, 2);
        state[2][i] ^= tm ^ tmp;

        tm = state[3][i] ^ t;
        tm = mul(tm, 2);
        state[3][i] ^= tm ^ tmp;
    }
}

/// Copy a 16-byte block into a 4x4 column-major state array.
pub(crate) fn copy_block_to_state(block: &[u8; AES_BLOCK_SIZE]) -> [[u8; 4]; 4] {
    let mut state = [[0u8; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            state[j][i] = block[i * 4 + j];
        }
    }

    state
}

/// Copy a 4x4 column-major state array into a 16-byte block.
pub(crate) fn copy_state_to_block(state: &[[u8; 4]; 4]) -> [u8; AES_BLOCK_SIZE] {
    let mut block = [0u8; AES_BLOCK_SIZE];

    for i in 0..4 {
        for j in 0..4 {
            block[i * 4 + j] = state[j][i];
        }
    }

    block
}

/// Encrypt a single 16-byte block using AES-128.
///
/// This is the standard AES-128 block cipher, used as-is (the final round
/// keeps its `AddRoundKey`) for subkey derivation and nonce masking. It is
/// distinct from [`super::aes_round_no_key`] (a single keyless round) and
/// [`super::aes_modified`] (the 10-round, externally-keyed permutation used
/// in finalization) — see those functions for where AES-128 proper is
/// deliberately *not* what's needed.
pub fn aes_enc_block(
    block: &[u8; AES_BLOCK_SIZE],
    key: &[u8; AES_128_KEY_SIZE],
) -> [u8; AES_BLOCK_SIZE] {
    let mut state = copy_block_to_state(block);
    let expanded_key = expand_key(key);

    add_round_key(0, &mut state, &expanded_key);

    for round in 1..NR {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(round, &mut state, &expanded_key);
    }

    // Final round (without mix_columns).
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(NR, &mut state, &expanded_key);

    copy_state_to_block(&state)
}
