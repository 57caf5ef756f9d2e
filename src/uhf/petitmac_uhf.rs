//! PetitMac's Universal Hash Function.
//!
//! A single lane of keyless-AES-round state absorbs one message block at a
//! time, with a 5-stage feedback delay line (`R0..R4`) that finalization
//! later mixes back in directly (PetitMac drains its delay line through
//! the finalization lanes, not through trailing zero chunks the way LeMac
//! does).

use crate::aes::aes_round_no_key;
use crate::uhf::xor;
use crate::Block;

const ZERO: Block = [0u8; 16];

/// The UHF's final state, alongside the 5 feedback registers finalization
/// needs directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetitMacUhfOutput {
    pub state: Block,
    pub r0: Block,
    pub r1: Block,
    pub r2: Block,
    pub r3: Block,
    pub r4: Block,
}

/// Run the PetitMac UHF over an already-padded message.
///
/// `message` must already satisfy the padding invariant (its length is a
/// multiple of 16 bytes); PetitMac appends no further trailing extension.
///
/// # Panics
///
/// Panics if `message.len()` is not a multiple of 16.
pub fn petitmac_uhf(mut state: Block, message: &[u8]) -> PetitMacUhfOutput {
    assert_eq!(
        message.len() % 16,
        0,
        "PetitMac UHF input must be a multiple of 16 bytes"
    );

    let mut r0 = ZERO;
    let mut r1 = ZERO;
    let mut r2 = ZERO;
    let mut r3 = ZERO;
    let mut r4 = ZERO;

    for block in message.chunks_exact(16) {
        let mut m = ZERO;
        m.copy_from_slice(block);

        let t = xor(&xor(&aes_round_no_key(&state), &m), &r4);

        let n0 = xor(&m, &r3);
        let n1 = xor(&r4, &n0);
        let n2 = xor(&r4, &r0);
        let n3 = r1;
        let n4 = r2;

        state = xor(&aes_round_no_key(&t), &n0);

        r0 = n0;
        r1 = n1;
        r2 = n2;
        r3 = n3;
        r4 = n4;
    }

    PetitMacUhfOutput {
        state,
        r0,
        r1,
        r2,
        r3,
        r4,
    }
}
