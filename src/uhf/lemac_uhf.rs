//! LeMac's Universal Hash Function.
//!
//! Nine lanes of keyless-AES-round state (`S[0..9]`), each chunk absorbing
//! four message blocks through a fixed injection pattern, plus a short
//! feedback delay line (`R0, R1, R2`, and for v1 an extra `RR` stage) that
//! carries two of those four message blocks forward by one or two extra
//! chunks before they reach lane 3. See [`lemac_uhf`] for the per-chunk
//! update.

use crate::aes::aes_round_no_key;
use crate::uhf::xor;
use crate::Block;

const ZERO: Block = [0u8; 16];

/// Selects which LeMac delay-line variant to run.
///
/// `V1` inserts one additional block of latency (the `RR` register)
/// between absorbing `M1` and injecting it into lane 3, compared to `V0`.
/// Because of that extra stage, a padded message must be extended with one
/// more trailing zero chunk under `V1` than under `V0` so the delay line
/// fully drains into the state before the UHF returns — see
/// [`LeMacVersion::trailing_zero_chunks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeMacVersion {
    V0,
    V1,
}

impl LeMacVersion {
    /// Number of 64-byte zero chunks appended after padding, before UHF
    /// absorption, so the feedback delay line empties fully into `S`.
    pub(crate) fn trailing_zero_chunks(self) -> usize {
        match self {
            LeMacVersion::V0 => 3,
            LeMacVersion::V1 => 4,
        }
    }
}

/// Run the LeMac UHF over an already-padded message, extending it
/// internally with `version`'s trailing zero chunks before absorption.
///
/// `message` must already satisfy the padding invariant (its length is a
/// multiple of 64 bytes, i.e. 4 blocks per chunk); this function appends
/// the version-dependent zero-chunk tail itself.
///
/// # Panics
///
/// Panics if `message.len()` is not a multiple of 64.
pub fn lemac_uhf(mut state: [Block; 9], message: &[u8], version: LeMacVersion) -> [Block; 9] {
    assert_eq!(
        message.len() % 64,
        0,
        "LeMac UHF input must be a multiple of 64 bytes"
    );

    let mut extended = message.to_vec();
    extended.resize(extended.len() + version.trailing_zero_chunks() * 64, 0u8);

    let mut r0 = ZERO;
    let mut r1 = ZERO;
    let mut r2 = ZERO;
    let mut rr = ZERO;

    for chunk in extended.chunks_exact(64) {
        let m0 = block_at(chunk, 0);
        let m1 = block_at(chunk, 1);
        let m2 = block_at(chunk, 2);
        let m3 = block_at(chunk, 3);

        let mut n = [ZERO; 9];
        n[0] = xor(&state[0], &state[8]);
        for j in 1..9 {
            n[j] = aes_round_no_key(&state[j - 1]);
        }

        state[0] = xor(&n[0], &m2);
        state[1] = xor(&n[1], &m3);
        state[2] = xor(&n[2], &m3);
        state[3] = xor(&xor(&n[3], &r1), &r2);
        state[4] = xor(&n[4], &m0);
        state[5] = xor(&n[5], &m0);
        state[6] = xor(&n[6], &m1);
        state[7] = xor(&n[7], &m1);
        state[8] = xor(&n[8], &m3);

        match version {
            LeMacVersion::V1 => {
                r2 = r1;
                r1 = r0;
                r0 = xor(&rr, &m1);
                rr = m2;
            }
            LeMacVersion::V0 => {
                r2 = r1;
                r1 = xor(&r0, &m1);
                r0 = m2;
            }
        }
    }

    state
}

fn block_at(chunk: &[u8], index: usize) -> Block {
    let mut block = [0u8; 16];
    block.copy_from_slice(&chunk[index * 16..(index + 1) * 16]);
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_state() -> [Block; 9] {
        let mut s = [ZERO; 9];
        for (i, block) in s.iter_mut().enumerate() {
            block[0] = i as u8;
        }
        s
    }

    #[test]
    fn test_empty_extended_message_leaves_state_unchanged_for_zero_chunks() {
        // With zero chunks to absorb, the UHF is a no-op regardless of
        // version (the trailing zero-chunk extension only matters once
        // there is at least one real chunk to drain).
        let state = init_state();
        let out_v0 = lemac_uhf(state, &[], LeMacVersion::V0);
        let out_v1 = lemac_uhf(state, &[], LeMacVersion::V1);
        assert_eq!(out_v0, out_v1);
    }

    #[test]
    fn test_one_chunk_versions_diverge() {
        let state = init_state();
        let message = vec![0xABu8; 64];
        let out_v0 = lemac_uhf(state, &message, LeMacVersion::V0);
        let out_v1 = lemac_uhf(state, &message, LeMacVersion::V1);
        assert_ne!(out_v0, out_v1);
    }

    #[test]
    fn test_deterministic() {
        let state = init_state();
        let message = vec![0x5Au8; 128];
        let out1 = lemac_uhf(state, &message, LeMacVersion::V1);
        let out2 = lemac_uhf(state, &message, LeMacVersion::V1);
        assert_eq!(out1, out2);
    }

    #[test]
    #[should_panic(expected = "multiple of 64 bytes")]
    fn test_rejects_unaligned_message() {
        let state = init_state();
        let _ = lemac_uhf(state, &[0u8; 10], LeMacVersion::V1);
    }
}
