use crate::consts::{DIGEST_LEN, H0, K, ROUNDS};
use crate::schedule::{rotr, Schedule};

#[inline(always)]
fn big_sigma0(a: u32) -> u32 {
    rotr(a, 2) ^ rotr(a, 13) ^ rotr(a, 22)
}

#[inline(always)]
fn big_sigma1(e: u32) -> u32 {
    rotr(e, 6) ^ rotr(e, 11) ^ rotr(e, 25)
}

#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Scratch registers `a..h` for one block's rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkingRegisters([u32; 8]);

impl WorkingRegisters {
    /// Runs a single round with round constant `k` and schedule word `w`.
    pub fn round(&mut self, k: u32, w: u32) {
        let [a, b, c, d, e, f, g, h] = self.0;

        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w);
        let temp2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        self.0 = [
            temp1.wrapping_add(temp2),
            a,
            b,
            c,
            d.wrapping_add(temp1),
            e,
            f,
            g,
        ];
    }

    pub fn registers(&self) -> [u32; 8] {
        self.0
    }
}

/// Running hash state `H0..H7`, private to a single digest computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashState {
    h: [u32; 8],
}

impl HashState {
    pub fn new() -> Self {
        HashState { h: H0 }
    }

    /// Compresses one block's schedule into the state.
    pub fn compress(&mut self, w: &Schedule) {
        let mut regs = WorkingRegisters(self.h);

        for i in 0..ROUNDS {
            regs.round(K[i], w[i]);
        }

        self.fold(&regs);
    }

    fn fold(&mut self, regs: &WorkingRegisters) {
        for (h, r) in self.h.iter_mut().zip(regs.0) {
            *h = h.wrapping_add(r);
        }
    }

    pub fn words(&self) -> [u32; 8] {
        self.h
    }

    /// Concatenates `H0..H7` big-endian into the final digest.
    pub fn assemble(&self) -> [u8; DIGEST_LEN] {
        let mut result = [0u8; DIGEST_LEN];
        for (out, word) in result.chunks_exact_mut(4).zip(self.h) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        result
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::segment;
    use crate::padding::pad;
    use crate::schedule::expand;

    #[test]
    fn choose_and_majority_truth_tables() {
        assert_eq!(ch(0xffff_0000, 0x1234_5678, 0x9abc_def0), 0x1234_def0);
        assert_eq!(maj(0xff00_ff00, 0xf0f0_f0f0, 0x0000_ffff), 0xf000_fff0);
    }

    // a and e after round 0 and round 63 of the FIPS 180-2 "abc" example.
    #[test]
    fn abc_rounds_match_worked_example() {
        let padded = pad(b"abc").unwrap();
        let w = expand(segment(&padded).unwrap()[0]);

        let mut regs = WorkingRegisters(H0);
        regs.round(K[0], w[0]);
        let r = regs.registers();
        assert_eq!(r[0], 0x5d6aebcd);
        assert_eq!(r[4], 0xfa2a4622);
        assert_eq!(r[1], H0[0]);
        assert_eq!(r[5], H0[4]);

        for i in 1..ROUNDS {
            regs.round(K[i], w[i]);
        }
        let r = regs.registers();
        assert_eq!(r[0], 0x506e3058);
        assert_eq!(r[4], 0x5ef50f24);
    }

    #[test]
    fn fold_adds_registers_into_state() {
        let padded = pad(b"abc").unwrap();
        let w = expand(segment(&padded).unwrap()[0]);

        let mut state = HashState::new();
        state.compress(&w);
        assert_eq!(
            state.words(),
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223,
                0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad,
            ]
        );
    }

    #[test]
    fn fresh_state_is_the_initial_constants() {
        assert_eq!(HashState::new().words(), H0);
        assert_eq!(HashState::default(), HashState::new());
    }

    #[test]
    fn assemble_is_big_endian() {
        let state = HashState::new();
        let out = state.assemble();
        assert_eq!(&out[..4], &[0x6a, 0x09, 0xe6, 0x67]);
        assert_eq!(&out[28..], &[0x5b, 0xe0, 0xcd, 0x19]);
    }
}
