use crate::blocks::Block;
use crate::consts::ROUNDS;

pub type Schedule = [u32; ROUNDS];

/// Circular right rotation. The algorithm only uses fixed amounts in `1..32`.
#[inline(always)]
pub fn rotr(x: u32, n: u32) -> u32 {
    debug_assert!(n != 0 && n < 32, "rotation amount {} out of range", n);
    x.rotate_right(n)
}

/// Logical right shift, zero filled.
#[inline(always)]
pub fn shr(x: u32, n: u32) -> u32 {
    debug_assert!(n != 0 && n < 32, "shift amount {} out of range", n);
    x >> n
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ shr(x, 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ shr(x, 10)
}

/// Builds the 64-word message schedule for one block.
pub fn expand(block: &Block) -> Schedule {
    let mut w = [0u32; ROUNDS];

    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 16..ROUNDS {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}
