//! Unbiased range reduction.
//!
//! Every bounded draw in the crate, from either source, goes through
//! [`below`]. It uses the wide-multiply method: the 128-bit product of a
//! raw word and the bound is split in two, the high half is the candidate
//! and the low half decides whether the candidate falls into the biased
//! region. Rejection happens with probability below `n / 2^64`.

/// Full 64×64→128-bit product, returned as `(high, low)`.
#[inline(always)]
pub(crate) fn mul_wide(a: u64, b: u64) -> (u64, u64) {
    let product = (a as u128) * (b as u128);
    ((product >> 64) as u64, product as u64)
}

/// Draws a value in `[0, n)` from `next`.
///
/// `n` must be non-zero; both public surfaces check this before calling.
#[inline]
pub(crate) fn below(n: u64, mut next: impl FnMut() -> u64) -> u64 {
    debug_assert!(n > 0);

    // (2^64 - n) mod n
    let threshold = n.wrapping_neg() % n;

    loop {
        let (hi, lo) = mul_wide(next(), n);
        if lo >= threshold {
            return hi;
        }
    }
}

/// Maps the top 53 bits of a word to `[0, 1)`.
#[inline(always)]
pub(crate) fn unit_f64(word: u64) -> f64 {
    const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
    (word >> 11) as f64 * SCALE
}

/// Maps the top 24 bits of a word to `[0, 1)`.
#[inline(always)]
pub(crate) fn unit_f32(word: u64) -> f32 {
    const SCALE: f32 = 1.0 / (1u32 << 24) as f32;
    (word >> 40) as f32 * SCALE
}
