//! Process-start seeding for both sources.
//!
//! Seeding happens inside lazy initializers, before any caller-visible
//! operation exists to report an error to. An unavailable entropy source
//! therefore degrades to a time-derived seed, which is logged but not
//! propagated. The fallback is predictable and only suitable for
//! non-adversarial environments.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::os::sys_random;

/// Returns `N` bytes of OS entropy, or a time-derived seed when the OS
/// source fails.
pub(crate) fn entropy<const N: usize>() -> [u8; N] {
    let mut buf = [0u8; N];

    match sys_random(&mut buf) {
        Ok(()) => buf,
        Err(err) => {
            tracing::warn!(
                error = %err,
                "operating system entropy unavailable, seeding from the clock"
            );
            time_seed()
        }
    }
}

/// Initial counter for the fast source.
pub(crate) fn fast_state() -> u64 {
    let seed: [u8; 16] = entropy();
    let (lo, hi) = seed.split_at(8);

    let seed1 = u64::from_le_bytes(lo.try_into().unwrap_or_default());
    let seed2 = u64::from_le_bytes(hi.try_into().unwrap_or_default());

    seed1 ^ seed2.rotate_left(17)
}

/// Spreads the current time in nanoseconds over `N` bytes.
///
/// Words cycle through `nanos`, `reverse_bits(nanos)`, `nanos >> 5` and
/// `nanos << 5`.
fn time_seed<const N: usize>() -> [u8; N] {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let words = [nanos, nanos.reverse_bits(), nanos >> 5, nanos << 5];

    let mut out = [0u8; N];
    for (chunk, word) in out.chunks_mut(8).zip(words.iter().cycle()) {
        chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
    }

    out
}
