//! Fast, lock-free, non-cryptographic source.
//!
//! The only shared state is one 64-bit counter. Every draw advances it
//! with a single atomic `fetch_add` and passes the value through the
//! SplitMix64 finalizer. Concurrent callers each observe a distinct
//! counter value and never wait on each other.
//!
//! Contract violations (empty charset, zero bound, `min > max`) are
//! programmer errors and panic.
//!
//! Do not use this source for keys, tokens or anything an adversary may
//! try to predict; see [`secure`](super::secure).

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;

use crate::charset::Charset;
use crate::rng::number::Number;
use crate::rng::reader::RandReader;
use crate::rng::{seed, uniform, uuid_fixup};

/// Weyl increment of SplitMix64 (odd, so the counter has full period).
const GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

static STATE: Lazy<AtomicU64> = Lazy::new(|| AtomicU64::new(seed::fast_state()));

/// SplitMix64 output function. A bijection on `u64`.
#[inline(always)]
pub(crate) const fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Raw 64-bit draw.
#[inline]
pub fn u64() -> u64 {
    let z = STATE.fetch_add(GAMMA, Ordering::Relaxed).wrapping_add(GAMMA);
    mix(z)
}

/// Byte-stream view of this source.
pub fn reader() -> RandReader {
    RandReader::new(u64)
}

/// Uniform draw in `[0, n)`.
///
/// # Panics
/// Panics if `n == 0`.
pub fn u64_n(n: u64) -> u64 {
    assert!(n > 0, "randomizer: argument n must be positive");
    uniform::below(n, u64)
}

/// Uniform index in `[0, n)`.
///
/// # Panics
/// Panics if `n == 0`.
pub fn int_n(n: usize) -> usize {
    assert!(n > 0, "randomizer: argument n must be positive");
    uniform::below(n as u64, u64) as usize
}

/// Uniform integer in `[min, max]`.
///
/// # Panics
/// Panics if `min > max`.
pub fn int(min: i64, max: i64) -> i64 {
    number(min, max)
}

/// Uniform value of any [`Number`] kind in `[min, max]`.
///
/// # Panics
/// Panics if `min > max`.
pub fn number<T: Number>(min: T, max: T) -> T {
    assert!(
        min <= max,
        "randomizer: invalid number range [{min}, {max}]"
    );
    T::sample(min, max, &mut u64)
}

/// Uniform value in `[0, n]`.
///
/// # Panics
/// Panics if `n` is negative.
pub fn number_n<T: Number>(n: T) -> T {
    let zero = T::default();
    assert!(
        n >= zero,
        "randomizer: invalid bound {n}, must be non-negative"
    );
    T::sample(zero, n, &mut u64)
}

/// Uniform float in `[0, 1)` with 53 bits of precision.
pub fn float64() -> f64 {
    uniform::unit_f64(u64())
}

/// A single random byte.
pub fn byte() -> u8 {
    u64() as u8
}

pub fn boolean() -> bool {
    u64() >> 63 == 1
}

/// Fills `buf` with random bytes.
pub fn fill(buf: &mut [u8]) {
    reader().fill(buf)
}

/// `len` random bytes.
pub fn bytes(len: usize) -> Vec<u8> {
    reader().bytes(len)
}

/// `len` random bytes as `2 * len` lowercase hex characters.
pub fn hex(len: usize) -> String {
    hex::encode(bytes(len))
}

/// `len` bytes drawn independently from `charset`. Unlike [`string`],
/// `len == 0` is allowed and the bytes are not converted to text.
pub fn string_bytes(len: usize, charset: &Charset) -> Vec<u8> {
    pick(len, charset.as_bytes())
}

/// `len` independent uniform picks from a non-empty `set`.
pub(crate) fn pick(len: usize, set: &[u8]) -> Vec<u8> {
    (0..len).map(|_| set[int_n(set.len())]).collect()
}

/// A string of `len` characters drawn from `charset`.
///
/// Charsets containing non-ASCII bytes may produce invalid UTF-8; those
/// sequences are replaced with U+FFFD.
///
/// # Panics
/// Panics if `len == 0`.
pub fn string(len: usize, charset: &Charset) -> String {
    assert!(len > 0, "randomizer: length must be positive");
    crate::charset::into_text(string_bytes(len, charset))
}

/// One element of `items`, chosen uniformly.
///
/// # Panics
/// Panics if `items` is empty.
pub fn choice<T>(items: &[T]) -> &T {
    assert!(
        !items.is_empty(),
        "randomizer: cannot choose from an empty slice"
    );
    &items[int_n(items.len())]
}

/// `count` distinct elements of `items` in random order.
///
/// A `count` of zero, or one not smaller than `items.len()`, returns a
/// shuffled copy of all of `items`. An empty slice yields an empty vector.
pub fn choice_multiple<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    if count == 0 || count >= items.len() {
        let mut out = items.to_vec();
        shuffle(&mut out);
        return out;
    }

    perm(items.len())
        .into_iter()
        .take(count)
        .map(|i| items[i].clone())
        .collect()
}

/// One key of `items`, chosen uniformly.
///
/// # Panics
/// Panics if `items` is empty.
pub fn choice_key<K, V>(items: &HashMap<K, V>) -> &K {
    assert!(
        !items.is_empty(),
        "randomizer: cannot choose from an empty map"
    );
    let i = int_n(items.len());
    items
        .keys()
        .nth(i)
        .unwrap_or_else(|| unreachable!("index {i} is below the map length"))
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T>(items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = int_n(i + 1);
        items.swap(i, j);
    }
}

/// A random permutation of `0..n`.
pub fn perm(n: usize) -> Vec<usize> {
    let mut out: Vec<usize> = (0..n).collect();
    shuffle(&mut out);
    out
}

/// Version 4 UUID bytes (RFC 4122 variant).
pub fn uuid() -> [u8; 16] {
    let mut out = [0u8; 16];
    fill(&mut out);
    uuid_fixup(&mut out);
    out
}

pub fn ipv4() -> Ipv4Addr {
    let mut octets = [0u8; 4];
    fill(&mut octets);
    Ipv4Addr::from(octets)
}

pub fn ipv6() -> Ipv6Addr {
    let mut octets = [0u8; 16];
    fill(&mut octets);
    Ipv6Addr::from(octets)
}
