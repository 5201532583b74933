//! Cryptographically secure source.
//!
//! A single process-wide [`Csprng`] sits behind a mutex. Every draw locks
//! it for exactly one state advance (one 64-bit word) and releases it
//! before any allocation or formatting happens. Heavy concurrent use
//! contends on that lock.
//!
//! Invalid arguments are reported as [`SecureError`] values instead of
//! panics.

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

use crate::charset::Charset;
use crate::error::SecureError;
use crate::rng::csprng::Csprng;
use crate::rng::number::Number;
use crate::rng::reader::RandReader;
use crate::rng::{uniform, uuid_fixup};

static GENERATOR: Lazy<Mutex<Csprng>> = Lazy::new(|| Mutex::new(Csprng::from_os()));

/// Raw 64-bit draw.
pub fn u64() -> u64 {
    // A panic cannot happen while the lock is held, so a poisoned mutex
    // still guards a consistent state.
    GENERATOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .next_u64()
}

/// Byte-stream view of this source.
pub fn reader() -> RandReader {
    RandReader::new(u64)
}

/// Uniform draw in `[0, n)`.
pub fn u64_n(n: u64) -> Result<u64, SecureError> {
    if n == 0 {
        return Err(SecureError::ZeroBound);
    }
    Ok(uniform::below(n, u64))
}

/// Uniform index in `[0, n)`.
pub fn int_n(n: usize) -> Result<usize, SecureError> {
    u64_n(n as u64).map(|v| v as usize)
}

/// Uniform integer in `[min, max]`.
pub fn int(min: i64, max: i64) -> Result<i64, SecureError> {
    number(min, max)
}

/// Uniform value of any [`Number`] kind in `[min, max]`.
pub fn number<T: Number>(min: T, max: T) -> Result<T, SecureError> {
    if min > max {
        return Err(SecureError::invalid_range(min, max));
    }
    Ok(T::sample(min, max, &mut u64))
}

/// Uniform value in `[0, n]`.
pub fn number_n<T: Number>(n: T) -> Result<T, SecureError> {
    number(T::default(), n)
}

/// Uniform float in `[0, 1)` with 53 bits of precision.
pub fn float64() -> f64 {
    uniform::unit_f64(u64())
}

pub fn byte() -> u8 {
    u64() as u8
}

pub fn boolean() -> bool {
    u64() >> 63 == 1
}

pub fn fill(buf: &mut [u8]) {
    reader().fill(buf)
}

/// `len` random bytes; `len == 0` yields an empty vector.
pub fn bytes(len: usize) -> Result<Vec<u8>, SecureError> {
    Ok(reader().bytes(len))
}

/// `len` random bytes as `2 * len` lowercase hex characters.
pub fn hex(len: usize) -> Result<String, SecureError> {
    bytes(len).map(hex::encode)
}

/// A string of `len` characters drawn from `charset`.
pub fn string(len: usize, charset: &Charset) -> Result<String, SecureError> {
    if len == 0 {
        return Err(SecureError::ZeroLength);
    }

    let set = charset.as_bytes();
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(set[int_n(set.len())?]);
    }

    Ok(crate::charset::into_text(out))
}

/// Like [`string`], but takes raw bytes and rejects an empty set.
pub fn string_from(len: usize, charset: &[u8]) -> Result<String, SecureError> {
    let charset = Charset::new(charset).ok_or(SecureError::EmptyCharset)?;
    string(len, &charset)
}

pub fn choice<T>(items: &[T]) -> Result<&T, SecureError> {
    if items.is_empty() {
        return Err(SecureError::EmptyChoice);
    }
    Ok(&items[int_n(items.len())?])
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

pub fn choice_key<K, V>(items: &HashMap<K, V>) -> Result<&K, SecureError> {
    if items.is_empty() {
        return Err(SecureError::EmptyChoice);
    }
    let i = int_n(items.len())?;
    items.keys().nth(i).ok_or(SecureError::EmptyChoice)
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T>(items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = uniform::below(i as u64 + 1, u64) as usize;
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
