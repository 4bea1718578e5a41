// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! String hash functions driving the filter.
//!
//! All three walk the input one byte at a time. Each byte is read as a
//! signed 8-bit code and sign-extended, so bytes above `0x7f` contribute
//! negative values. DJB2 and SDBM accumulate in a `u64` with wrapping
//! arithmetic; the wraparound is part of the algorithms.

/// Code of the byte as a sign-extended integer.
#[inline]
fn code(byte: u8) -> i128 {
    byte as i8 as i128
}

/// Polynomial rolling hash, `Σ (s[i] - 'a' + 1) * p^i mod m`.
///
/// The running power of `p` is kept reduced modulo `m`. Characters below
/// `'a'` produce a negative term, which is added to the accumulator with
/// two's-complement wraparound before the reduction. Products are taken in
/// 128 bits, so any `p` and `m` are accepted.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn polynomial(s: &[u8], p: u64, m: u64) -> u64 {
    assert!(m > 0, "polynomial hash modulus must be non-zero");

    let mut hash: u64 = 0;
    let mut p_pow: u64 = 1;

    for &byte in s {
        let term = (code(byte) - b'a' as i128 + 1) * p_pow as i128;
        hash = hash.wrapping_add(term as u64) % m;
        p_pow = ((p_pow as u128 * p as u128) % m as u128) as u64;
    }
    hash
}

/// Bernstein's DJB2: `hash * 33 + c`, seeded with `5381`.
pub fn djb2(s: &[u8]) -> u64 {
    s.iter().fold(5381u64, |hash, &byte| {
        (hash << 5)
            .wrapping_add(hash)
            .wrapping_add(code(byte) as u64)
    })
}

/// SDBM: `c + (hash << 6) + (hash << 16) - hash`, i.e. `hash * 65599 + c`.
pub fn sdbm(s: &[u8]) -> u64 {
    s.iter().fold(0u64, |hash, &byte| {
        (code(byte) as u64)
            .wrapping_add(hash << 6)
            .wrapping_add(hash << 16)
            .wrapping_sub(hash)
    })
}
