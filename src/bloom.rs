// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter over strings using three independent hash functions.

use std::path::Path;

use crate::bitvec::BitVec;
use crate::config::FilterConfig;
use crate::error::Result;
use crate::hash;
use crate::scan::{ScanReport, Verdict};
use crate::source;

/// Number of hash functions, `k`.
pub const NUM_HASHES: usize = 3;

/// Names of the hash functions, in the order their indices are produced.
pub const HASH_NAMES: [&str; NUM_HASHES] = ["Polynomial Rolling", "DJB2", "SDBM"];

/// A Bloom filter of strings.
///
/// Each item sets up to three bits, one per hash function. Bits are never
/// cleared, so an item that was added is always reported as present.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    bits: BitVec,
    config: FilterConfig,
    len: usize,
}

impl BloomFilter {
    /// Return an empty Bloom filter using the default configuration.
    pub fn new() -> Self {
        Self::with_config(FilterConfig::default())
    }

    /// Return an empty Bloom filter with the given parameters.
    pub fn with_config(config: FilterConfig) -> Self {
        tracing::debug!(
            capacity = config.capacity(),
            multiplier = config.multiplier(),
            modulus = config.modulus(),
            "creating bloom filter"
        );

        Self {
            bits: BitVec::new(config.capacity()),
            config,
            len: 0,
        }
    }

    /// Build a filter from a file containing one item per line.
    ///
    /// The whole file is read before the filter is built, so a read error
    /// never leaves a partially loaded filter behind.
    pub fn from_path<P: AsRef<Path>>(path: P, config: FilterConfig) -> Result<Self> {
        let lines = source::read_all(path.as_ref())?;
        let mut filter = Self::with_config(config);
        let added = filter.load(lines);

        tracing::debug!(path = %path.as_ref().display(), added, "loaded known set");

        Ok(filter)
    }

    /// Add an item to the filter. Adding the same item again has no effect
    /// on the bit array.
    pub fn add<T: AsRef<[u8]>>(&mut self, item: T) {
        for index in self.indices(item) {
            self.bits.set(index as u64);
        }
        self.len += 1;
    }

    /// Return whether or not a given item is possibly in the filter. A false
    /// positive is possible, a false negative is not.
    pub fn contains<T: AsRef<[u8]>>(&self, item: T) -> bool {
        self.indices(item)
            .iter()
            .all(|&index| self.bits.test(index as u64))
    }

    /// Add every item of a sequence, in order. Returns how many were added.
    pub fn load<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let before = self.len;
        for item in items {
            self.add(item);
        }
        self.len - before
    }

    /// Check every candidate without modifying the filter, splitting them
    /// into matched and unmatched.
    ///
    /// Candidates are checked on their raw bytes. The text kept in each
    /// [`Verdict`] is decoded lossily and only meant for display.
    pub fn scan<I>(&self, candidates: I) -> ScanReport
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        candidates
            .into_iter()
            .map(|item| {
                let item = item.as_ref();
                let matched = self.contains(item);

                Verdict {
                    item: String::from_utf8_lossy(item).into_owned(),
                    matched,
                }
            })
            .collect()
    }

    /// Return the bit positions an item maps to, one per hash function.
    ///
    /// Each hash output is reduced modulo `m` and then modulo the capacity.
    /// Positions may coincide.
    pub fn indices<T: AsRef<[u8]>>(&self, item: T) -> [usize; NUM_HASHES] {
        let s = item.as_ref();
        let m = self.config.modulus();
        let n = self.bits.capacity() as u64;

        [
            hash::polynomial(s, self.config.multiplier(), m),
            hash::djb2(s) % m,
            hash::sdbm(s) % m,
        ]
        .map(|h| (h % n) as usize)
    }

    /// Number of `add` calls so far, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of bits in this filter.
    pub fn capacity(&self) -> usize {
        self.bits.capacity()
    }

    /// Return the parameters this filter was built with.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over the positions of set bits, in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }

    /// Fraction of bits that are set.
    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.capacity() as f64
    }

    /// Probability that a fresh item is reported as present, given the
    /// current fill ratio.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(NUM_HASHES as i32)
    }

    /// Count the approximate number of distinct items in the filter.
    pub fn estimated_count(&self) -> usize {
        let nbits = self.capacity() as f64;
        let nbits_set = self.count_ones() as f64;
        let nhashes = NUM_HASHES as f64;
        let count = -(nbits / nhashes) * (1. - (nbits_set / nbits)).ln();

        count.round() as usize
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for BloomFilter {
    fn as_ref(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

/// Two filters are equal when they share parameters and bit state. The
/// insertion count is informational and does not take part.
impl PartialEq for BloomFilter {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.bits == other.bits
    }
}

impl Eq for BloomFilter {}

impl<T: AsRef<[u8]>> Extend<T> for BloomFilter {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.load(iter);
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for BloomFilter {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut filter = Self::new();
        filter.load(iter);
        filter
    }
}
