//! A fixed-size Bloom filter of strings, driven by three classic string
//! hash functions.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! This filter is meant to be populated once from a list of known entries
//! (for example known-bad URLs) and then queried many times.
//!
//! # Hashing
//!
//! Each item is mapped to three bit positions by three unrelated hash
//! functions:
//!
//! * a polynomial rolling hash, Σ (s<sub>i</sub> - 'a' + 1) p<sup>i</sup> mod m,
//! * Bernstein's DJB2, h<sub>i</sub> = 33 h<sub>i-1</sub> + s<sub>i</sub>,
//! * SDBM, h<sub>i</sub> = 65599 h<sub>i-1</sub> + s<sub>i</sub>.
//!
//! Every hash value is reduced modulo `m` and then modulo the number of bits
//! `N`. The defaults are `N = 1_000_001`, `p = 31` and `m = 1_000_000_009`;
//! see [`FilterConfig`] to change them.
//!
//! # Example
//!
//! ```
//! use tribloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new();
//!
//! filter.add("evil.com");
//! filter.add("bad.org");
//!
//! assert!(filter.contains("evil.com"));
//! assert!(filter.contains("bad.org"));
//! assert!(!filter.contains("safe.com"));
//!
//! let report = filter.scan(["evil.com", "safe.com"]);
//! assert_eq!(report.matched().collect::<Vec<_>>(), ["evil.com"]);
//! assert_eq!(report.negatives(), 1);
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod config;
pub mod error;
pub mod hash;
pub mod scan;
pub mod source;

pub use bloom::{BloomFilter, HASH_NAMES, NUM_HASHES};
pub use config::FilterConfig;
pub use error::{Error, Result};
pub use scan::{ScanReport, Verdict};
