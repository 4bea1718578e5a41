// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Filter parameters.
use crate::error::{Error, Result};

/// Default number of bits in the filter.
pub const DEFAULT_CAPACITY: usize = 1_000_001;

/// Default multiplier `p` of the polynomial hash.
pub const DEFAULT_MULTIPLIER: u64 = 31;

/// Default modulus `m` of the polynomial hash. Every hash output is reduced
/// by it before being mapped onto the bit array.
pub const DEFAULT_MODULUS: u64 = 1_000_000_009;

/// Largest accepted modulus. Its square still fits in an `i64`, so every
/// accepted configuration hashes exactly as 64-bit signed arithmetic would.
pub const MAX_MODULUS: u64 = 3_037_000_499;

/// Parameters fixed for the lifetime of a filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    capacity: usize,
    multiplier: u64,
    modulus: u64,
}

impl FilterConfig {
    /// Create a validated configuration.
    ///
    /// `capacity` must be non-zero, `multiplier` must lie in `1..modulus`,
    /// and `modulus` must not exceed [`MAX_MODULUS`].
    pub fn new(capacity: usize, multiplier: u64, modulus: u64) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfig("capacity must be non-zero".to_owned()));
        }
        if modulus == 0 || modulus > MAX_MODULUS {
            return Err(Error::InvalidConfig(format!(
                "modulus must be in 1..={MAX_MODULUS}, got {modulus}"
            )));
        }
        if multiplier == 0 || multiplier >= modulus {
            return Err(Error::InvalidConfig(format!(
                "multiplier must be in 1..{modulus}, got {multiplier}"
            )));
        }
        Ok(Self {
            capacity,
            multiplier,
            modulus,
        })
    }

    /// Number of bits in the filter, `N`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Polynomial hash multiplier, `p`.
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Hash modulus, `m`.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            multiplier: DEFAULT_MULTIPLIER,
            modulus: DEFAULT_MODULUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let cfg = FilterConfig::default();

        assert_eq!(cfg.capacity(), 1_000_001);
        assert_eq!(cfg.multiplier(), 31);
        assert_eq!(cfg.modulus(), 1_000_000_009);
        assert_eq!(
            FilterConfig::new(DEFAULT_CAPACITY, DEFAULT_MULTIPLIER, DEFAULT_MODULUS).unwrap(),
            cfg
        );
    }

    #[test]
    fn test_validation() {
        assert!(FilterConfig::new(101, 7, 97).is_ok());
        assert!(FilterConfig::new(1, 1, MAX_MODULUS).is_ok());

        assert!(matches!(
            FilterConfig::new(0, 31, 97),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            FilterConfig::new(101, 0, 97),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            FilterConfig::new(101, 97, 97),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            FilterConfig::new(101, 7, 0),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            FilterConfig::new(101, 7, MAX_MODULUS + 1),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_max_modulus_square_fits() {
        assert!((MAX_MODULUS as i64).checked_mul(MAX_MODULUS as i64).is_some());
        assert!((MAX_MODULUS as i64 + 1).checked_mul(MAX_MODULUS as i64 + 1).is_none());
    }
}
