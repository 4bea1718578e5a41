// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit vector functionality.
use std::fmt::Debug;

/// A fixed-capacity packed bit vector.
///
/// Indexing is total: every index is reduced modulo the capacity before it
/// touches storage, so hash outputs can be passed in as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    nbits: usize,
}

impl BitVec {
    /// Create a new bit vector of the given capacity, in bits, with every bit unset.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "bit vector capacity must be non-zero");

        let byte_length = if capacity % 8 == 0 {
            capacity / 8
        } else {
            1 + capacity / 8
        };

        Self {
            nbits: capacity,
            bytes: vec![0; byte_length],
        }
    }

    /// Get the capacity in bits of the vector.
    pub fn capacity(&self) -> usize {
        self.nbits
    }

    /// Set the bit at `index mod capacity` to `1`.
    pub fn set(&mut self, index: u64) {
        let (byte_index, mask) = self.locate(index);

        self.bytes[byte_index] |= mask;
    }

    /// Check whether the bit at `index mod capacity` is set.
    pub fn test(&self, index: u64) -> bool {
        let (byte_index, mask) = self.locate(index);

        self.bytes[byte_index] & mask == mask
    }

    /// Count the number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.capacity() - self.count_ones()
    }

    /// Iterate over the positions of all `1` bits, in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nbits).filter(move |&i| self.bytes[i / 8] & (0x01 << (i % 8)) != 0)
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn locate(&self, index: u64) -> (usize, u8) {
        let bit = (index % self.nbits as u64) as usize;

        (bit / 8, 0x01 << (bit % 8))
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BitVec {{ capacity: {}, ones: {} }}",
            self.nbits,
            self.count_ones()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitvec_with_capacity() {
        let bitvec = BitVec::new(1);
        assert_eq!(1, bitvec.capacity());
        assert_eq!(1, bitvec.bytes.len());

        let bitvec = BitVec::new(8);
        assert_eq!(8, bitvec.capacity());
        assert_eq!(1, bitvec.bytes.len());

        let bitvec = BitVec::new(9);
        assert_eq!(9, bitvec.capacity());
        assert_eq!(2, bitvec.bytes.len());
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn must_have_capacity() {
        BitVec::new(0);
    }

    #[test]
    fn starts_empty() {
        let bitvec = BitVec::new(1_000_001);
        assert_eq!(0, bitvec.count_ones());
        assert_eq!(1_000_001, bitvec.count_zeros());
        assert_eq!(None, bitvec.ones().next());
    }

    #[test]
    fn set_first_bit_only() {
        let mut bitvec = BitVec::new(3);
        bitvec.set(0);
        assert_eq!(true, bitvec.test(0));
        assert_eq!(false, bitvec.test(1));
        assert_eq!(false, bitvec.test(2));
    }

    #[test]
    fn set_last_bit_only() {
        let mut bitvec = BitVec::new(9);
        bitvec.set(8);
        for i in 0..8 {
            assert_eq!(false, bitvec.test(i));
        }
        assert_eq!(true, bitvec.test(8));
    }

    #[test]
    fn indices_wrap_around_capacity() {
        let mut bitvec = BitVec::new(101);
        bitvec.set(101);
        assert_eq!(true, bitvec.test(0));
        assert_eq!(true, bitvec.test(202));

        bitvec.set(u64::MAX);
        let wrapped = (u64::MAX % 101) as usize;
        assert_eq!(true, bitvec.test(wrapped as u64));
        assert_eq!(vec![0, wrapped], bitvec.ones().collect::<Vec<_>>());
    }

    #[test]
    fn set_is_idempotent() {
        let mut bitvec = BitVec::new(24);
        bitvec.set(7);
        let once = bitvec.clone();
        bitvec.set(7);
        bitvec.set(31);
        assert_eq!(once, bitvec);
        assert_eq!(1, bitvec.count_ones());
    }

    #[test]
    fn set() {
        let mut bitvec = BitVec::new(24);
        for i in 0..24 {
            assert_eq!(false, bitvec.test(i));
        }

        bitvec.set(0);
        bitvec.set(7);
        bitvec.set(8);
        bitvec.set(23);

        assert_eq!(true, bitvec.test(0));
        assert_eq!(true, bitvec.test(7));
        assert_eq!(true, bitvec.test(8));
        assert_eq!(true, bitvec.test(23));
        assert_eq!(4, bitvec.count_ones());
        assert_eq!(20, bitvec.count_zeros());
        assert_eq!(vec![0, 7, 8, 23], bitvec.ones().collect::<Vec<_>>());
    }

    #[test]
    fn debug_is_summarized() {
        let mut bitvec = BitVec::new(16);
        bitvec.set(3);
        assert_eq!("BitVec { capacity: 16, ones: 1 }", format!("{:?}", bitvec));
    }
}
