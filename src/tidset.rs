use bitvec::prelude::*;

use crate::types::TransactionId;

/// Set of transaction ids over `0..capacity`, one bit per transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TidSet {
    bits: BitVec<usize, Lsb0>,
}

impl TidSet {
    pub fn empty(capacity: usize) -> Self {
        TidSet {
            bits: bitvec![usize, Lsb0; 0; capacity],
        }
    }

    pub fn full(capacity: usize) -> Self {
        TidSet {
            bits: bitvec![usize, Lsb0; 1; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    pub fn insert(&mut self, tid: TransactionId) {
        self.bits.set(tid, true);
    }

    pub fn contains(&self, tid: TransactionId) -> bool {
        self.bits.get(tid).map_or(false, |bit| *bit)
    }

    /// Number of transactions in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    pub fn iter(&self) -> impl Iterator<Item = TransactionId> + '_ {
        self.bits.iter_ones()
    }

    pub fn intersect(&self, other: &TidSet) -> TidSet {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    pub fn intersect_with(&mut self, other: &TidSet) {
        debug_assert_eq!(self.capacity(), other.capacity());
        self.bits &= other.bits.as_bitslice();
    }

    /// `self.intersect(other).len()` without building the intersection.
    pub fn intersection_len(&self, other: &TidSet) -> usize {
        debug_assert_eq!(self.capacity(), other.capacity());
        let words = self.bits.as_raw_slice();
        let other_words = other.bits.as_raw_slice();
        let Some((last, full)) = words.split_last() else {
            return 0;
        };
        let other_last = other_words[full.len()];

        // storage past `capacity` is not guaranteed to be zero
        let tail = self.capacity() % usize::BITS as usize;
        let mask = if tail == 0 { usize::MAX } else { (1usize << tail) - 1 };

        let shared: usize = full
            .iter()
            .zip(other_words)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum();
        shared + (last & other_last & mask).count_ones() as usize
    }
}
