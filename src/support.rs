use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    dataset::Dataset,
    tidset::TidSet,
    types::{ItemId, Transaction},
};

/// Exact support of an itemset: `count` of `total` transactions contain it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Support {
    pub count: usize,
    pub total: usize,
}

impl Support {
    pub fn new(count: usize, total: usize) -> Self {
        debug_assert!(count <= total);
        Support { count, total }
    }

    /// `count / total`, or 0.0 for an empty dataset.
    pub fn frequency(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64
        }
    }
}

impl Debug for Support {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}/{}", self.count, self.total)
    }
}

/// Smallest count `c >= 1` with `c / n >= min_frequency`.
///
/// Comparing `c as f64 / n as f64` directly keeps the boundary identical to a
/// float frequency check, which `ceil(min_frequency * n)` alone does not
/// (`0.1 * 10.0` rounds up past 1).
pub fn min_support_count(min_frequency: f64, n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    let meets = |count: usize| count as f64 / n as f64 >= min_frequency;

    let mut count = ((min_frequency * n as f64).ceil() as usize).clamp(1, n + 1);
    while count > 1 && meets(count - 1) {
        count -= 1;
    }
    while count <= n && !meets(count) {
        count += 1;
    }
    count
}

/// Extends a prefix's tidset by one item. Unknown items give the empty set.
pub fn extend(prefix: &TidSet, item: ItemId, dataset: &Dataset) -> TidSet {
    match dataset.transactions_containing(item) {
        Some(tids) => prefix.intersect(tids),
        None => TidSet::empty(prefix.capacity()),
    }
}

/// Tidset of a whole itemset by progressive intersection from the full set.
pub fn tidset_of(itemset: &[ItemId], dataset: &Dataset) -> TidSet {
    let mut tids = dataset.all_transactions();
    for &item in itemset {
        match dataset.transactions_containing(item) {
            Some(item_tids) => tids.intersect_with(item_tids),
            None => return TidSet::empty(dataset.transaction_count()),
        }
        if tids.is_empty() {
            break;
        }
    }
    tids
}

/// Support computed on the vertical view. The empty itemset is in every transaction.
pub fn support(itemset: &[ItemId], dataset: &Dataset) -> Support {
    let n = dataset.transaction_count();
    Support::new(tidset_of(itemset, dataset).len(), n)
}

/// Brute-force count over horizontal rows, e.g. `dataset.transactions()`.
/// `itemset` must be sorted.
pub fn count_horizontal<'t, I>(itemset: &[ItemId], transactions: I) -> usize
where
    I: IntoIterator<Item = &'t Transaction>,
{
    transactions
        .into_iter()
        .filter(|transaction| contains_all(transaction, itemset))
        .count()
}

/// Whether a sorted transaction holds every item of a sorted itemset.
pub fn contains_all(transaction: &[ItemId], itemset: &[ItemId]) -> bool {
    if itemset.len() > transaction.len() {
        return false;
    }
    let mut rest = transaction;
    for item in itemset {
        match rest.binary_search(item) {
            Ok(pos) => rest = &rest[pos + 1..],
            Err(_) => return false,
        }
    }
    true
}
