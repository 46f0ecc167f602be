pub mod apriori;
pub mod dfs;

use crate::{
    dataset::Dataset,
    error::MinerError,
    support::Support,
    types::{Itemset, ItemsetLength},
};

pub use apriori::Apriori;
pub use dfs::DepthFirst;

/// A frequent itemset and its exact support.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrequentItemset {
    pub itemset: Itemset,
    pub support: Support,
}

impl FrequentItemset {
    pub fn new(itemset: Itemset, count: usize, total: usize) -> Self {
        FrequentItemset {
            itemset,
            support: Support::new(count, total),
        }
    }

    pub fn len(&self) -> ItemsetLength {
        self.itemset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemset.is_empty()
    }

    pub fn frequency(&self) -> f64 {
        self.support.frequency()
    }
}

/// Anything that can enumerate every frequent itemset of a dataset.
///
/// Implementations return each non-empty itemset with frequency at least
/// `min_frequency` exactly once. Itemsets that occur in no transaction are
/// never returned, so a threshold of 0 yields the itemsets present in the data.
pub trait FrequentItemsetSearch {
    fn name(&self) -> &'static str;

    fn mine(&self, dataset: &Dataset, min_frequency: f64)
        -> Result<Vec<FrequentItemset>, MinerError>;
}

/// Whether another level of itemsets may be explored.
pub(crate) fn within(max_len: Option<ItemsetLength>, size: ItemsetLength) -> bool {
    max_len.map_or(true, |max_len| size <= max_len)
}
