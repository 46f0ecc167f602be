use std::collections::HashMap;

pub type ItemId = u32;
pub type TransactionId = usize;

/// Sorted ascending, no repeats.
pub type Itemset = Vec<ItemId>;
/// Sorted ascending, no repeats.
pub type Transaction = Vec<ItemId>;

pub type ItemsetLength = usize;
pub type ItemsetCounts = HashMap<Itemset, usize>;
