use std::collections::HashSet;

use tracing::{debug, info};

use crate::{
    combi::{join_step, prune_step},
    dataset::Dataset,
    error::{check_min_frequency, MinerError},
    itemsets::{within, FrequentItemset, FrequentItemsetSearch},
    support::{count_horizontal, min_support_count},
    types::{Itemset, ItemsetCounts, ItemsetLength, Transaction},
};

/// Level-wise breadth-first miner.
///
/// Counts candidates against the horizontal view, so its results are
/// independent from the vertical intersections used by [`super::DepthFirst`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Apriori {
    max_len: Option<ItemsetLength>,
}

impl Apriori {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after itemsets of `max_len` items.
    pub fn with_max_len(mut self, max_len: Option<ItemsetLength>) -> Self {
        self.max_len = max_len;
        self
    }
}

impl FrequentItemsetSearch for Apriori {
    fn name(&self) -> &'static str {
        "apriori"
    }

    fn mine(
        &self,
        dataset: &Dataset,
        min_frequency: f64,
    ) -> Result<Vec<FrequentItemset>, MinerError> {
        let min_frequency = check_min_frequency(min_frequency)?;
        let n = dataset.transaction_count();
        let min_support_count = min_support_count(min_frequency, n);
        let mut frequent_itemsets: Vec<FrequentItemset> = Vec::new();

        if n == 0 || !within(self.max_len, 1) {
            return Ok(frequent_itemsets);
        }

        // 1-itemset
        debug!("Counting itemsets of length 1.");
        let mut frequent: ItemsetCounts =
            generate_frequent_1_itemset_counts(dataset, min_support_count);
        let mut transactions: Vec<&Transaction> = dataset.transactions().iter().collect();
        let mut size: ItemsetLength = 1;

        loop {
            emit_level(&frequent, n, &mut frequent_itemsets);
            debug!(size, frequent = frequent.len(), "level done");

            size += 1;
            if frequent.len() < 2 || !within(self.max_len, size) {
                break;
            }

            let candidates = generate_candidates_from_prev(&frequent);
            if candidates.is_empty() {
                break;
            }

            debug!(size, candidates = candidates.len(), "Counting itemsets of length {}.", size);
            transactions.retain(|transaction| transaction.len() >= size);
            frequent =
                generate_frequent_k_itemset_counts(candidates, &transactions, min_support_count);
            if frequent.is_empty() {
                break;
            }
        }

        info!(
            algorithm = self.name(),
            itemsets = frequent_itemsets.len(),
            "mining finished"
        );
        Ok(frequent_itemsets)
    }
}

/// Join then prune the frequent itemsets of the previous level.
fn generate_candidates_from_prev(prev_itemset_counts: &ItemsetCounts) -> Vec<Itemset> {
    let frequent: HashSet<Itemset> = prev_itemset_counts.keys().cloned().collect();
    let joined = join_step(prev_itemset_counts.keys().cloned().collect());
    prune_step(joined, &frequent)
}

/// Single items straight from the vertical index.
fn generate_frequent_1_itemset_counts(
    dataset: &Dataset,
    min_support_count: usize,
) -> ItemsetCounts {
    dataset
        .vertical()
        .filter_map(|(item, tids)| {
            let count = tids.len();
            if count >= min_support_count {
                Some((vec![item], count))
            } else {
                None
            }
        })
        .collect()
}

/// includes pruning
fn generate_frequent_k_itemset_counts(
    candidates: Vec<Itemset>,
    transactions: &[&Transaction],
    min_support_count: usize,
) -> ItemsetCounts {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let candidate_count = count_horizontal(&candidate, transactions.iter().copied());
            if candidate_count >= min_support_count {
                Some((candidate, candidate_count))
            } else {
                None
            }
        })
        .collect()
}

/// Appends a level in ascending itemset order so output is deterministic.
fn emit_level(level: &ItemsetCounts, n: usize, out: &mut Vec<FrequentItemset>) {
    let mut itemsets: Vec<(&Itemset, &usize)> = level.iter().collect();
    itemsets.sort_unstable();
    out.extend(
        itemsets
            .into_iter()
            .map(|(itemset, &count)| FrequentItemset::new(itemset.clone(), count, n)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;
    use maplit::hashmap;

    fn sample() -> Dataset {
        Dataset::from_transactions(vec![vec![1, 2], vec![2, 3], vec![1, 2, 3], vec![2]])
    }

    fn as_counts(itemsets: &[FrequentItemset]) -> ItemsetCounts {
        itemsets
            .iter()
            .map(|f| (f.itemset.clone(), f.support.count))
            .collect()
    }

    #[test]
    fn update_counts() {
        let transactions = vec![vec![0, 1]];
        let rows: Vec<&Transaction> = transactions.iter().collect();
        let candidate_counts = vec![vec![0], vec![1]];

        let frequent_itemsets = generate_frequent_k_itemset_counts(candidate_counts, &rows, 1);

        assert_eq!(frequent_itemsets, hashmap! { vec![0] => 1, vec![1] => 1 });
    }

    #[test]
    fn update_counts_with_min_support_0_5_2_itemset() {
        let transactions = vec![
            vec![10, 11],
            vec![10, 15],
            vec![10, 13],
            vec![10, 13],
            vec![10, 13],
            vec![11, 13],
        ];
        let rows: Vec<&Transaction> = transactions.iter().collect();
        let candidate_counts = vec![
            vec![10, 11],
            vec![10, 13],
            vec![10, 15],
            vec![11, 13],
            vec![11, 15],
        ];
        let frequent_itemsets = generate_frequent_k_itemset_counts(candidate_counts, &rows, 3);
        assert_eq!(frequent_itemsets, hashmap! { vec![10, 13] => 3 });
    }

    #[test]
    fn frequent_1_itemsets_from_vertical_index() {
        let counts = generate_frequent_1_itemset_counts(&sample(), 2);
        assert_eq!(
            counts,
            hashmap! { vec![1] => 2, vec![2] => 4, vec![3] => 2 }
        );
    }

    #[test]
    fn candidates_from_prev_are_pruned() {
        let itemset_counts = hashmap! {
            vec![10, 11] => 2,
            vec![10, 13] => 2,
            vec![11, 13] => 2,
            vec![10, 14] => 2,
        };
        // [10, 11, 14] and [10, 13, 14] lack [11, 14] and [13, 14]
        let candidates = generate_candidates_from_prev(&itemset_counts);
        assert_eq!(candidates, vec![vec![10, 11, 13]]);
    }

    #[test]
    fn level_counts_keep_full_width() {
        let wide = u32::MAX as usize + 7;
        let level: ItemsetCounts = hashmap! { vec![4] => wide };
        let mut out = Vec::new();

        emit_level(&level, wide, &mut out);

        assert_eq!(out[0].support.count, wide);
        assert_eq!(out[0].frequency(), 1.0);
    }

    #[test]
    fn concrete_scenario() {
        let frequent_itemsets = Apriori::new().mine(&sample(), 0.5).unwrap();

        assert_eq!(
            as_counts(&frequent_itemsets),
            hashmap! {
                vec![1] => 2,
                vec![2] => 4,
                vec![3] => 2,
                vec![1, 2] => 2,
                vec![2, 3] => 2,
            }
        );
        assert_eq!(frequent_itemsets[0].frequency(), 0.5);
        assert_eq!(frequent_itemsets[1].frequency(), 1.0);
    }

    #[test]
    fn levels_are_emitted_in_order() {
        let frequent_itemsets = Apriori::new().mine(&sample(), 0.25).unwrap();
        let itemsets: Vec<Itemset> = frequent_itemsets.into_iter().map(|f| f.itemset).collect();

        assert_eq!(
            itemsets,
            vec![
                vec![1],
                vec![2],
                vec![3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
                vec![1, 2, 3],
            ]
        );
    }

    #[test]
    fn max_len_bounds_levels() {
        let frequent_itemsets = Apriori::new()
            .with_max_len(Some(1))
            .mine(&sample(), 0.0)
            .unwrap();
        assert!(frequent_itemsets.iter().all(|f| f.len() == 1));
        assert_eq!(frequent_itemsets.len(), 3);

        let none = Apriori::new().with_max_len(Some(0)).mine(&sample(), 0.0).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn threshold_one_keeps_universal_items() {
        let frequent_itemsets = Apriori::new().mine(&sample(), 1.0).unwrap();
        assert_eq!(as_counts(&frequent_itemsets), hashmap! { vec![2] => 4 });
    }

    #[test]
    fn threshold_out_of_range() {
        assert!(matches!(
            Apriori::new().mine(&sample(), 1.01),
            Err(MinerError::ThresholdRange(_))
        ));
    }

    #[test]
    fn empty_dataset_yields_nothing() {
        let empty = Dataset::from_transactions(Vec::<Vec<ItemId>>::new());
        assert!(Apriori::new().mine(&empty, 0.0).unwrap().is_empty());
        assert!(Apriori::new().mine(&empty, 1.0).unwrap().is_empty());
    }
}
