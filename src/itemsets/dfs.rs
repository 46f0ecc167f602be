use tracing::{debug, info};

use crate::{
    dataset::Dataset,
    error::{check_min_frequency, MinerError},
    itemsets::{within, FrequentItemset, FrequentItemsetSearch},
    support::{extend, min_support_count},
    tidset::TidSet,
    types::{ItemId, Itemset, ItemsetLength},
};

/// Depth-first miner over the vertical index (Eclat style).
///
/// Every itemset is reached by appending items in ascending order, so each one
/// has a single path from the root and is emitted once, in lexicographic order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst {
    max_len: Option<ItemsetLength>,
}

impl DepthFirst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop extending prefixes once they hold `max_len` items.
    pub fn with_max_len(mut self, max_len: Option<ItemsetLength>) -> Self {
        self.max_len = max_len;
        self
    }
}

/// A node of the prefix-extension tree.
struct Frame {
    prefix: Itemset,
    tids: TidSet,
    /// Position in the frequent item list of the first extension to try.
    next: usize,
}

impl FrequentItemsetSearch for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
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

        // An infrequent item cannot be part of any frequent itemset.
        let items: Vec<(ItemId, &TidSet)> = dataset
            .vertical()
            .filter(|(_, tids)| tids.len() >= min_support_count)
            .collect();
        debug!(
            frequent_items = items.len(),
            min_support_count, "starting depth-first search"
        );

        let mut stack: Vec<Frame> = vec![Frame {
            prefix: Vec::new(),
            tids: dataset.all_transactions(),
            next: 0,
        }];
        let mut children: Vec<Frame> = Vec::new();
        let mut visited: usize = 0;

        while let Some(frame) = stack.pop() {
            visited += 1;
            if !frame.prefix.is_empty() {
                let count = frame.tids.len();
                frequent_itemsets.push(FrequentItemset::new(frame.prefix.clone(), count, n));
            }
            if !within(self.max_len, frame.prefix.len() + 1) {
                continue;
            }

            children.clear();
            for (position, &(item, item_tids)) in items.iter().enumerate().skip(frame.next) {
                if frame.tids.intersection_len(item_tids) < min_support_count {
                    // no superset through this item can recover support
                    continue;
                }
                let tids = extend(&frame.tids, item, dataset);
                let mut prefix = Vec::with_capacity(frame.prefix.len() + 1);
                prefix.extend_from_slice(&frame.prefix);
                prefix.push(item);
                children.push(Frame {
                    prefix,
                    tids,
                    next: position + 1,
                });
            }
            // reversed so the smallest extension is popped first
            stack.extend(children.drain(..).rev());
        }

        info!(
            algorithm = self.name(),
            itemsets = frequent_itemsets.len(),
            nodes = visited,
            "mining finished"
        );
        Ok(frequent_itemsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itemsets::Apriori;
    use maplit::hashset;
    use std::collections::HashSet;

    fn sample() -> Dataset {
        Dataset::from_transactions(vec![vec![1, 2], vec![2, 3], vec![1, 2, 3], vec![2]])
    }

    fn as_set(itemsets: Vec<FrequentItemset>) -> HashSet<(Itemset, usize)> {
        itemsets
            .into_iter()
            .map(|f| (f.itemset, f.support.count))
            .collect()
    }

    #[test]
    fn concrete_scenario() {
        let frequent_itemsets = DepthFirst::new().mine(&sample(), 0.5).unwrap();

        assert_eq!(frequent_itemsets.len(), 5);
        assert_eq!(
            as_set(frequent_itemsets),
            hashset! {
                (vec![1], 2),
                (vec![2], 4),
                (vec![3], 2),
                (vec![1, 2], 2),
                (vec![2, 3], 2),
            }
        );
    }

    #[test]
    fn lexicographic_preorder() {
        let frequent_itemsets = DepthFirst::new().mine(&sample(), 0.25).unwrap();
        let itemsets: Vec<Itemset> = frequent_itemsets.into_iter().map(|f| f.itemset).collect();

        assert_eq!(
            itemsets,
            vec![
                vec![1],
                vec![1, 2],
                vec![1, 2, 3],
                vec![1, 3],
                vec![2],
                vec![2, 3],
                vec![3],
            ]
        );
    }

    #[test]
    fn infrequent_branch_does_not_stop_siblings() {
        // [1, 2] is rare but [1, 3] is not
        let dataset = Dataset::from_transactions(vec![
            vec![1, 2],
            vec![1, 3],
            vec![1, 3],
            vec![3],
        ]);
        let frequent_itemsets = DepthFirst::new().mine(&dataset, 0.5).unwrap();

        assert_eq!(
            as_set(frequent_itemsets),
            hashset! {
                (vec![1], 3),
                (vec![3], 3),
                (vec![1, 3], 2),
            }
        );
    }

    #[test]
    fn agrees_with_apriori() {
        let dataset = Dataset::from_transactions(vec![
            vec![1, 2, 5],
            vec![2, 4],
            vec![2, 3],
            vec![1, 2, 4],
            vec![1, 3],
            vec![2, 3],
            vec![1, 3],
            vec![1, 2, 3, 5],
            vec![1, 2, 3],
        ]);
        for &min_frequency in &[0.0, 0.2, 0.22, 0.5, 0.7, 1.0] {
            let dfs = DepthFirst::new().mine(&dataset, min_frequency).unwrap();
            let apriori = Apriori::new().mine(&dataset, min_frequency).unwrap();
            assert_eq!(dfs.len(), apriori.len(), "threshold {}", min_frequency);
            assert_eq!(as_set(dfs), as_set(apriori), "threshold {}", min_frequency);
        }
    }

    #[test]
    fn max_len_bounds_depth() {
        let frequent_itemsets = DepthFirst::new()
            .with_max_len(Some(2))
            .mine(&sample(), 0.0)
            .unwrap();
        assert_eq!(frequent_itemsets.len(), 6);
        assert!(frequent_itemsets.iter().all(|f| f.len() <= 2));
    }

    #[test]
    fn threshold_one() {
        let frequent_itemsets = DepthFirst::new().mine(&sample(), 1.0).unwrap();
        assert_eq!(as_set(frequent_itemsets), hashset! { (vec![2], 4) });
    }

    #[test]
    fn empty_dataset_yields_nothing() {
        let empty = Dataset::from_transactions(Vec::<Vec<ItemId>>::new());
        assert!(DepthFirst::new().mine(&empty, 0.0).unwrap().is_empty());
    }

    #[test]
    fn rejects_nan_threshold() {
        assert!(DepthFirst::new().mine(&sample(), f64::NAN).is_err());
    }
}
