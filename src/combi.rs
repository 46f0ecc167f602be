use std::collections::HashSet;

use itertools::Itertools;

use crate::types::{ItemId, Itemset};

/// Join frequent k-itemsets that share their first k-1 items into (k+1)-candidates.
///
/// Itemsets must be sorted ascending internally. Each candidate comes out
/// sorted and exactly once.
pub fn join_step(mut itemsets: Vec<Itemset>) -> Vec<Itemset> {
    if itemsets.is_empty() {
        return vec![];
    }

    itemsets.sort_unstable();

    let mut candidates: Vec<Itemset> = Vec::with_capacity(itemsets.len());
    let mut tail_items: Vec<ItemId> = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let (prefix, _) = itemsets[i].split_at(itemsets[i].len() - 1);

        tail_items.clear();
        let mut skip = 0;
        for itemset in &itemsets[i..] {
            let (other_prefix, last) = itemset.split_at(itemset.len() - 1);
            if other_prefix != prefix {
                break;
            }
            tail_items.push(last[0]);
            skip += 1;
        }

        // tails are ascending because the block is sorted
        for (&a, &b) in tail_items.iter().tuple_combinations() {
            let mut candidate = Vec::with_capacity(prefix.len() + 2);
            candidate.extend_from_slice(prefix);
            candidate.push(a);
            candidate.push(b);
            candidates.push(candidate);
        }

        i += skip;
    }

    candidates
}

/// Drop candidates with a k-subset missing from `frequent`.
///
/// The two subsets obtained by removing one of the last two items are the
/// joined parents and are skipped.
pub fn prune_step(candidates: Vec<Itemset>, frequent: &HashSet<Itemset>) -> Vec<Itemset> {
    let mut subset: Itemset = Vec::new();
    candidates
        .into_iter()
        .filter(|candidate| {
            let k = candidate.len();
            (0..k.saturating_sub(2)).all(|skip| {
                subset.clear();
                subset.extend(
                    candidate
                        .iter()
                        .enumerate()
                        .filter(|&(pos, _)| pos != skip)
                        .map(|(_, &item)| item),
                );
                frequent.contains(&subset)
            })
        })
        .collect()
}
