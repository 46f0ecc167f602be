//! Frequent itemset mining.
//!
//! A [`Dataset`] is loaded once and indexed both horizontally and vertically.
//! Two independent engines enumerate every itemset whose frequency reaches a
//! threshold: [`Apriori`] searches level by level with join and prune steps,
//! [`DepthFirst`] extends prefixes over intersected transaction bitsets. They
//! return the same itemsets with the same supports.

pub mod cli;
pub mod combi;
pub mod dataset;
pub mod emit;
pub mod error;
pub mod itemsets;
pub mod support;
pub mod tidset;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use dataset::Dataset;
pub use emit::write_itemsets;
pub use error::{DatasetError, MinerError};
pub use itemsets::{Apriori, DepthFirst, FrequentItemset, FrequentItemsetSearch};
pub use support::{support, Support};
pub use tidset::TidSet;
