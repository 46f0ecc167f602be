use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::{
    itemsets::{Apriori, DepthFirst, FrequentItemset, FrequentItemsetSearch},
    types::{ItemId, ItemsetLength},
    Dataset,
};

type PyFrequentItemsets = Vec<(Vec<ItemId>, f64)>;

#[pymodule]
fn freqmine(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori, m)?)?;
    m.add_function(wrap_pyfunction!(dfs, m)?)?;
    Ok(())
}

/// Frequent itemsets by level-wise search.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_frequency, max_len=None)")]
fn apriori(
    transactions: Vec<Vec<ItemId>>,
    min_frequency: f64,
    max_len: Option<ItemsetLength>,
) -> PyResult<PyFrequentItemsets> {
    run(Apriori::new().with_max_len(max_len), transactions, min_frequency)
}

/// Frequent itemsets by depth-first search over the vertical index.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_frequency, max_len=None)")]
fn dfs(
    transactions: Vec<Vec<ItemId>>,
    min_frequency: f64,
    max_len: Option<ItemsetLength>,
) -> PyResult<PyFrequentItemsets> {
    run(DepthFirst::new().with_max_len(max_len), transactions, min_frequency)
}

fn run<S: FrequentItemsetSearch>(
    engine: S,
    transactions: Vec<Vec<ItemId>>,
    min_frequency: f64,
) -> PyResult<PyFrequentItemsets> {
    let dataset = Dataset::from_transactions(transactions);
    let itemsets = engine
        .mine(&dataset, min_frequency)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(convert_itemsets(itemsets))
}

fn convert_itemsets(itemsets: Vec<FrequentItemset>) -> PyFrequentItemsets {
    itemsets
        .into_iter()
        .map(|x| {
            let frequency = x.frequency();
            (x.itemset, frequency)
        })
        .collect()
}
