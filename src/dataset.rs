use std::{
    collections::{BTreeSet, HashMap},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{
    error::DatasetError,
    tidset::TidSet,
    types::{ItemId, Transaction, TransactionId},
};

/// In-memory transactional dataset with both a horizontal view (transaction to
/// items) and a vertical view (item to transactions). Read-only once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    transactions: Vec<Transaction>,
    items: Vec<ItemId>,
    vertical: HashMap<ItemId, TidSet>,
}

impl Dataset {
    /// Reads one transaction per non-blank line of whitespace separated item ids.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_owned(),
            source,
        })?;
        let dataset = Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            DatasetError::Read(source) => DatasetError::Io {
                path: path.to_owned(),
                source,
            },
            other => other,
        })?;
        debug!(
            path = %path.display(),
            transactions = dataset.transaction_count(),
            items = dataset.item_count(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DatasetError> {
        let mut rows: Vec<Transaction> = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(DatasetError::Read)?;
            if line.trim().is_empty() {
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<ItemId>()
                        .map_err(|_| DatasetError::MalformedItem {
                            line: line_no + 1,
                            token: token.to_owned(),
                        })
                })
                .collect::<Result<BTreeSet<ItemId>, _>>()?;
            rows.push(row.into_iter().collect());
        }

        Ok(Self::from_transactions(rows))
    }

    /// Builds the index from already parsed rows. Repeated items in a row collapse.
    pub fn from_transactions<T, I>(rows: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: IntoIterator<Item = ItemId>,
    {
        let transactions: Vec<Transaction> = rows
            .into_iter()
            .map(|row| {
                let mut items: Transaction = row.into_iter().collect();
                items.sort_unstable();
                items.dedup();
                items
            })
            .collect();

        let n = transactions.len();
        let mut vertical: HashMap<ItemId, TidSet> = HashMap::new();
        for (tid, transaction) in transactions.iter().enumerate() {
            for &item in transaction {
                vertical
                    .entry(item)
                    .or_insert_with(|| TidSet::empty(n))
                    .insert(tid);
            }
        }

        let mut items: Vec<ItemId> = vertical.keys().copied().collect();
        items.sort_unstable();

        Dataset {
            transactions,
            items,
            vertical,
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Distinct items, ascending.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn transactions_containing(&self, item: ItemId) -> Option<&TidSet> {
        self.vertical.get(&item)
    }

    pub fn transaction(&self, tid: TransactionId) -> &[ItemId] {
        &self.transactions[tid]
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Every transaction id; the tidset of the empty itemset.
    pub fn all_transactions(&self) -> TidSet {
        TidSet::full(self.transaction_count())
    }

    /// Vertical view in ascending item order.
    pub fn vertical(&self) -> impl Iterator<Item = (ItemId, &TidSet)> + '_ {
        self.items.iter().map(move |&item| (item, &self.vertical[&item]))
    }
}
