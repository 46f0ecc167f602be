use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io::{self, Write},
};

use itertools::Itertools;

use crate::itemsets::FrequentItemset;

/// `[1, 3] (0.5)`
impl Display for FrequentItemset {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "[{}] ({})",
            self.itemset.iter().join(", "),
            format_frequency(self.frequency())
        )
    }
}

/// Plain decimal, never an exponent, always with a fractional part (`1.0`, `0.00005`).
pub fn format_frequency(frequency: f64) -> String {
    let mut text = frequency.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// One line per itemset, in the order given.
pub fn write_itemsets<W: Write>(mut writer: W, itemsets: &[FrequentItemset]) -> io::Result<()> {
    for itemset in itemsets {
        writeln!(writer, "{}", itemset)?;
    }
    writer.flush()
}
