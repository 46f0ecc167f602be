//! Command-line interface definitions and argument parsing

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    error::{check_min_frequency, MinerError},
    itemsets::{Apriori, DepthFirst, FrequentItemsetSearch},
    types::ItemsetLength,
};

/// Mine every itemset whose frequency reaches the given threshold
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Dataset file: one transaction per line, items as integers separated by spaces
    pub dataset: PathBuf,

    /// Minimum frequency in [0, 1]
    #[arg(value_parser = parse_min_frequency)]
    pub min_frequency: f64,

    /// Mining engine to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::Apriori)]
    pub algorithm: Algorithm,

    /// Largest itemset size to report
    #[arg(long)]
    pub max_len: Option<ItemsetLength>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Level-wise candidate generation
    Apriori,
    /// Depth-first prefix extension over the vertical index
    Dfs,
    /// Apriori followed by depth-first, one listing after the other
    Both,
}

impl Args {
    /// Engines to run, in output order.
    pub fn engines(&self) -> Vec<Box<dyn FrequentItemsetSearch>> {
        let apriori = Apriori::new().with_max_len(self.max_len);
        let dfs = DepthFirst::new().with_max_len(self.max_len);
        match self.algorithm {
            Algorithm::Apriori => vec![Box::new(apriori)],
            Algorithm::Dfs => vec![Box::new(dfs)],
            Algorithm::Both => vec![Box::new(apriori), Box::new(dfs)],
        }
    }
}

/// Parse and range-check the threshold argument
pub fn parse_min_frequency(value: &str) -> Result<f64, MinerError> {
    let min_frequency: f64 = value.trim().parse().map_err(|_| {
        MinerError::Argument(format!("minimum frequency {:?} is not a number", value))
    })?;
    check_min_frequency(min_frequency)
}
