use std::collections::HashMap;

use log::{debug, trace};

use crate::Symbol;
use crate::error::{Error, Result};

pub type FreqTable = HashMap<Symbol, u64>;

/// Counts the occurrences of every symbol in `input`.
///
/// Fails with [`Error::InvalidInput`] on an empty sequence, which has no
/// meaningful code.
pub fn analyze(input: &[Symbol]) -> Result<FreqTable> {
    if input.is_empty() {
        return Err(Error::InvalidInput);
    }

    let mut freq = FreqTable::new();
    for &symbol in input {
        *freq.entry(symbol).or_insert(0) += 1;
    }

    trace!("frequencies: {:?}", freq);
    debug!(
        "Analyzed {} symbols, {} distinct",
        input.len(),
        freq.len()
    );
    Ok(freq)
}

/// Shannon entropy of the table in bits per symbol.
pub fn entropy(freq: &FreqTable) -> f64 {
    let total: u64 = freq.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    freq.values()
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum()
}
