use log::{debug, error};

use crate::Symbol;
use crate::code::CodeTable;
use crate::error::{Error, Result};

/// Fixed width of one uncompressed symbol.
pub const BITS_PER_SYMBOL: u64 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub symbols: usize,
    pub distinct: usize,
    pub uncompressed_bits: u64,
    pub compressed_bits: u64,
    pub reduction_percent: f64,
    /// Lower bound on the average code length, in bits/symbol.
    pub entropy: f64,
    pub average_code_length: f64,
}

impl Stats {
    fn new(symbols: usize, distinct: usize, compressed_bits: u64, entropy: f64) -> Self {
        let uncompressed_bits = symbols as u64 * BITS_PER_SYMBOL;
        let reduction_percent = if uncompressed_bits > 0 {
            (uncompressed_bits as f64 - compressed_bits as f64) / uncompressed_bits as f64 * 100.0
        } else {
            0.0
        };
        let average_code_length = if symbols > 0 {
            compressed_bits as f64 / symbols as f64
        } else {
            0.0
        };
        Stats {
            symbols,
            distinct,
            uncompressed_bits,
            compressed_bits,
            reduction_percent,
            entropy,
            average_code_length,
        }
    }
}

/// Replaces every symbol of `input` with its code.
///
/// A symbol missing from `codes` means the table was not derived from this
/// input; that is reported as [`Error::MissingCode`].
pub fn encode(input: &[Symbol], codes: &CodeTable) -> Result<String> {
    debug!("Starting data encoding...");
    let mut bits = String::with_capacity(input.len() * 4);

    for symbol in input {
        match codes.get(symbol) {
            Some(code) => bits.push_str(code),
            None => {
                error!(
                    "CRITICAL: Symbol {:?} found in data but not in code table!",
                    symbol
                );
                return Err(Error::MissingCode { symbol: *symbol });
            }
        }
    }

    debug!(
        "Encoded {} symbols into {} bits",
        input.len(),
        bits.len()
    );
    Ok(bits)
}

/// Computes size statistics for an encoded bitstring.
pub fn stats(input: &[Symbol], codes: &CodeTable, encoded: &str, entropy: f64) -> Stats {
    Stats::new(input.len(), codes.len(), encoded.len() as u64, entropy)
}
