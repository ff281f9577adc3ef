//! # huffman-heap
//!
//! Computes a [Huffman code](https://en.wikipedia.org/wiki/Huffman_coding) for a
//! sequence of symbols and reports how much shorter the encoded form is than a
//! fixed 8 bits per symbol.
//!
//! The merge tree is built on a hand-rolled array-backed [`MinHeap`] whose
//! ordering is injected at construction.
//!
//! ```
//! let out = huffman_heap::compress("aaabbc").unwrap();
//! assert_eq!(out.codes[&'a'], "0");
//! assert_eq!(out.encoded, "000111110");
//! assert_eq!(out.stats.uncompressed_bits, 48);
//! assert_eq!(out.stats.compressed_bits, 9);
//! ```

pub mod code;
pub mod config;
pub mod encoding;
pub mod error;
pub mod frequency;
pub mod min_heap;
pub mod tree;

use log::debug;

pub use code::CodeTable;
pub use encoding::Stats;
pub use error::{Error, Result};
pub use frequency::FreqTable;
pub use min_heap::MinHeap;
pub use tree::{HuffmanTree, Node};

/// One atomic unit of the input alphabet.
pub type Symbol = char;

/// Everything one run of the pipeline produces.
#[derive(Debug, Clone)]
pub struct Compression {
    pub frequencies: FreqTable,
    pub codes: CodeTable,
    pub encoded: String,
    pub stats: Stats,
}

/// Runs the whole pipeline on `text`, one `char` per symbol.
pub fn compress(text: &str) -> Result<Compression> {
    let symbols: Vec<Symbol> = text.chars().collect();
    compress_symbols(&symbols)
}

/// Runs analyze, build, generate and encode on fresh state.
pub fn compress_symbols(input: &[Symbol]) -> Result<Compression> {
    let frequencies = frequency::analyze(input)?;
    let root = tree::build(&frequencies)?;
    let codes = code::generate(&root);
    drop(root);

    let encoded = encoding::encode(input, &codes)?;
    let stats = encoding::stats(input, &codes, &encoded, frequency::entropy(&frequencies));
    debug!(
        "Compressed {} bits down to {} bits ({:.2}%)",
        stats.uncompressed_bits, stats.compressed_bits, stats.reduction_percent
    );

    Ok(Compression {
        frequencies,
        codes,
        encoded,
        stats,
    })
}
