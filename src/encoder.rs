use std::collections::HashMap;
use std::env;
use std::time::Instant;

use log::{debug, error, info};

use huffman_heap::config::Config;
use huffman_heap::{Compression, Error, Symbol, compress};

fn sorted<V: Clone>(table: &HashMap<Symbol, V>) -> Vec<(Symbol, V)> {
    let mut entries: Vec<(Symbol, V)> = table.iter().map(|(&s, v)| (s, v.clone())).collect();
    entries.sort_by_key(|e| e.0);
    entries
}

fn report(out: &Compression, elapsed_ns: u128) {
    let freqs = sorted(&out.frequencies)
        .into_iter()
        .map(|(s, f)| format!("{:?}={}", s, f))
        .collect::<Vec<_>>()
        .join(", ");
    let codes = sorted(&out.codes)
        .into_iter()
        .map(|(s, c)| format!("{:?}={}", s, c))
        .collect::<Vec<_>>()
        .join(", ");
    let stats = &out.stats;

    println!(
        "\r\n✅ Encoding successful.\n\
         📊  Frequencies: {{{}}}\n\
         🔑  Codes:       {{{}}}\n\
         🧾  Encoded:     {}\n\
         📂  Plain:       {} bits ({} symbols, {} distinct)\n\
         💾  Compressed:  {} bits\n\
         🗜️  Reduction:   {:.2}%\n\
         ℹ️  Entropy:     {:.4} bits/symbol (average code length {:.4})\n\
         ⏱️  Elapsed:     {} ns",
        freqs,
        codes,
        out.encoded,
        stats.uncompressed_bits,
        stats.symbols,
        stats.distinct,
        stats.compressed_bits,
        stats.reduction_percent,
        stats.entropy,
        stats.average_code_length,
        elapsed_ns
    );
}

fn main() {
    env_logger::init();

    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(Error::Usage(usage)) => {
            eprintln!("Usage: {}", usage);
            std::process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    debug!("Input source: {:?}", config.source);

    let text = match config.source.read() {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    info!("--- Huffman coding ({} symbols) ---", text.chars().count());
    let start = Instant::now();
    let result = compress(&text);
    let elapsed = start.elapsed();

    match result {
        Ok(out) => report(&out, elapsed.as_nanos()),
        Err(Error::InvalidInput) => {
            eprintln!("❌ {}", Error::InvalidInput);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Internal error: {}", e);
            std::process::exit(2);
        }
    }
}
