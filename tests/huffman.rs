use std::collections::HashSet;

use huffman_heap::code::generate;
use huffman_heap::encoding::encode;
use huffman_heap::frequency::analyze;
use huffman_heap::tree::build;
use huffman_heap::{Error, Node, Symbol, compress, compress_symbols};
use proptest::prelude::*;

// Walks the tree from the root for every bit, emitting a symbol at each leaf.
fn decode(root: &Node, bits: &str) -> Vec<Symbol> {
    if let Node::Leaf { symbol, .. } = root {
        return bits.chars().map(|_| *symbol).collect();
    }
    let mut out = Vec::new();
    let mut node = root;
    for bit in bits.chars() {
        if let Node::Internal { left, right, .. } = node {
            node = if bit == '0' { &**left } else { &**right };
        }
        if let Node::Leaf { symbol, .. } = node {
            out.push(*symbol);
            node = root;
        }
    }
    out
}

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-f]{1,64}",
        ".{1,128}",
        "[ab]{1,16}[a-z ]{0,200}",
    ]
}

#[test]
fn aaabbc() {
    let input: Vec<Symbol> = "aaabbc".chars().collect();
    let freq = analyze(&input).unwrap();
    assert_eq!(freq[&'a'], 3);
    assert_eq!(freq[&'b'], 2);
    assert_eq!(freq[&'c'], 1);

    let root = build(&freq).unwrap();
    let codes = generate(&root);
    assert!(codes[&'a'].len() <= codes[&'b'].len());
    assert!(codes[&'b'].len() <= codes[&'c'].len());

    let encoded = encode(&input, &codes).unwrap();
    let expected: String = input.iter().map(|s| codes[s].as_str()).collect();
    assert_eq!(encoded, expected);
    assert_eq!(decode(&root, &encoded), input);
}

#[test]
fn single_symbol() {
    let out = compress("zzzz").unwrap();
    assert_eq!(out.codes.len(), 1);
    assert_eq!(out.codes[&'z'].len(), 1);
    assert_eq!(out.encoded.len(), 4);
    assert_eq!(out.stats.uncompressed_bits, 32);
    assert!((out.stats.reduction_percent - 87.5).abs() < 1e-9);
}

#[test]
fn empty() {
    assert!(matches!(compress(""), Err(Error::InvalidInput)));
    assert!(matches!(compress_symbols(&[]), Err(Error::InvalidInput)));
}

proptest! {
    #[test]
    fn tree_shape(input in text()) {
        let symbols: Vec<Symbol> = input.chars().collect();
        let freq = analyze(&symbols).unwrap();
        let root = build(&freq).unwrap();
        // Leaf weights add up to the input length.
        prop_assert_eq!(root.weight(), symbols.len() as u64);
        prop_assert_eq!(root.leaf_count(), freq.len());
        prop_assert_eq!(root.internal_count(), freq.len() - 1);
    }

    #[test]
    fn codes(input in text()) {
        let out = compress(&input).unwrap();
        let distinct = input.chars().collect::<HashSet<Symbol>>();

        // One non-empty code per distinct symbol.
        prop_assert_eq!(out.codes.len(), distinct.len());
        prop_assert_eq!(out.codes.len(), out.frequencies.len());
        for s in &distinct {
            prop_assert!(!out.codes[s].is_empty());
        }

        // No code is a prefix of another.
        for (s1, c1) in &out.codes {
            for (s2, c2) in &out.codes {
                prop_assert!(s1 == s2 || !c2.starts_with(c1.as_str()));
            }
        }

        // Kraft's inequality is tight for a full binary tree.
        let kraft: f64 = out.codes.values().map(|c| 0.5f64.powi(c.len() as i32)).sum();
        if out.codes.len() == 1 {
            prop_assert_eq!(kraft, 0.5);
        } else {
            prop_assert!((kraft - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn more_frequent_never_longer(input in text()) {
        let out = compress(&input).unwrap();
        for (s1, f1) in &out.frequencies {
            for (s2, f2) in &out.frequencies {
                if f1 > f2 {
                    prop_assert!(out.codes[s1].len() <= out.codes[s2].len());
                }
            }
        }
    }

    #[test]
    fn deterministic(input in text()) {
        let a = compress(&input).unwrap();
        let b = compress(&input).unwrap();
        prop_assert_eq!(a.codes, b.codes);
        prop_assert_eq!(a.encoded, b.encoded);
    }

    #[test]
    fn e2e(input in text()) {
        let symbols: Vec<Symbol> = input.chars().collect();
        let root = build(&analyze(&symbols).unwrap()).unwrap();
        let codes = generate(&root);
        let encoded = encode(&symbols, &codes).unwrap();
        prop_assert_eq!(decode(&root, &encoded), symbols);
    }

    #[test]
    fn stats(input in text()) {
        let out = compress(&input).unwrap();
        let n = input.chars().count() as u64;
        prop_assert_eq!(out.stats.uncompressed_bits, n * 8);
        prop_assert_eq!(out.stats.compressed_bits, out.encoded.len() as u64);
        // Huffman codes are within one bit of the entropy.
        prop_assert!(out.stats.average_code_length + 1e-9 >= out.stats.entropy);
        prop_assert!(out.stats.average_code_length < out.stats.entropy + 1.0 + 1e-9);
    }
}
