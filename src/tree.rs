use log::{debug, trace};

use crate::Symbol;
use crate::error::{Error, Result};
use crate::frequency::FreqTable;
use crate::min_heap::MinHeap;

/// A node of the merge tree. Internal nodes own both children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

pub type HuffmanTree = Node;

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.count(true)
    }

    pub fn internal_count(&self) -> usize {
        self.count(false)
    }

    fn count(&self, leaves: bool) -> usize {
        let mut stack = vec![self];
        let mut n = 0;
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => n += leaves as usize,
                Node::Internal { left, right, .. } => {
                    n += !leaves as usize;
                    stack.push(&**left);
                    stack.push(&**right);
                }
            }
        }
        n
    }

    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Heap ordering of pending nodes: weight first, then the symbol's code
/// point for leaves, then creation order. Internal nodes sort after any leaf
/// of the same weight and among themselves by creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MergeKey {
    weight: u64,
    symbol: u32,
    seq: usize,
}

impl MergeKey {
    fn of(node: &Node, seq: usize) -> Self {
        MergeKey {
            weight: node.weight(),
            symbol: node.symbol().map_or(u32::MAX, u32::from),
            seq,
        }
    }
}

struct HeapNode {
    key: MergeKey,
    node: Node,
}

impl HeapNode {
    fn new(node: Node, seq: usize) -> Self {
        HeapNode {
            key: MergeKey::of(&node, seq),
            node,
        }
    }
}

/// Builds the merge tree by repeatedly combining the two lightest nodes.
///
/// A table with a single symbol yields that leaf as the root.
pub fn build(frequencies: &FreqTable) -> Result<HuffmanTree> {
    if frequencies.is_empty() {
        return Err(Error::InvalidInput);
    }
    debug!(
        "Building Huffman tree from {} unique symbols",
        frequencies.len()
    );

    // Seed in a fixed order so creation sequence numbers don't depend on
    // hash map iteration.
    let mut leaves: Vec<(Symbol, u64)> = frequencies.iter().map(|(&s, &w)| (s, w)).collect();
    leaves.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut heap = MinHeap::with_capacity(leaves.len(), |a: &HeapNode, b: &HeapNode| {
        a.key.cmp(&b.key)
    });
    let mut seq = 0;
    for (symbol, weight) in leaves {
        heap.insert(HeapNode::new(Node::Leaf { symbol, weight }, seq));
        seq += 1;
    }

    while heap.len() > 1 {
        let a = heap.extract_min()?;
        let b = heap.extract_min()?;
        trace!(
            "merging {:?} (w={}) + {:?} (w={})",
            a.node.symbol(),
            a.key.weight,
            b.node.symbol(),
            b.key.weight
        );
        heap.insert(HeapNode::new(Node::merge(a.node, b.node), seq));
        seq += 1;
    }

    let root = heap.extract_min()?.node;
    debug!("Tree construction complete, root weight {}", root.weight());
    Ok(root)
}
