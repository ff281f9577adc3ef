use std::collections::HashMap;

use log::{debug, trace};

use crate::Symbol;
use crate::tree::Node;

pub type CodeTable = HashMap<Symbol, String>;

/// Code given to the only symbol of a one-leaf tree.
pub const LONE_SYMBOL_CODE: &str = "0";

/// Assigns every leaf the path leading to it: `0` for a left edge, `1` for a
/// right edge.
///
/// Walks the tree with an explicit stack, so depth is bounded by the heap
/// rather than the call stack.
pub fn generate(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();

    if let Node::Leaf { symbol, .. } = root {
        table.insert(*symbol, LONE_SYMBOL_CODE.to_string());
        debug!("Single symbol input, assigned fixed code '{LONE_SYMBOL_CODE}'");
        return table;
    }

    let mut stack: Vec<(&Node, String)> = vec![(root, String::new())];
    while let Some((node, prefix)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                trace!(
                    "Assigning code to symbol {:?} (U+{:04X}) : '{}'",
                    symbol,
                    *symbol as u32,
                    prefix
                );
                table.insert(*symbol, prefix);
            }
            Node::Internal { left, right, .. } => {
                stack.push((&**right, format!("{}1", prefix)));
                stack.push((&**left, prefix + "0"));
            }
        }
    }

    debug!("Code table built with {} entries", table.len());
    table
}
