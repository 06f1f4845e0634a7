//! The coding tree. Nodes live in a flat arena and point at their children
//! by index, so the whole tree is one allocation and goes away when the
//! arena drops. No recursion is needed to build or free it.

use log::debug;
use rustc_hash::FxHashMap;

use super::error::HuffmanError;
use super::min_heap::MinHeap;

/// How often each symbol occurs in the input.
pub type FreqTable = FxHashMap<char, u64>;

/// One arena slot. Leaves carry a symbol, internal nodes carry the indices
/// of their two children. Both remember the total weight below them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: char, weight: u64 },
    Internal { weight: u64, left: usize, right: usize },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A finished Huffman tree: the arena plus the index of the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub nodes: Vec<Node>,
    pub root: usize,
}

impl HuffmanTree {
    /// Builds the tree for a frequency table by the classical greedy merge.
    ///
    /// Every symbol with a positive count becomes a leaf, the two lightest
    /// subtrees merge under a new internal node until one root remains.
    /// The first of the two extracted becomes the left child. A table with
    /// no positive counts is refused with `EmptyAlphabet`.
    ///
    /// Leaves are queued in symbol order. Together with the queue's
    /// first-in tie break this pins down one tree per table, no matter how
    /// the map chooses to iterate.
    pub fn build(freqs: &FreqTable) -> Result<Self, HuffmanError> {
        let mut symbols: Vec<(char, u64)> = freqs
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&symbol, &count)| (symbol, count))
            .collect();
        symbols.sort_unstable();

        if symbols.is_empty() {
            return Err(HuffmanError::EmptyAlphabet);
        }

        // A tree over n leaves has exactly 2n - 1 nodes, so the arena never
        // reallocates. The queue starts at n and shrinks by one per merge.
        let mut nodes: Vec<Node> = Vec::with_capacity(symbols.len() * 2 - 1);
        for &(symbol, weight) in &symbols {
            nodes.push(Node::Leaf { symbol, weight });
        }
        let mut queue =
            MinHeap::from_entries(nodes.iter().enumerate().map(|(id, node)| (node.weight(), id)));

        while queue.len() > 1 {
            let first = queue.extract_min()?;
            let second = queue.extract_min()?;
            let weight = first.weight + second.weight;
            nodes.push(Node::Internal {
                weight,
                left: first.node,
                right: second.node,
            });
            queue.insert(weight, nodes.len() - 1);
        }
        let root = queue.extract_min()?.node;

        debug!(
            "Built a coding tree over {} symbols, {} nodes in all.",
            symbols.len(),
            nodes.len()
        );
        Ok(HuffmanTree { nodes, root })
    }

    /// Count of distinct symbols, one per leaf.
    pub fn symbol_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }
}
