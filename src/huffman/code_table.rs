use log::trace;
use rustc_hash::FxHashMap;

use super::tree::{HuffmanTree, Node};

/// Each symbol's bit-string, written with the printable characters `0` and
/// `1`.
pub type CodeTable = FxHashMap<char, String>;

/// Reads every symbol's code off its root-to-leaf path, `0` for a left
/// branch and `1` for a right branch.
///
/// The walk keeps its own stack of pending subtrees instead of recursing,
/// so a badly skewed tree cannot run the call stack out. A tree that is a
/// single leaf has no branches at all; its one symbol gets the code `0` so
/// that no code is ever the empty string.
pub fn build_code_table(tree: &HuffmanTree) -> CodeTable {
    let mut table = CodeTable::default();

    let mut stack: Vec<(usize, String)> = vec![(tree.root, String::new())];
    while let Some((id, path)) = stack.pop() {
        match &tree.nodes[id] {
            Node::Leaf { symbol, .. } => {
                let code = if path.is_empty() { "0".to_string() } else { path };
                trace!("Symbol {:?} coded as {}.", symbol, code);
                table.insert(*symbol, code);
            }
            Node::Internal { left, right, .. } => {
                let mut left_path = path.clone();
                left_path.push('0');
                let mut right_path = path;
                right_path.push('1');
                // Left is pushed last so it pops first and the trace
                // lists codes in tree order.
                stack.push((*right, right_path));
                stack.push((*left, left_path));
            }
        }
    }
    table
}

#[cfg(test)]
mod test {
    use super::{build_code_table, CodeTable};
    use crate::huffman::tree::{FreqTable, HuffmanTree};

    fn table_for(freqs: &[(char, u64)]) -> CodeTable {
        let freqs: FreqTable = freqs.iter().copied().collect();
        build_code_table(&HuffmanTree::build(&freqs).unwrap())
    }

    fn assert_prefix_free(table: &CodeTable) {
        let codes: Vec<&str> = table.values().map(|code| code.as_str()).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.starts_with(b), "{} is prefixed by {}", a, b);
                }
            }
        }
    }

    #[test]
    fn classic_codes_test() {
        let table = table_for(&[
            ('a', 5),
            ('b', 9),
            ('c', 12),
            ('d', 13),
            ('e', 16),
            ('f', 45),
        ]);
        assert_eq!(table[&'f'], "0");
        assert_eq!(table[&'c'], "100");
        assert_eq!(table[&'d'], "101");
        assert_eq!(table[&'e'], "111");
        assert_eq!(table[&'a'], "1100");
        assert_eq!(table[&'b'], "1101");
    }

    #[test]
    fn codes_are_prefix_free_test() {
        assert_prefix_free(&table_for(&[
            ('a', 5),
            ('b', 9),
            ('c', 12),
            ('d', 13),
            ('e', 16),
            ('f', 45),
        ]));
        assert_prefix_free(&table_for(&[('x', 1), ('y', 1), ('z', 2), ('w', 7)]));
    }

    #[test]
    fn lone_symbol_gets_nonempty_code_test() {
        let table = table_for(&[('A', 42)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table[&'A'], "0");
    }

    #[test]
    fn two_symbols_one_bit_each_test() {
        let table = table_for(&[('A', 1), ('B', 1)]);
        assert_eq!(table[&'A'], "0");
        assert_eq!(table[&'B'], "1");
    }

    #[test]
    fn heavier_symbols_get_shorter_codes_test() {
        let table = table_for(&[('q', 1), ('r', 2), ('s', 4), ('t', 100)]);
        assert!(table[&'t'].len() < table[&'q'].len());
        assert!(table[&'t'].len() < table[&'r'].len());
        assert!(table[&'s'].len() <= table[&'q'].len());
    }

    #[test]
    fn same_tree_same_table_test() {
        let freqs: FreqTable = [('m', 3), ('n', 3), ('o', 9)].into_iter().collect();
        let tree = HuffmanTree::build(&freqs).unwrap();
        assert_eq!(build_code_table(&tree), build_code_table(&tree));
    }
}
