use super::error::HuffmanError;
use super::tree::{HuffmanTree, Node};

/// Walks the tree over a printable bit-string and rebuilds the text.
///
/// The walk starts at the root, steps left on `0` and right on `1`, and
/// every time it lands on a leaf it emits that symbol and restarts from the
/// root. Three things count as malformed input, each reported with the bit
/// position where the walk gave up: a character other than `0`/`1`, a `1`
/// against a tree that is a single leaf, and input that runs out while a
/// code is still incomplete.
pub fn decode(bits: &str, tree: &HuffmanTree) -> Result<String, HuffmanError> {
    let mut text = String::new();

    // A lone-leaf tree has nowhere to descend. Its symbol's code is "0",
    // so the input must be a plain run of zeros, one per symbol.
    if let Node::Leaf { symbol, .. } = tree.nodes[tree.root] {
        for (pos, bit) in bits.chars().enumerate() {
            if bit != '0' {
                return Err(HuffmanError::MalformedCode(pos));
            }
            text.push(symbol);
        }
        return Ok(text);
    }

    let mut current = tree.root;
    for (pos, bit) in bits.chars().enumerate() {
        // Internal nodes always carry both children, so a walk that only
        // ever sees valid bits cannot fall off the tree.
        let next = match (&tree.nodes[current], bit) {
            (Node::Internal { left, .. }, '0') => *left,
            (Node::Internal { right, .. }, '1') => *right,
            _ => return Err(HuffmanError::MalformedCode(pos)),
        };
        if let Node::Leaf { symbol, .. } = tree.nodes[next] {
            text.push(symbol);
            current = tree.root;
        } else {
            current = next;
        }
    }

    // Stopping anywhere but the root means the last code was cut short.
    // Every character consumed so far was an ASCII bit, so the byte length
    // is also the bit position one past the end.
    if current != tree.root {
        return Err(HuffmanError::MalformedCode(bits.len()));
    }
    Ok(text)
}

#[cfg(test)]
mod test {
    use super::decode;
    use crate::huffman::code_table::build_code_table;
    use crate::huffman::encode::encode;
    use crate::huffman::error::HuffmanError;
    use crate::huffman::tree::{FreqTable, HuffmanTree};

    fn tree_for(text: &str) -> HuffmanTree {
        let mut freqs = FreqTable::default();
        for symbol in text.chars() {
            *freqs.entry(symbol).or_insert(0) += 1;
        }
        HuffmanTree::build(&freqs).unwrap()
    }

    fn roundtrip(text: &str) {
        let tree = tree_for(text);
        let table = build_code_table(&tree);
        let bits = encode(text, &table).unwrap();
        assert_eq!(decode(&bits, &tree).unwrap(), text);
    }

    #[test]
    fn roundtrip_ascii_test() {
        roundtrip("abracadabra");
        roundtrip("the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn roundtrip_unicode_test() {
        roundtrip("привет, мир");
        roundtrip("наш текст с пробелами\nи переводами строк");
    }

    #[test]
    fn empty_bits_decode_to_empty_test() {
        let tree = tree_for("abracadabra");
        assert_eq!(decode("", &tree).unwrap(), "");
    }

    #[test]
    fn lone_leaf_zeros_test() {
        let tree = tree_for("AAAAA");
        assert_eq!(decode("000", &tree).unwrap(), "AAA");
    }

    #[test]
    fn lone_leaf_rejects_one_test() {
        let tree = tree_for("AAAAA");
        assert_eq!(decode("001", &tree), Err(HuffmanError::MalformedCode(2)));
    }

    #[test]
    fn non_bit_character_test() {
        // Codes here are a = "1", b = "00", c = "01". Position 2 sits in
        // the middle of a code, where only a bit may follow.
        let tree = tree_for("aaabc");
        assert_eq!(decode("10x1", &tree), Err(HuffmanError::MalformedCode(2)));
    }

    #[test]
    fn truncated_input_test() {
        let tree = tree_for("aaabc");
        let table = build_code_table(&tree);
        let bits = encode("ab", &table).unwrap();
        assert_eq!(bits, "100");
        let cut = &bits[..2];
        assert_eq!(decode(cut, &tree), Err(HuffmanError::MalformedCode(2)));
    }
}
