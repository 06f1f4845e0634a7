//! Frequency-driven prefix coding, the classical greedy construction.
//!
//! The pieces line up as a pipeline. A frequency table goes in, `tree`
//! merges the two lightest subtrees until one root remains (ordered by the
//! queue in `min_heap`), `code_table` reads each symbol's bit-string off
//! its root-to-leaf path, and `encode`/`decode` carry text across the
//! resulting code in both directions.
//!
//! Bit-strings here are printable `0`/`1` text rather than packed bytes.
//! That keeps the encoded form inspectable in the report file, which is
//! the point of this crate; packing is a concern for an archiver.

pub mod code_table;
pub mod decode;
pub mod encode;
pub mod error;
pub mod min_heap;
pub mod tree;

pub use code_table::{build_code_table, CodeTable};
pub use decode::decode;
pub use encode::encode;
pub use error::HuffmanError;
pub use tree::{FreqTable, HuffmanTree, Node};
