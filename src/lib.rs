//! Huffman coding of text files, with a readable report as the output.
//!
//! Builds a prefix-free code for the symbols of a UTF-8 text from their
//! observed frequencies, encodes the text as a printable `0`/`1` string,
//! and decodes such strings back against the same tree. Multi-byte
//! symbols are first-class, a frequency is counted per character rather
//! than per byte.
//!
//! Basic usage to report on a file is as follows:
//!
//! `$> hufftext test.txt`
//!
//! This reads test.txt and creates output.txt holding the code of every
//! symbol, the encoded text, and the text decoded back from those bits.
//! The input file is left alone.
pub mod codec;
pub mod huffman;
pub mod tools;
