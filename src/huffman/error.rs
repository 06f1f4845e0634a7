use std::fmt::{self, Display, Formatter};
use std::io;

/// Failure conditions of the coding core. All four surface as values so the
/// caller decides what to do; nothing is skipped or dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// Tree construction was given no symbol with a positive frequency.
    EmptyAlphabet,
    /// Encoding met a symbol that has no code table entry.
    UnknownSymbol(char),
    /// Decoding failed at the given bit position. The input held a character
    /// other than `0`/`1`, asked for a branch the tree does not have, or
    /// ended in the middle of a code.
    MalformedCode(usize),
    /// An extract was attempted on an empty queue. The tree builder's loop
    /// bound rules this out, so seeing it means a logic fault, not bad input.
    EmptyQueue,
}

impl Display for HuffmanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HuffmanError::EmptyAlphabet => {
                write!(f, "no symbol has a positive frequency")
            }
            HuffmanError::UnknownSymbol(symbol) => {
                write!(f, "symbol {:?} has no code table entry", symbol)
            }
            HuffmanError::MalformedCode(pos) => {
                write!(f, "malformed bit-string at bit {}", pos)
            }
            HuffmanError::EmptyQueue => {
                write!(f, "extract from an empty queue")
            }
        }
    }
}

impl std::error::Error for HuffmanError {}

impl From<HuffmanError> for io::Error {
    fn from(e: HuffmanError) -> Self {
        io::Error::new(io::ErrorKind::Other, e.to_string())
    }
}
