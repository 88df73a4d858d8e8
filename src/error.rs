//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for code construction, encoding, and decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input contained no symbols, so there is no tree to build.
    #[error("empty alphabet: no symbols to build a code from")]
    EmptyAlphabet,

    /// Encoding input contained a symbol the code table was not built from.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol {
        /// The symbol with no code table entry.
        symbol: char,
        /// Its index in the encoding input.
        position: usize,
    },

    /// The label sequence does not decompose into complete root-to-leaf paths.
    #[error("malformed code: incomplete or invalid path starting at label {position}")]
    MalformedCode {
        /// Index of the first label of the offending path.
        position: usize,
    },
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
