//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for code construction, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The message contains a symbol the code table has no entry for.
    #[error("symbol {symbol} at position {position} has no code")]
    UnknownSymbol {
        /// Index of the offending symbol in the message.
        position: usize,
        /// Debug rendering of the symbol.
        symbol: String,
    },

    /// The bit stream does not split into codes of the table.
    #[error("corrupt stream at bit {offset}: unmatched bits {pending:?}")]
    CorruptStream {
        /// Bit offset at which decoding gave up.
        offset: usize,
        /// The digits accumulated since the last emitted symbol.
        pending: String,
    },

    /// A character other than `0` or `1` in a textual bit string.
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit {
        /// Character index of the digit.
        position: usize,
        /// The rejected character.
        digit: char,
    },

    /// Symbol counts would sum past `u64::MAX`.
    #[error("symbol counts overflow u64")]
    CountOverflow,

    /// A supplied code table assigns the empty bit string to a symbol.
    #[error("empty code")]
    EmptyCode,

    /// A supplied code table assigns the same bit string to two symbols.
    #[error("duplicate code {0}")]
    DuplicateCode(String),

    /// A supplied code table has one code that is a prefix of another.
    #[error("code {shorter} is a prefix of {longer}")]
    NotPrefixFree {
        /// The shorter code.
        shorter: String,
        /// The code it is a prefix of.
        longer: String,
    },
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
