//! # Huffman Coding
//!
//! *Optimal prefix codes from observed symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot and `Q` four symbols: frequent letters get short
//! codes, rare letters get long ones. Huffman coding does the same thing optimally.
//! Given how often each symbol occurs, it produces a binary code where no codeword is
//! the prefix of another, so a concatenation of codewords can be read back without
//! separators, and the total encoded length is as small as any such code allows.
//!
//! ## The Problem
//!
//! A fixed-width code spends `ceil(log2(k))` bits on every symbol of a `k`-symbol
//! alphabet, regardless of how skewed the distribution is. Variable-length codes can do
//! better, but only if they stay uniquely decodable. Prefix-free codes are the simplest
//! uniquely decodable family, and among them Huffman's construction minimizes the
//! weighted path length `sum(freq(s) * len(code(s)))`.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Kraft       Inequality characterizing prefix-code lengths
//! 1952  Huffman     Greedy construction of optimal prefix codes
//! 1976  Rissanen    Arithmetic coding closes the gap to entropy
//! 1993  Deutsch     DEFLATE ships canonical Huffman in every zip and gzip file
//! ```
//!
//! ## Mathematical Formulation
//!
//! A set of code lengths `l_1..l_k` admits a prefix-free assignment iff
//!
//! ```text
//! sum_i 2^(-l_i) <= 1          (Kraft)
//! ```
//!
//! Huffman's greedy rule, repeatedly merging the two lightest subtrees, yields a full
//! binary tree whose leaf depths minimize `sum_i f_i * l_i` subject to Kraft. A full
//! tree meets the bound with equality whenever the alphabet has two or more symbols.
//!
//! ## Complexity Analysis
//!
//! - **Counting**: `O(n)` over the message, `O(k)` space.
//! - **Tree construction**: `O(k log k)` with a binary heap.
//! - **Encode / decode**: `O(total bits)`.
//!
//! ## Failure Modes
//!
//! 1. **Alphabet mismatch**: encoding a symbol the table was not built for fails with
//!    [`Error::UnknownSymbol`].
//! 2. **Corrupt or truncated streams**: bits that do not split into codes fail with
//!    [`Error::CorruptStream`].
//! 3. **Lone symbol**: a depth-zero tree would give the empty code; the one symbol is
//!    assigned `0` instead.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`PriorityQueue`]: array-backed binary min-heap.
//! - [`FrequencyTable`]: single-pass symbol counting.
//! - [`TreeBuilder`] / [`HuffmanTree`]: greedy construction, with a [`TieBreak`] policy.
//! - [`CodeTable`]: symbol/code bijection generated depth first from the tree.
//! - [`encode`] / [`decode`]: stateless conversion between messages and [`BitString`]s.
//!
//! Bits are kept one per element; packing into bytes and persisting tables is left to
//! callers.
//!
//! ```
//! use huffman::{build_codes, decode, encode};
//!
//! let message: Vec<char> = "abracadabra".chars().collect();
//! let table = build_codes(&message);
//! let bits = encode(&message, table.codes())?;
//! assert_eq!(bits.len(), 23);
//! assert_eq!(decode(&bits, table.reverse_codes())?, message);
//! # Ok::<(), huffman::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Kraft, L. G. (1949). "A device for quantizing, grouping, and coding amplitude-modulated pulses."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod queue;
pub mod tree;

pub use code::{BitString, CodeTable, Codes, ReverseCodes};
pub use codec::{
    build_codes, build_codes_with, decode, decode_string, encode, encode_str, Huffman,
};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use queue::PriorityQueue;
pub use tree::{HuffmanTree, Node, TieBreak, TreeBuilder};
