//! Encoding and decoding against a code table.

use std::borrow::Borrow;
use std::fmt;

use crate::code::{BitString, CodeTable, Codes, ReverseCodes};
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::TreeBuilder;

/// Count `message`, build a tree with the default [`TreeBuilder`] and derive
/// its code table. An empty message yields an empty table.
pub fn build_codes<S>(message: &[S]) -> CodeTable<S>
where
    S: Ord + Clone + fmt::Debug,
{
    build_codes_with(message, &TreeBuilder::new())
}

/// [`build_codes`] with an explicit builder configuration.
pub fn build_codes_with<S>(message: &[S], builder: &TreeBuilder) -> CodeTable<S>
where
    S: Ord + Clone + fmt::Debug,
{
    codes_for(&FrequencyTable::count(message.iter().cloned()), builder)
}

fn codes_for<S>(freqs: &FrequencyTable<S>, builder: &TreeBuilder) -> CodeTable<S>
where
    S: Ord + Clone + fmt::Debug,
{
    builder
        .build(freqs)
        .map(|tree| CodeTable::from_tree(&tree))
        .unwrap_or_default()
}

/// Concatenate the code of every symbol of `message`, in order.
///
/// # Errors
/// Returns `Error::UnknownSymbol` for the first symbol without a code.
pub fn encode<S>(message: &[S], codes: &Codes<S>) -> Result<BitString>
where
    S: Ord + fmt::Debug,
{
    encode_iter(message, codes)
}

/// [`encode`] over the Unicode scalar values of `text`.
pub fn encode_str(text: &str, codes: &Codes<char>) -> Result<BitString> {
    encode_iter(text.chars(), codes)
}

fn encode_iter<S, I>(message: I, codes: &Codes<S>) -> Result<BitString>
where
    S: Ord + fmt::Debug,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    let mut bits = BitString::new();
    for (position, item) in message.into_iter().enumerate() {
        let symbol = item.borrow();
        let code = codes.get(symbol).ok_or_else(|| Error::UnknownSymbol {
            position,
            symbol: format!("{symbol:?}"),
        })?;
        bits.extend_from_bits(code);
    }
    Ok(bits)
}

/// Split `bits` into codes of `reverse` and emit their symbols.
///
/// Digits accumulate in a buffer until it equals some code. Because the table
/// is prefix free the first match is the only one, so no backtracking happens.
///
/// # Errors
/// Returns `Error::CorruptStream` when the buffer grows past the longest code
/// without a match, or when input ends with unmatched digits.
pub fn decode<S: Clone>(bits: &BitString, reverse: &ReverseCodes<S>) -> Result<Vec<S>> {
    let max_len = reverse.keys().map(BitString::len).max().unwrap_or(0);
    let mut out = Vec::new();
    let mut buffer = BitString::with_capacity(max_len);

    for (offset, bit) in bits.iter().enumerate() {
        buffer.push(bit);
        if let Some(symbol) = reverse.get(&buffer) {
            out.push(symbol.clone());
            buffer.clear();
        } else if buffer.len() >= max_len {
            return Err(corrupt(offset + 1, &buffer));
        }
    }

    if !buffer.is_empty() {
        return Err(corrupt(bits.len(), &buffer));
    }
    Ok(out)
}

/// [`decode`] collecting the symbols into a `String`.
pub fn decode_string(bits: &BitString, reverse: &ReverseCodes<char>) -> Result<String> {
    Ok(decode(bits, reverse)?.into_iter().collect())
}

fn corrupt(offset: usize, pending: &BitString) -> Error {
    log::debug!("rejecting stream at bit {offset}, pending {pending}");
    Error::CorruptStream {
        offset,
        pending: pending.to_string(),
    }
}

/// A code table built from a message, with encode and decode bound to it.
#[derive(Debug, Clone)]
pub struct Huffman<S> {
    table: CodeTable<S>,
}

impl<S> Huffman<S>
where
    S: Ord + Clone + fmt::Debug,
{
    /// Build codes for `message` with the default [`TreeBuilder`].
    pub fn new(message: &[S]) -> Self {
        Self::with_builder(message, &TreeBuilder::new())
    }

    /// Build codes for `message` with `builder`.
    pub fn with_builder(message: &[S], builder: &TreeBuilder) -> Self {
        Self {
            table: build_codes_with(message, builder),
        }
    }

    /// Build codes from known symbol counts.
    pub fn from_frequencies(freqs: &FrequencyTable<S>, builder: &TreeBuilder) -> Self {
        Self {
            table: codes_for(freqs, builder),
        }
    }

    /// The code table.
    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }

    /// Consume, returning the code table.
    pub fn into_table(self) -> CodeTable<S> {
        self.table
    }

    /// Encode `message` with this table.
    pub fn encode(&self, message: &[S]) -> Result<BitString> {
        encode(message, self.table.codes())
    }

    /// Decode `bits` with this table.
    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        decode(bits, self.table.reverse_codes())
    }
}

impl Huffman<char> {
    /// Build codes for the characters of `text`.
    pub fn of_str(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self::new(&chars)
    }

    /// Encode `text` with this table.
    pub fn encode_str(&self, text: &str) -> Result<BitString> {
        encode_str(text, self.table.codes())
    }

    /// Decode `bits` into a `String`.
    pub fn decode_string(&self, bits: &BitString) -> Result<String> {
        decode_string(bits, self.table.reverse_codes())
    }
}
