//! Code tables and their generation from a Huffman tree.
//!
//! A [`CodeTable`] holds both directions of the symbol/code bijection: the
//! encoder looks codes up by symbol and the decoder looks symbols up by code.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};

/// Forward table: symbol to code.
pub type Codes<S> = BTreeMap<S, BitString>;

/// Inverse table: code to symbol.
pub type ReverseCodes<S> = HashMap<BitString, S>;

/// A sequence of binary digits, one `bool` per bit.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitString(Vec<bool>);

impl BitString {
    /// Empty bit string.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Empty bit string with room for `capacity` bits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    /// Remove and return the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        self.0.pop()
    }

    /// Append all bits of `other`.
    pub fn extend_from_bits(&mut self, other: &BitString) {
        self.0.extend_from_slice(&other.0);
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no bits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop all bits, keeping the allocation.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// True if `prefix` is a prefix of `self` (including equality).
    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// The bits as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString(\"{self}\")")
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, digit)| match digit {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidDigit { position, digit }),
            })
            .collect()
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<bool> for BitString {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Bijective symbol/code mapping, forward and inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: Codes<S>,
    reverse: ReverseCodes<S>,
}

impl<S: Ord + Clone> CodeTable<S> {
    /// Table with no entries; what an empty message produces.
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
            reverse: HashMap::new(),
        }
    }

    /// Walk `tree` depth first, `0` for left and `1` for right.
    ///
    /// A tree that is a single leaf gives its symbol the code `0`.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut table = Self::empty();
        match tree.root() {
            Node::Leaf { symbol, .. } => table.record(symbol, BitString::from(vec![false])),
            root => {
                let mut path = BitString::with_capacity(tree.height());
                table.assign(root, &mut path);
            }
        }
        table
    }

    /// Accept an externally supplied table after checking that every code is
    /// non-empty, unique and that no code is a prefix of another.
    pub fn from_codes(codes: Codes<S>) -> Result<Self> {
        let mut sorted: Vec<&BitString> = codes.values().collect();
        sorted.sort_unstable();
        if sorted.first().is_some_and(|code| code.is_empty()) {
            return Err(Error::EmptyCode);
        }
        // in lexicographic order a prefix sorts directly before some code it prefixes
        for pair in sorted.windows(2) {
            let (shorter, longer) = (pair[0], pair[1]);
            if shorter == longer {
                return Err(Error::DuplicateCode(shorter.to_string()));
            }
            if longer.starts_with(shorter) {
                return Err(Error::NotPrefixFree {
                    shorter: shorter.to_string(),
                    longer: longer.to_string(),
                });
            }
        }
        let reverse = codes
            .iter()
            .map(|(symbol, code)| (code.clone(), symbol.clone()))
            .collect();
        Ok(Self { codes, reverse })
    }

    fn assign(&mut self, node: &Node<S>, path: &mut BitString) {
        match node {
            Node::Leaf { symbol, .. } => self.record(symbol, path.clone()),
            Node::Internal { left, right, .. } => {
                path.push(false);
                self.assign(left, path);
                path.pop();

                path.push(true);
                self.assign(right, path);
                path.pop();
            }
        }
    }

    fn record(&mut self, symbol: &S, code: BitString) {
        self.reverse.insert(code.clone(), symbol.clone());
        self.codes.insert(symbol.clone(), code);
    }

    /// Code assigned to `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.codes.get(symbol)
    }

    /// Symbol whose code is exactly `code`.
    pub fn symbol(&self, code: &BitString) -> Option<&S> {
        self.reverse.get(code)
    }

    /// Total bits needed to encode a message with these symbol counts, or
    /// `None` if some counted symbol has no code or the total overflows `u64`.
    pub fn encoded_len(&self, freqs: &FrequencyTable<S>) -> Option<u64> {
        freqs.iter().try_fold(0u64, |acc, (symbol, count)| {
            let code = self.codes.get(symbol)?;
            acc.checked_add(count.checked_mul(code.len() as u64)?)
        })
    }
}

impl<S> CodeTable<S> {
    /// Forward table.
    pub fn codes(&self) -> &Codes<S> {
        &self.codes
    }

    /// Inverse table.
    pub fn reverse_codes(&self) -> &ReverseCodes<S> {
        &self.reverse
    }

    /// Split into forward and inverse tables.
    pub fn into_parts(self) -> (Codes<S>, ReverseCodes<S>) {
        (self.codes, self.reverse)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> {
        self.codes.iter()
    }

    /// Length of the longest code; zero for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(BitString::len).max().unwrap_or(0)
    }

    /// Kraft sum, `sum(2^-len)` over all codes. At most 1 for any prefix code,
    /// exactly 1 for a Huffman code over two or more symbols.
    pub fn kraft_sum(&self) -> f64 {
        self.codes
            .values()
            .map(|code| 0.5f64.powi(code.len() as i32))
            .sum()
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<&BitString> = self.codes.values().collect();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

impl<S: Ord + Clone> Default for CodeTable<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Ord + Clone> From<&HuffmanTree<S>> for CodeTable<S> {
    fn from(tree: &HuffmanTree<S>) -> Self {
        Self::from_tree(tree)
    }
}

/// `symbol | code` rows in symbol order.
impl<S: fmt::Debug> fmt::Display for CodeTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "symbol | code")?;
        for (symbol, code) in &self.codes {
            writeln!(f, "{symbol:?} | {code}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        s.parse().unwrap()
    }

    fn table_for(text: &str) -> CodeTable<char> {
        let freqs = FrequencyTable::of_str(text);
        HuffmanTree::from_frequencies(&freqs)
            .map(|tree| CodeTable::from_tree(&tree))
            .unwrap_or_default()
    }

    #[test]
    fn test_bitstring_parse_and_display() {
        let b = bits("01101");
        assert_eq!(b.len(), 5);
        assert_eq!(b.to_string(), "01101");
        assert_eq!(format!("{b:?}"), "BitString(\"01101\")");
        assert!(b.starts_with(&bits("011")));
        assert!(!b.starts_with(&bits("1")));
        assert_eq!(bits(""), BitString::new());
    }

    #[test]
    fn test_bitstring_rejects_other_digits() {
        let err = "0120".parse::<BitString>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDigit {
                position: 2,
                digit: '2'
            }
        );
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let table = table_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&'a'), Some(&bits("0")));
        assert_eq!(table.symbol(&bits("0")), Some(&'a'));
    }

    #[test]
    fn test_empty_tree_gives_empty_table() {
        let table = table_for("");
        assert!(table.is_empty());
        assert_eq!(table.max_code_len(), 0);
        assert_eq!(table.kraft_sum(), 0.0);
    }

    #[test]
    fn test_canonical_codes() {
        let table = table_for("aabbbcc");
        assert_eq!(table.get(&'b'), Some(&bits("0")));
        assert_eq!(table.get(&'a'), Some(&bits("10")));
        assert_eq!(table.get(&'c'), Some(&bits("11")));
        assert_eq!(table.encoded_len(&FrequencyTable::of_str("aabbbcc")), Some(11));
    }

    #[test]
    fn test_abracadabra_is_optimal() {
        let freqs = FrequencyTable::of_str("abracadabra");
        let table = table_for("abracadabra");
        assert_eq!(table.encoded_len(&freqs), Some(23));
        assert_eq!(table.get(&'a').map(BitString::len), Some(1));
        assert!(table.is_prefix_free());
        assert_eq!(table.kraft_sum(), 1.0);
    }

    #[test]
    fn test_tables_are_inverse() {
        let table = table_for("the quick brown fox jumps over the lazy dog");
        assert_eq!(table.codes().len(), table.reverse_codes().len());
        for (symbol, code) in table.iter() {
            assert_eq!(table.symbol(code), Some(symbol));
        }
    }

    #[test]
    fn test_encoded_len_unknown_symbol() {
        let table = table_for("ab");
        assert_eq!(table.encoded_len(&FrequencyTable::of_str("abc")), None);
    }

    #[test]
    fn test_encoded_len_overflow() {
        let mut freqs = FrequencyTable::new();
        freqs.insert('a', u64::MAX - 1).unwrap();
        freqs.insert('b', 1).unwrap();
        let tree = HuffmanTree::from_frequencies(&freqs).unwrap();
        let table = CodeTable::from_tree(&tree);
        // one bit per symbol: exactly the total
        assert_eq!(table.encoded_len(&freqs), Some(u64::MAX));

        let mut heavier = FrequencyTable::new();
        heavier.insert('a', u64::MAX / 2 + 1).unwrap();
        let codes: Codes<char> = [('a', bits("00")), ('b', bits("01"))].into();
        let two_bit = CodeTable::from_codes(codes).unwrap();
        assert_eq!(two_bit.encoded_len(&heavier), None);
    }

    #[test]
    fn test_from_codes_validation() {
        let ok: Codes<char> = [('a', bits("0")), ('b', bits("10")), ('c', bits("11"))].into();
        let table = CodeTable::from_codes(ok).unwrap();
        assert_eq!(table.symbol(&bits("10")), Some(&'b'));

        let empty: Codes<char> = [('a', bits("")), ('b', bits("1"))].into();
        assert_eq!(CodeTable::from_codes(empty), Err(Error::EmptyCode));

        let dup: Codes<char> = [('a', bits("01")), ('b', bits("01"))].into();
        assert_eq!(
            CodeTable::from_codes(dup),
            Err(Error::DuplicateCode("01".into()))
        );

        let prefixed: Codes<char> = [('a', bits("0")), ('b', bits("010")), ('c', bits("1"))].into();
        assert_eq!(
            CodeTable::from_codes(prefixed),
            Err(Error::NotPrefixFree {
                shorter: "0".into(),
                longer: "010".into()
            })
        );
    }

    #[test]
    fn test_display_rows() {
        let table = table_for("aabbbcc");
        assert_eq!(
            table.to_string(),
            "symbol | code\n'a' | 10\n'b' | 0\n'c' | 11\n"
        );
    }
}
