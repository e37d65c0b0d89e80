//! Greedy Huffman tree construction.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix codes.
//!
//! The builder repeatedly pulls the two lightest subtrees out of a
//! [`PriorityQueue`], joins them under a new internal node and puts the result
//! back, until a single tree remains.

use std::fmt;

use crate::frequency::FrequencyTable;
use crate::queue::PriorityQueue;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A symbol of the alphabet.
    Leaf {
        /// The symbol.
        symbol: S,
        /// Its occurrence count.
        freq: u64,
    },
    /// A merged pair of subtrees.
    Internal {
        /// Sum of both children's frequencies.
        freq: u64,
        /// Subtree reached by a `0` bit.
        left: Box<Node<S>>,
        /// Subtree reached by a `1` bit.
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    /// Frequency (weight) of this subtree.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Join two subtrees; `left` takes the `0` branch.
    ///
    /// # Panics
    /// Panics if the combined weight overflows `u64`. Subtrees of a tree built
    /// from a [`FrequencyTable`] never do, since their weights sum to at most
    /// the table's total.
    pub fn merge(left: Self, right: Self) -> Self {
        let freq = left
            .freq()
            .checked_add(right.freq())
            .unwrap_or_else(|| panic!("subtree weights overflow u64"));
        Node::Internal {
            freq,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// How the builder orders queue entries of equal frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Ties go to the entry enqueued first. Leaves are enqueued in ascending
    /// symbol order, merged nodes after them in creation order, so the
    /// resulting codes are reproducible.
    #[default]
    InsertionOrder,
    /// Frequency alone; ties fall out of the heap shape.
    FrequencyOnly,
}

/// Builds a [`HuffmanTree`] from a [`FrequencyTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    tie_break: TieBreak,
}

impl TreeBuilder {
    /// Builder with the default [`TieBreak::InsertionOrder`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tie-breaking policy.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Configured tie-breaking policy.
    pub fn policy(&self) -> TieBreak {
        self.tie_break
    }

    /// Run the greedy construction.
    ///
    /// Returns `None` for an empty table. A table with one symbol yields a tree
    /// whose root is that symbol's leaf.
    pub fn build<S>(&self, freqs: &FrequencyTable<S>) -> Option<HuffmanTree<S>>
    where
        S: Ord + Clone + fmt::Debug,
    {
        let mut seq = 0u64;
        let mut next_key = |freq: u64| {
            let key = match self.tie_break {
                TieBreak::InsertionOrder => (freq, seq),
                TieBreak::FrequencyOnly => (freq, 0),
            };
            seq += 1;
            key
        };

        let mut pq = PriorityQueue::with_capacity(freqs.len());
        for (symbol, freq) in freqs.iter() {
            let leaf = Node::Leaf {
                symbol: symbol.clone(),
                freq,
            };
            pq.enqueue(next_key(freq), leaf);
        }

        let root = loop {
            let (_, first) = pq.dequeue()?;
            let Some((_, second)) = pq.dequeue() else {
                break first;
            };
            let parent = Node::merge(first, second);
            pq.enqueue(next_key(parent.freq()), parent);
        };
        let tree = HuffmanTree { root };
        log::debug!(
            "built huffman tree: {} symbols, weight {}, height {}",
            tree.leaf_count(),
            tree.weight(),
            tree.height()
        );
        log::trace!("huffman tree:\n{tree}");
        Some(tree)
    }
}

/// A strict binary tree whose leaves are the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Ord + Clone + fmt::Debug> HuffmanTree<S> {
    /// Build with the default [`TreeBuilder`].
    pub fn from_frequencies(freqs: &FrequencyTable<S>) -> Option<Self> {
        TreeBuilder::new().build(freqs)
    }
}

impl<S> HuffmanTree<S> {
    /// Root node.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Consume the tree, returning its root.
    pub fn into_root(self) -> Node<S> {
        self.root
    }

    /// Root frequency; equals the length of the message the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root.freq()
    }

    /// Edges on the longest root-to-leaf path. Zero when the root is a leaf.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Number of leaves, i.e. the alphabet size.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

impl<S: fmt::Debug> HuffmanTree<S> {
    fn fmt_node(
        node: &Node<S>,
        depth: usize,
        label: &str,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match node {
            Node::Leaf { symbol, freq } => {
                writeln!(f, "{indent}{label} -> leaf {symbol:?} [weight: {freq}]")
            }
            Node::Internal { freq, left, right } => {
                writeln!(f, "{indent}{label} -> internal [weight: {freq}]")?;
                Self::fmt_node(left, depth + 1, "L", f)?;
                Self::fmt_node(right, depth + 1, "R", f)
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_node(&self.root, 0, "root", f)
    }
}
