//! Huffman tree construction.
//!
//! Implements the greedy minimum-frequency merge: repeatedly combine the
//! two lowest-weight nodes until a single root remains. The resulting
//! root-to-leaf paths minimize the weighted sum of code lengths.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Leaf {
        symbol: char,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }
}

/// A heap entry: the sequence number breaks frequency ties, so merges are
/// reproducible regardless of hash map iteration order.
#[derive(Debug, PartialEq, Eq)]
struct HeapEntry {
    node: Node,
    seq: u64,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: min-priority queue, oldest entry wins ties.
        other
            .node
            .freq()
            .cmp(&self.node.freq())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An immutable Huffman tree over the alphabet of a [`FrequencyTable`].
///
/// Leaves carry symbols; every internal node owns exactly two children and
/// carries the sum of their frequencies. Decoding walks it directly, see
/// [`decode`](crate::decode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// Build the optimal tree for the given frequencies.
    ///
    /// Leaves are seeded in ascending symbol order; the two lowest-frequency
    /// nodes are merged per step, first-popped becoming the left child. A
    /// table with one entry yields a single-leaf tree with no merges.
    ///
    /// # Errors
    /// Returns [`Error::EmptyAlphabet`] if the table has no entries.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Result<Self> {
        if freqs.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let mut symbols: Vec<(char, u64)> = freqs.iter().collect();
        symbols.sort_unstable_by_key(|&(symbol, _)| symbol);

        let mut seq = 0u64;
        let mut heap = BinaryHeap::with_capacity(symbols.len());
        for (symbol, freq) in symbols {
            heap.push(HeapEntry {
                node: Node::Leaf { symbol, freq },
                seq,
            });
            seq += 1;
        }
        debug!("seeded {} leaves", heap.len());

        while heap.len() > 1 {
            let first = heap.pop().unwrap().node;
            let second = heap.pop().unwrap().node;
            let freq = first.freq() + second.freq();
            heap.push(HeapEntry {
                node: Node::Internal {
                    freq,
                    left: Box::new(first),
                    right: Box::new(second),
                },
                seq,
            });
            seq += 1;
        }

        match heap.pop() {
            Some(entry) => Ok(Self { root: entry.node }),
            None => Err(Error::EmptyAlphabet),
        }
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }
}
