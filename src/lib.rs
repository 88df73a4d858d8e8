//! # Huffman Coding
//!
//! *Optimal prefix-free codes from observed symbol frequencies.*
//!
//! ## Intuition First
//!
//! Imagine labeling the floors of a building so that the floors you visit
//! most often have the shortest labels. If no label is the beginning of
//! another, a doorman can read a stream of labels and always know exactly
//! where each one ends.
//!
//! Huffman coding does this for symbols: frequent symbols get short bit
//! strings, rare symbols get long ones, and because every code is a
//! root-to-leaf path in one binary tree, no code is a prefix of another.
//! A bit stream therefore decodes unambiguously without separators.
//!
//! ## The Problem
//!
//! Fixed-width codes waste space: ASCII spends 8 bits on `e` and `z` alike,
//! even though `e` appears an order of magnitude more often in English text.
//! An optimal variable-width code should spend bits where the information is.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon        Entropy as the fundamental limit
//! 1949  Shannon-Fano   Top-down splitting: good, not optimal
//! 1952  Huffman        Bottom-up greedy merge: provably optimal
//! 1977  Ziv-Lempel     Dictionary methods join the toolbox
//! 1993  DEFLATE        LZ77 + Huffman becomes the workhorse (zip, png)
//! 2007  Duda           ANS closes the gap to arithmetic coding
//! ```
//!
//! David Huffman devised the algorithm for a term paper at MIT, sidestepping
//! the top-down approach of his professor (Fano) by growing the tree from
//! the least frequent symbols upward.
//!
//! ## Mathematical Formulation
//!
//! Given symbols $s$ with frequencies $f_s$, the tree $T$ minimizes the
//! weighted path length:
//!
//! ```text
//! L(T) = \sum_s f_s \cdot depth_T(s)
//! ```
//!
//! which equals the total length of the encoded output. The greedy step
//! (always merge the two lowest-frequency subtrees) is exchange-argument
//! optimal, and the resulting code lengths satisfy the Kraft inequality
//! with equality.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n \log n)$ heap operations for $n$ distinct symbols.
//! - **Encode**: $O(1)$ table lookup per symbol, output length $L(T)$.
//! - **Decode**: one tree edge per label, so $O(L(T))$ for the whole input.
//!
//! ## Failure Modes
//!
//! 1. **Single-symbol alphabets**: the tree degenerates to one leaf with a
//!    zero-length path. This crate pins that symbol to a one-label code so
//!    round-trips stay lossless (see [`CodeTable::from_tree`]).
//! 2. **Mismatched inputs**: encoding text containing symbols the code was
//!    not built from, or decoding a truncated label sequence, is reported
//!    as an error rather than silently mangled.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`FrequencyTable`]: occurrence counts for every symbol in a text.
//! - [`Tree`]: the optimal binary tree, built by greedy minimum-frequency
//!   merges with a deterministic tie-break.
//! - [`CodeTable`] / [`decode`]: the symmetric traversals deriving codes
//!   from the tree and symbols from a label walk.
//!
//! Labels are logical bits (`0` = left, `1` = right) carried in a
//! [`bitvec::vec::BitVec`]; the crate does not promise any physical byte
//! layout.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Cover, T. & Thomas, J. (2006). "Elements of Information Theory",
//!   ch. 5: optimality of Huffman codes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod freq;
pub mod tree;

pub use codec::{build_code, decode, CodeTable};
pub use error::Error;
pub use freq::FrequencyTable;
pub use tree::Tree;
