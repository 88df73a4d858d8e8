//! Encoding table and the encode/decode pair.
//!
//! The code table is derived from the tree once: each leaf's code is the
//! root-to-leaf path, `0` per left edge and `1` per right edge. Encoding is
//! table lookup and concatenation; decoding walks the tree label by label,
//! restarting at the root after every emitted symbol.

use std::collections::HashMap;
use std::fmt;

use bitvec::prelude::*;
use log::debug;

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use crate::tree::{Node, Tree};

/// Mapping from each symbol to its prefix-free code.
///
/// Built once per tree, immutable afterwards. Prefix-freeness is inherited
/// from the tree: no leaf is an ancestor of another, so no code is a prefix
/// of another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, BitVec>,
}

impl CodeTable {
    /// Derive the table by traversing `tree`, visiting every node once.
    pub fn from_tree(tree: &Tree) -> Self {
        let mut codes = HashMap::new();
        assign_codes(tree.root(), BitVec::new(), &mut codes);
        debug!("assigned {} codes", codes.len());
        Self { codes }
    }

    /// The code for `symbol`, if it was part of the tree's alphabet.
    pub fn code(&self, symbol: char) -> Option<&BitSlice> {
        self.codes.get(&symbol).map(|code| code.as_bitslice())
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &BitSlice)> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Encode `text` by concatenating the code of each symbol.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] on the first symbol with no table
    /// entry. No partial output is returned.
    pub fn encode(&self, text: &str) -> Result<BitVec> {
        let mut labels = BitVec::with_capacity(text.len());
        for (position, symbol) in text.chars().enumerate() {
            let code = self
                .codes
                .get(&symbol)
                .ok_or(Error::UnknownSymbol { symbol, position })?;
            labels.extend_from_bitslice(code);
        }
        Ok(labels)
    }
}

impl fmt::Display for CodeTable {
    /// Renders one `symbol: code` line per entry, sorted by symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(char, &BitVec)> =
            self.codes.iter().map(|(&symbol, code)| (symbol, code)).collect();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);

        for (i, (symbol, code)) in entries.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let bits: String = code
                .iter()
                .by_vals()
                .map(|bit| if bit { '1' } else { '0' })
                .collect();
            write!(f, "{symbol:?}: {bits}")?;
        }
        Ok(())
    }
}

fn assign_codes(node: &Node, prefix: BitVec, codes: &mut HashMap<char, BitVec>) {
    match node {
        Node::Leaf { symbol, .. } => {
            // A lone-leaf root has the empty path; pin its code to a single
            // left label so each symbol still occupies output.
            let code = if prefix.is_empty() { bitvec![0] } else { prefix };
            codes.insert(*symbol, code);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(false);
            assign_codes(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push(true);
            assign_codes(right, right_prefix, codes);
        }
    }
}

/// Build the tree and code table for `text` in one step.
///
/// # Errors
/// Returns [`Error::EmptyAlphabet`] if `text` is empty.
pub fn build_code(text: &str) -> Result<(Tree, CodeTable)> {
    let freqs = FrequencyTable::from_text(text);
    let tree = Tree::from_frequencies(&freqs)?;
    let table = CodeTable::from_tree(&tree);
    Ok((tree, table))
}

/// Decode a label sequence back into text by walking `tree`.
///
/// Steps left on `0`, right on `1`, emits the leaf's symbol and restarts at
/// the root whenever a leaf is reached. For a single-leaf tree each `0`
/// label decodes to one copy of the lone symbol, mirroring its fixed
/// one-label code; a `1` label is malformed there.
///
/// # Errors
/// Returns [`Error::MalformedCode`] if the input ends in the middle of a
/// path or a label has no child to follow. The error carries the index at
/// which the offending path began.
pub fn decode(tree: &Tree, labels: &BitSlice) -> Result<String> {
    let mut text = String::new();

    if let Node::Leaf { symbol, .. } = tree.root() {
        for (position, label) in labels.iter().by_vals().enumerate() {
            if label {
                return Err(Error::MalformedCode { position });
            }
            text.push(*symbol);
        }
        return Ok(text);
    }

    let mut node = tree.root();
    let mut path_start = 0;
    for (position, label) in labels.iter().by_vals().enumerate() {
        node = match node {
            Node::Internal { left, right, .. } => {
                if label {
                    right
                } else {
                    left
                }
            }
            Node::Leaf { .. } => return Err(Error::MalformedCode { position }),
        };
        if let Node::Leaf { symbol, .. } = node {
            text.push(*symbol);
            node = tree.root();
            path_start = position + 1;
        }
    }

    // Anything left between the last completed path and the end of input
    // is a truncated code.
    if path_start != labels.len() {
        return Err(Error::MalformedCode {
            position: path_start,
        });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_concrete_aabbc_scenario() {
        let text = "aabbc";
        let (tree, table) = build_code(text).unwrap();

        // The least frequent symbol can never be shallower than the others.
        let len_of = |s: char| table.code(s).unwrap().len();
        assert!(len_of('a') <= 2);
        assert!(len_of('b') <= 2);
        assert!(len_of('c') <= 2);
        assert!(len_of('c') >= len_of('a'));
        assert!(len_of('c') >= len_of('b'));

        let labels = table.encode(text).unwrap();
        assert_eq!(decode(&tree, &labels).unwrap(), text);
    }

    #[test]
    fn test_single_symbol_alphabet_uses_one_label_code() {
        let (tree, table) = build_code("aaaa").unwrap();
        assert_eq!(table.code('a').unwrap(), bitvec![0].as_bitslice());

        let labels = table.encode("aaaa").unwrap();
        assert_eq!(labels.len(), 4);
        assert!(labels.not_any());
        assert_eq!(decode(&tree, &labels).unwrap(), "aaaa");
    }

    #[test]
    fn test_single_leaf_tree_rejects_right_label() {
        let (tree, _) = build_code("aaaa").unwrap();
        assert_eq!(
            decode(&tree, bitvec![0, 1, 0].as_bitslice()),
            Err(Error::MalformedCode { position: 1 })
        );
    }

    #[test]
    fn test_unknown_symbol_is_rejected() {
        let (_, table) = build_code("ab").unwrap();
        assert_eq!(
            table.encode("abc"),
            Err(Error::UnknownSymbol {
                symbol: 'c',
                position: 2
            })
        );
    }

    #[test]
    fn test_truncated_labels_are_rejected() {
        let text = "aabbc";
        let (tree, table) = build_code(text).unwrap();

        // Drop the final label: the last symbol's code is two labels long,
        // so one dangling label remains.
        let mut labels = table.encode(text).unwrap();
        labels.truncate(labels.len() - 1);
        assert_eq!(
            decode(&tree, &labels),
            Err(Error::MalformedCode {
                position: labels.len() - 1
            })
        );
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert_eq!(build_code(""), Err(Error::EmptyAlphabet));
    }

    #[test]
    fn test_empty_labels_decode_to_empty_text() {
        let (tree, _) = build_code("abc").unwrap();
        assert_eq!(decode(&tree, BitVec::new().as_bitslice()).unwrap(), "");
    }

    #[test]
    fn test_table_matches_tree_alphabet() {
        let (_, table) = build_code("mississippi").unwrap();
        assert_eq!(table.len(), 4);
        assert!(table.code('m').is_some());
        assert!(table.code('q').is_none());
        assert!(!table.is_empty());
    }

    #[test]
    fn test_display_renders_sorted_code_lines() {
        let (_, table) = build_code("ab").unwrap();
        let a = table.code('a').unwrap()[0] as u8;
        let b = table.code('b').unwrap()[0] as u8;
        assert_eq!(format!("{table}"), format!("'a': {a}\n'b': {b}"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_codes_are_prefix_free(chars in prop::collection::vec(any::<char>(), 2..80)) {
            let text: String = chars.into_iter().collect();
            let (_, table) = build_code(&text).unwrap();

            let codes: Vec<_> = table.iter().collect();
            for (i, &(_, a)) in codes.iter().enumerate() {
                for &(_, b) in codes.iter().skip(i + 1) {
                    prop_assert!(!a.starts_with(b));
                    prop_assert!(!b.starts_with(a));
                }
            }
        }

        #[test]
        fn prop_encoded_length_is_weighted_code_length(
            chars in prop::collection::vec(any::<char>(), 1..100),
        ) {
            let text: String = chars.into_iter().collect();
            let freqs = FrequencyTable::from_text(&text);
            let (_, table) = build_code(&text).unwrap();
            let labels = table.encode(&text).unwrap();

            let weighted: u64 = freqs
                .iter()
                .map(|(symbol, count)| count * table.code(symbol).unwrap().len() as u64)
                .sum();
            prop_assert_eq!(weighted, labels.len() as u64);
        }

        #[test]
        fn prop_build_is_deterministic(chars in prop::collection::vec(any::<char>(), 1..60)) {
            let text: String = chars.into_iter().collect();
            let (_, first) = build_code(&text).unwrap();
            let (_, second) = build_code(&text).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
