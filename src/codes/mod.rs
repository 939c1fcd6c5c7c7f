use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{tree::Node, Alphabet, HuffmanTree, Symbol};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn with(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Self { bits }
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Splits the code into integers of at most 64 bits, first bit most significant.
    pub fn chunks(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.bits.chunks(64).map(|chunk| {
            let value = chunk.iter().fold(0u64, |acc, &bit| (acc << 1) | bit as u64);
            (value, chunk.len() as u64)
        })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<Code> for String {
    fn from(val: Code) -> Self {
        val.to_string()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid bit {0:?} in code, expected '0' or '1'")]
pub struct ParseCodeError(char);

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(ParseCodeError(other)),
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { bits })
    }
}

impl TryFrom<String> for Code {
    type Error = ParseCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The code of every symbol that occurred in the input.
///
/// Slots are indexed by symbol; `None` marks a symbol that never occurred and so has no
/// code. The table never changes once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable<S = u8> {
    alphabet: Alphabet,
    codes: Box<[Option<Code>]>,
    present: usize,
    _phantom_symbol: std::marker::PhantomData<S>,
}

impl<S: Symbol> CodeTable<S> {
    /// Assigns a code to every leaf of `tree`.
    ///
    /// Walking left appends `0`, walking right appends `1`. A tree made of a single leaf
    /// has an empty path, so that leaf gets the one-bit code `0` instead.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let alphabet = tree.alphabet();
        let mut codes = vec![None; alphabet.size()].into_boxed_slice();
        let mut present = 0;

        let root = tree.root();
        let mut stack = vec![(root, if root.is_leaf() { Code::new().with(false) } else { Code::new() })];

        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    if let Some(slot) = codes.get_mut(symbol.index()) {
                        present += 1;
                        *slot = Some(path);
                    }
                }
                Node::Internal { left, right, .. } => {
                    stack.push((&**right, path.with(true)));
                    stack.push((&**left, path.with(false)));
                }
            }
        }

        debug!(symbols = present, "generated the code table");

        Self { alphabet, codes, present, _phantom_symbol: std::marker::PhantomData }
    }

    #[inline(always)]
    pub fn get(&self, symbol: S) -> Option<&Code> {
        self.codes.get(symbol.index())?.as_ref()
    }

    #[inline(always)]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.present
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.present == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(i, code)| Some((S::from_index(i)?, code.as_ref()?)))
    }

    pub fn max_code_len(&self) -> usize {
        self.iter().map(|(_, code)| code.len()).max().unwrap_or(0)
    }

    pub fn is_prefix_free(&self) -> bool {
        // In lexicographic order a prefix always sorts right before some code it prefixes,
        // so comparing neighbours is enough.
        let mut sorted: Vec<&Code> = self.iter().map(|(_, code)| code).collect();
        sorted.sort();

        sorted.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// One `<symbol>: <code>` line per present symbol, symbols printed by `label`.
    pub fn lines_with<F>(&self, label: F) -> Vec<String>
    where
        F: Fn(S) -> String,
    {
        self.iter().map(|(symbol, code)| format!("{}: {}", label(symbol), code)).collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines_with(|symbol| symbol.to_string())
    }

    pub fn to_map(&self) -> BTreeMap<S, String> {
        self.iter().map(|(symbol, code)| (symbol, code.to_string())).collect()
    }
}
