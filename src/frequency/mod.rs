use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::{Alphabet, Result, Symbol};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable<S = u8> {
    alphabet: Alphabet,
    counts: Box<[u64]>,
    total: u64,
    #[serde(skip)]
    _phantom_symbol: PhantomData<S>,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            counts: vec![0; alphabet.size()].into_boxed_slice(),
            total: 0,
            _phantom_symbol: PhantomData,
        }
    }

    pub fn from_symbols(input: &[S], alphabet: Alphabet) -> Result<Self> {
        let mut table = Self::new(alphabet);
        for &symbol in input {
            table.add(symbol)?;
        }

        Ok(table)
    }

    #[inline(always)]
    pub fn add(&mut self, symbol: S) -> Result<()> {
        let index = self.alphabet.index_of(symbol)?;
        self.counts[index] += 1;
        self.total += 1;
        Ok(())
    }

    /// Occurrences of `symbol`, zero when it is outside the alphabet.
    #[inline(always)]
    pub fn count(&self, symbol: S) -> u64 {
        self.counts.get(symbol.index()).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[inline(always)]
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    // Ascending symbol order, which is also the queue seeding order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .filter_map(|(i, &count)| S::from_index(i).map(|s| (s, count)))
    }
}

#[cfg(test)]
mod tests;
