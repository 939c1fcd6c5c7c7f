use std::{fs, io};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    encode, Alphabet, CodeTable, EncodedBits, FrequencyTable, HuffmanTree, Properties,
    Result, Symbol,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed<S = u8> {
    pub frequencies: FrequencyTable<S>,
    pub codes: CodeTable<S>,
    pub encoded: EncodedBits,
}

/// Counts, builds the tree, assigns codes and encodes `input` in one go.
pub fn compress<S: Symbol>(input: &[S], alphabet: Alphabet) -> Result<Compressed<S>> {
    let frequencies = FrequencyTable::from_symbols(input, alphabet)?;

    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let codes = CodeTable::from_tree(&tree);
    drop(tree);

    let encoded = encode(input, &codes)?;

    Ok(Compressed { frequencies, codes, encoded })
}

impl<S: Symbol> Compressed<S> {
    pub fn properties(&self) -> Properties {
        Properties {
            alphabet_size: self.frequencies.alphabet().size(),
            symbols: self.encoded.symbol_count(),
            distinct_symbols: self.codes.len(),
            encoded_bits: self.encoded.len(),
            max_code_length: self.codes.max_code_len(),
            ..Default::default()
        }
    }

    pub fn store(&self, basename: &str) -> io::Result<()> {
        self.store_with(basename, |symbol| symbol.to_string())
    }

    /// Writes `<basename>.bits`, `.codes`, `.packed` and `.properties`.
    pub fn store_with<F>(&self, basename: &str, label: F) -> io::Result<()>
    where
        F: Fn(S) -> String,
    {
        if basename.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty basename"));
        }

        fs::write(format!("{}.bits", basename), self.encoded.to_bit_string())?;

        let mut codes = self.codes.lines_with(label).join("\n");
        codes.push('\n');
        fs::write(format!("{}.codes", basename), codes)?;

        PackedStream::from(&self.encoded).store(basename)?;

        fs::write(format!("{}.properties", basename), String::from(self.properties()))?;

        debug!(basename, "stored the compressed stream");
        Ok(())
    }

    pub fn store_json(&self, basename: &str) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.codes.to_map())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(format!("{}.codes.json", basename), json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedStream {
    pub bit_len: usize,
    pub symbols: usize,
    pub bytes: Vec<u8>,
}

impl From<&EncodedBits> for PackedStream {
    fn from(encoded: &EncodedBits) -> Self {
        Self {
            bit_len: encoded.len(),
            symbols: encoded.symbol_count(),
            bytes: encoded.as_bytes().to_vec(),
        }
    }
}

impl PackedStream {
    pub fn store(&self, basename: &str) -> io::Result<()> {
        let bytes = bincode::serialize(self).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(format!("{}.packed", basename), bytes)
    }

    /// Reads `<basename>.packed` back, rejecting a bit length the bytes cannot hold.
    pub fn load(basename: &str) -> io::Result<EncodedBits> {
        let file = fs::read(format!("{}.packed", basename))?;

        let packed: PackedStream =
            bincode::deserialize(&file).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        EncodedBits::try_from(packed).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
