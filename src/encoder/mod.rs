use tracing::debug;

use crate::{
    bitstreams::{BinaryReader, BinaryWriter, BinaryWriterBuilder},
    CodeTable, HuffmanError, PackedStream, Result, Symbol,
};

/// The concatenated codes of an input, packed eight bits per byte.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedBits {
    stream: BinaryWriter,
    symbols: usize,
}

impl EncodedBits {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.stream.written_bits
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.stream.written_bits == 0
    }

    #[inline(always)]
    pub fn symbol_count(&self) -> usize {
        self.symbols
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.stream.os
    }

    pub fn bits(&self) -> BinaryReader {
        BinaryReader::with_len(self.stream.os.clone(), self.stream.written_bits)
    }

    pub fn to_bit_string(&self) -> String {
        self.bits().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

impl TryFrom<PackedStream> for EncodedBits {
    type Error = HuffmanError;

    fn try_from(packed: PackedStream) -> Result<Self> {
        if packed.bit_len > packed.bytes.len() * 8 {
            return Err(HuffmanError::TruncatedStream { bit_len: packed.bit_len, bytes: packed.bytes.len() });
        }

        Ok(Self {
            stream: BinaryWriter { os: packed.bytes.into_boxed_slice(), written_bits: packed.bit_len },
            symbols: packed.symbols,
        })
    }
}

/// Replaces every symbol of `input` with its code and concatenates the results.
///
/// The table must come from the same data as `input`. A symbol without a code is a
/// caller error and aborts the whole encoding with `UnknownSymbol`.
pub fn encode<S: Symbol>(input: &[S], codes: &CodeTable<S>) -> Result<EncodedBits> {
    let mut writer = BinaryWriterBuilder::new();

    for (position, &symbol) in input.iter().enumerate() {
        let code = codes
            .get(symbol)
            .ok_or(HuffmanError::UnknownSymbol { symbol: symbol.index(), position })?;

        for (value, len) in code.chunks() {
            writer.push_bits(value, len);
        }
    }

    let stream = writer.build();
    debug!(symbols = input.len(), bits = stream.written_bits, "encoded the input");

    Ok(EncodedBits { stream, symbols: input.len() })
}

#[cfg(test)]
mod tests;
