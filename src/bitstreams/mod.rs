/// A finished, byte-packed bit sequence.
///
/// Bits are stored most significant first inside each byte; the last byte is padded with
/// zero bits, and `written_bits` tells where the real data stops.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryWriter {
    pub os: Box<[u8]>,
    pub written_bits: usize,
}

pub struct BinaryWriterBuilder {
    os: Vec<u8>,
    pub written_bits: usize,
    pub current: u64,
    pub free: usize,
}

impl Default for BinaryWriterBuilder {
    fn default() -> Self {
        BinaryWriterBuilder {
            os: Vec::default(),
            written_bits: 0,
            current: 0,
            free: 8,
        }
    }
}

impl BinaryWriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self) -> BinaryWriter {
        if self.free != 8 {
            self.write(self.current);
        }

        BinaryWriter {
            os: self.os.into_boxed_slice(),
            written_bits: self.written_bits,
        }
    }

    #[inline(always)]
    pub fn write(&mut self, b: u64) {
        self.os.push(b as u8);
    }

    /// Puts the low `len` bits of `b` into the current byte; `len` must not exceed `free`.
    #[inline(always)]
    pub fn write_in_current(&mut self, b: u64, len: u64) -> u64 {
        debug_assert!(len as usize <= self.free);

        self.free -= len as usize;
        self.current |= (b & ((1 << len) - 1)) << self.free;

        if self.free == 0 {
            self.write(self.current);
            self.free = 8;
            self.current = 0;
        }

        self.written_bits += len as usize;
        len
    }

    #[inline(always)]
    pub fn push_bit(&mut self, bit: bool) -> u64 {
        self.write_in_current(bit as u64, 1)
    }

    /// Appends the low `len` bits of `x`, most significant first.
    #[inline(always)]
    pub fn push_bits(&mut self, x: u64, len: u64) -> u64 {
        assert!(len <= 64, "Cannot write {} bits from an integer", len);

        let mut left = len;
        while left > 0 {
            let chunk = left.min(self.free as u64);
            left -= chunk;
            let bits = if left >= 64 { 0 } else { x >> left };
            self.write_in_current(bits, chunk);
        }

        len
    }
}

/// Reads back a packed bit sequence, stopping at its logical end.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BinaryReader {
    is: Box<[u8]>,
    len: usize,
    pub read_bits: usize,
}

impl BinaryReader {
    pub fn new(input_stream: Box<[u8]>) -> Self {
        let len = input_stream.len() * 8;
        BinaryReader { is: input_stream, len, read_bits: 0 }
    }

    /// Reads only the first `bit_len` bits of `input_stream`.
    pub fn with_len(input_stream: Box<[u8]>, bit_len: usize) -> Self {
        assert!(bit_len <= input_stream.len() * 8, "{} bits do not fit {} bytes", bit_len, input_stream.len());
        BinaryReader { is: input_stream, len: bit_len, read_bits: 0 }
    }

    #[inline(always)]
    pub fn seek(&mut self, pos: usize) {
        self.read_bits = pos.min(self.len);
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.len - self.read_bits
    }

    #[inline(always)]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.read_bits >= self.len {
            return None;
        }

        let byte = self.is[self.read_bits >> 3];
        let bit = (byte >> (7 - (self.read_bits & 7))) & 1;
        self.read_bits += 1;

        Some(bit == 1)
    }

    #[inline(always)]
    pub fn read_int(&mut self, len: u64) -> Option<u64> {
        assert!(len <= 64);

        if (len as usize) > self.remaining() {
            return None;
        }

        let mut x = 0u64;
        for _ in 0..len {
            x = (x << 1) | self.read_bit()? as u64;
        }

        Some(x)
    }
}

impl Iterator for BinaryReader {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for BinaryReader {}

#[cfg(test)]
mod tests;
