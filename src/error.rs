use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("no symbol has a nonzero frequency, a Huffman tree cannot be built")]
    EmptyInput,

    #[error("priority queue overflow: pushing beyond its capacity of {capacity} nodes")]
    QueueOverflow { capacity: usize },

    #[error("priority queue underflow while {operation}")]
    QueueUnderflow { operation: &'static str },

    #[error("symbol {symbol} at position {position} has no entry in the code table")]
    UnknownSymbol { symbol: usize, position: usize },

    #[error("symbol {symbol} is outside the alphabet of {alphabet_size} symbols")]
    SymbolOutOfAlphabet { symbol: usize, alphabet_size: usize },

    #[error("alphabet size {size} is outside 1..=1114112")]
    InvalidAlphabet { size: usize },

    #[error("a stream of {bytes} bytes cannot hold {bit_len} bits")]
    TruncatedStream { bit_len: usize, bytes: usize },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
