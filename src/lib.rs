pub mod alphabet;
pub mod bitstreams;
pub mod codes;
pub mod compressor;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod priority_queue;
pub mod properties;
pub mod tree;
pub mod utils;

pub use alphabet::Alphabet;
pub use codes::{Code, CodeTable};
pub use compressor::{compress, Compressed, PackedStream};
pub use encoder::{encode, EncodedBits};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use properties::Properties;
pub use tree::{HuffmanTree, Node};

/// A unit of the input alphabet; its numeric value is its index in the [`Alphabet`].
pub trait Symbol:
    num_traits::PrimInt
    + num_traits::Unsigned
    + std::fmt::Debug
    + std::fmt::Display
    + std::hash::Hash
    + serde::Serialize
    + serde::de::DeserializeOwned
{
    #[inline(always)]
    fn index(self) -> usize {
        // Unsigned primitives always fit a usize on the supported targets, except u64/u128
        // values beyond usize::MAX which can never be inside an alphabet anyway.
        num_traits::ToPrimitive::to_usize(&self).unwrap_or(usize::MAX)
    }

    #[inline(always)]
    fn from_index(index: usize) -> Option<Self> {
        <Self as num_traits::NumCast>::from(index)
    }
}

impl<T> Symbol for T
where
    T: num_traits::PrimInt
        + num_traits::Unsigned
        + std::fmt::Debug
        + std::fmt::Display
        + std::hash::Hash
        + serde::Serialize
        + serde::de::DeserializeOwned
{
}
