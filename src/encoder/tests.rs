use std::collections::HashMap;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Alphabet, Code, HuffmanTree, PackedStream};

use super::*;

fn build_codes<S: Symbol>(input: &[S], alphabet: Alphabet) -> CodeTable<S> {
    CodeTable::from_tree(&HuffmanTree::from_symbols(input, alphabet).unwrap())
}

/// Regroups `bits` into symbols through the inverse of `codes`.
fn regroup<S: Symbol>(encoded: &EncodedBits, codes: &CodeTable<S>) -> Vec<S> {
    let inverse: HashMap<&Code, S> = codes.iter().map(|(symbol, code)| (code, symbol)).collect();
    let mut symbols = Vec::with_capacity(encoded.symbol_count());
    let mut pending = Code::new();

    for bit in encoded.bits() {
        pending = pending.with(bit);
        if let Some(&symbol) = inverse.get(&pending) {
            symbols.push(symbol);
            pending = Code::new();
        }
    }

    assert!(pending.is_empty(), "trailing bits {} do not form a code", pending);
    symbols
}

#[test]
fn test_reference_text_bits() {
    let text = b"AABBAACDDD";
    let codes = build_codes(text, Alphabet::bytes());

    let encoded = encode(text, &codes).unwrap();

    assert_eq!(encoded.to_bit_string(), "0011111100110101010");
    assert_eq!(encoded.len(), 19);
    assert_eq!(encoded.symbol_count(), 10);
    assert_eq!(encoded.as_bytes(), &[0b0011_1111, 0b0011_0101, 0b0100_0000]);
}

#[test]
fn test_single_symbol_input() {
    for len in [1, 2, 9, 1000] {
        let text = vec![b'X'; len];
        let codes = build_codes(&text, Alphabet::bytes());

        let encoded = encode(&text, &codes).unwrap();

        assert_eq!(encoded.len(), len);
        assert_eq!(encoded.to_bit_string(), "0".repeat(len));
    }
}

#[test]
fn test_unknown_symbol_fails() {
    let codes = build_codes(b"AABBAACDDD", Alphabet::bytes());

    let result = encode(b"ABCDE", &codes);

    assert_eq!(result, Err(HuffmanError::UnknownSymbol { symbol: b'E' as usize, position: 4 }));
}

#[test]
fn test_empty_input_encodes_to_nothing() {
    let codes = build_codes(b"abc", Alphabet::bytes());

    let encoded = encode(&[], &codes).unwrap();

    assert!(encoded.is_empty());
    assert!(encoded.as_bytes().is_empty());
    assert_eq!(encoded.to_bit_string(), "");
}

#[test]
fn test_round_trip_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..48 {
        let len = rng.gen_range(1..3000);
        let spread = rng.gen_range(0..=255u8);
        let text: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=spread)).collect();
        let codes = build_codes(&text, Alphabet::bytes());

        let encoded = encode(&text, &codes).unwrap();

        assert_eq!(regroup(&encoded, &codes), text);
    }
}

#[test]
fn test_encoded_length_is_weighted_code_length() {
    let text = b"a man a plan a canal panama";
    let codes = build_codes(text, Alphabet::bytes());

    let encoded = encode(text, &codes).unwrap();

    let expected: usize = text.iter().map(|&b| codes.get(b).unwrap().len()).sum();
    assert_eq!(encoded.len(), expected);
    assert!(encoded.len() < text.len() * 8);
}

#[test]
fn test_round_trip_wide_symbols() {
    let alphabet = Alphabet::new(0x11_0000).unwrap();
    let text: Vec<u32> = "Größenmaßstäbe, naïve façade".chars().map(|c| c as u32).collect();
    let codes = build_codes(&text, alphabet);

    let encoded = encode(&text, &codes).unwrap();

    assert_eq!(regroup(&encoded, &codes), text);
}

#[test]
fn test_packed_stream_conversion() {
    let text = b"AABBAACDDD";
    let codes = build_codes(text, Alphabet::bytes());
    let encoded = encode(text, &codes).unwrap();

    let restored = EncodedBits::try_from(PackedStream::from(&encoded)).unwrap();

    assert_eq!(restored, encoded);
    assert_eq!(restored.to_bit_string(), "0011111100110101010");
}

#[test]
fn test_packed_stream_longer_than_its_bytes() {
    let packed = PackedStream { bit_len: 17, symbols: 1, bytes: vec![0xFF] };

    assert_eq!(EncodedBits::try_from(packed), Err(HuffmanError::TruncatedStream { bit_len: 17, bytes: 1 }));
}
