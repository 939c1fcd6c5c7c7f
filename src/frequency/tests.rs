use crate::HuffmanError;

use super::*;

#[test]
fn test_counts_of_reference_text() {
    let freqs = FrequencyTable::from_symbols(b"AABBAACDDD", Alphabet::bytes()).unwrap();

    assert_eq!(freqs.count(b'A'), 4);
    assert_eq!(freqs.count(b'B'), 2);
    assert_eq!(freqs.count(b'C'), 1);
    assert_eq!(freqs.count(b'D'), 3);
    assert_eq!(freqs.count(b'E'), 0);
    assert_eq!(freqs.total(), 10);
    assert_eq!(freqs.distinct(), 4);
}

#[test]
fn test_nonzero_iteration_is_ordered_by_symbol() {
    let freqs = FrequencyTable::from_symbols(b"zzyxa", Alphabet::bytes()).unwrap();

    let entries: Vec<_> = freqs.iter_nonzero().collect();

    assert_eq!(entries, vec![(b'a', 1), (b'x', 1), (b'y', 1), (b'z', 2)]);
}

#[test]
fn test_empty_input_has_no_entries() {
    let freqs = FrequencyTable::<u8>::from_symbols(&[], Alphabet::bytes()).unwrap();

    assert!(freqs.is_empty());
    assert_eq!(freqs.distinct(), 0);
    assert_eq!(freqs.iter_nonzero().count(), 0);
}

#[test]
fn test_symbol_outside_alphabet_is_rejected() {
    let alphabet = Alphabet::new(4).unwrap();

    let result = FrequencyTable::from_symbols(&[0u8, 1, 3, 4], alphabet);

    assert_eq!(result, Err(HuffmanError::SymbolOutOfAlphabet { symbol: 4, alphabet_size: 4 }));
}

#[test]
fn test_wide_symbols() {
    let alphabet = Alphabet::new(0x11_0000).unwrap();
    let text: Vec<u32> = "héllo wörld".chars().map(|c| c as u32).collect();

    let freqs = FrequencyTable::from_symbols(&text, alphabet).unwrap();

    assert_eq!(freqs.count('l' as u32), 3);
    assert_eq!(freqs.count('ö' as u32), 1);
    assert_eq!(freqs.total(), 11);
}

#[test]
fn test_incremental_add_matches_bulk_count() {
    let mut freqs = FrequencyTable::new(Alphabet::bytes());
    for &b in b"mississippi" {
        freqs.add(b).unwrap();
    }

    assert_eq!(freqs, FrequencyTable::from_symbols(b"mississippi", Alphabet::bytes()).unwrap());
}
