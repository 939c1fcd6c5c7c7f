use super::*;

#[test]
fn test_bits_are_packed_msb_first() {
    let mut writer_builder = BinaryWriterBuilder::new();

    writer_builder.push_bits(0b101, 3);
    writer_builder.push_bits(0b11, 2);
    writer_builder.push_bits(0b0001, 4);

    assert_eq!(writer_builder.written_bits, 9);

    let written = writer_builder.build();

    assert_eq!(&*written.os, &[0b1011_1000, 0b1000_0000]);
    assert_eq!(written.written_bits, 9);
}

#[test]
fn test_whole_bytes_have_no_padding_byte() {
    let mut writer_builder = BinaryWriterBuilder::new();

    writer_builder.push_bits(0xABCD, 16);

    assert_eq!(&*writer_builder.build().os, &[0xAB, 0xCD]);
}

#[test]
fn test_empty_stream() {
    let written = BinaryWriterBuilder::new().build();

    assert!(written.os.is_empty());
    assert_eq!(written.written_bits, 0);
}

#[test]
fn test_push_full_width_integer() {
    let mut writer_builder = BinaryWriterBuilder::new();

    writer_builder.push_bit(true);
    writer_builder.push_bits(u64::MAX - 1, 64);

    let written = writer_builder.build();
    let mut reader = BinaryReader::with_len(written.os, written.written_bits);

    assert_eq!(reader.read_bit(), Some(true));
    assert_eq!(reader.read_int(64), Some(u64::MAX - 1));
    assert_eq!(reader.read_bit(), None);
}

#[test]
fn test_reader_stops_at_logical_length() {
    let mut writer_builder = BinaryWriterBuilder::new();
    for bit in [true, false, true, true, false] {
        writer_builder.push_bit(bit);
    }
    let written = writer_builder.build();

    let reader = BinaryReader::with_len(written.os.clone(), written.written_bits);
    assert_eq!(reader.collect::<Vec<_>>(), vec![true, false, true, true, false]);

    let padded = BinaryReader::new(written.os);
    assert_eq!(padded.len(), 8);
}

#[test]
fn test_read_int_and_reposition() {
    let mut writer_builder = BinaryWriterBuilder::new();
    for x in 0..100u64 {
        writer_builder.push_bits(x, 7);
    }
    let written = writer_builder.build();
    let mut reader = BinaryReader::with_len(written.os, written.written_bits);

    for x in 0..100u64 {
        assert_eq!(reader.read_int(7), Some(x));
    }
    assert_eq!(reader.read_int(1), None);

    reader.seek(7 * 42);
    assert_eq!(reader.read_int(7), Some(42));
    assert_eq!(reader.remaining(), 7 * 57);
}

#[test]
#[should_panic]
fn test_length_beyond_buffer() {
    BinaryReader::with_len(vec![0u8; 1].into_boxed_slice(), 9);
}
