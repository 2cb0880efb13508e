use std::io::{self, Read, Write};

use nbt_tree::{
    BigEndian, Compound, DEFAULT_MAX_DEPTH, Error, LittleEndian, List, Reader, Tag, TagID,
    compound, from_reader, from_slice, tag, to_vec, to_writer,
};

// ==================== Helper Functions ====================

/// A root list holding `depth` lists nested inside each other.
fn nested_lists(depth: usize) -> Vec<u8> {
    let mut data = vec![0x09, 0x00, 0x00];
    for _ in 1..depth {
        data.extend_from_slice(&[0x09, 0x00, 0x00, 0x00, 0x01]);
    }
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00]);
    data
}

struct FailingIo;

impl Read for FailingIo {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("broken source"))
    }
}

impl Write for FailingIo {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("broken sink"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ==================== Read Errors ====================

#[test]
fn test_empty_input() {
    match from_slice::<BigEndian>(&[]) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_eof_in_root_header() {
    let data = [0x01, 0x00]; // Missing name length byte
    assert!(matches!(from_slice::<BigEndian>(&data), Err(Error::EndOfFile)));

    let data = [0x08, 0x00, 0x05, b'a', b'b']; // Name shorter than declared
    assert!(matches!(from_slice::<BigEndian>(&data), Err(Error::EndOfFile)));
}

#[test]
fn test_eof_in_payloads() {
    for data in [
        &[0x03, 0x00, 0x00, 0x00, 0x00][..],      // Int with 2 of 4 bytes
        &[0x06, 0x00, 0x00, 0x3f][..],            // Double with 1 of 8 bytes
        &[0x0a, 0x00, 0x00][..],                  // Compound never terminated
        &[0x0a, 0x00, 0x00, 0x01, 0x00, 0x01][..], // Entry name cut off
        &[0x09, 0x00, 0x00, 0x01, 0x00, 0x00][..], // List count cut off
        &[0x09, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x05][..], // One element short
        &[0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x01][..], // Byte array short
        &[0x0b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00][..], // Int array short
    ] {
        match from_slice::<BigEndian>(data) {
            Err(Error::EndOfFile) => {}
            other => panic!("Expected EndOfFile for {data:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_root_end_tag() {
    assert!(matches!(
        from_slice::<BigEndian>(&[0x00]),
        Err(Error::UnexpectedEnd)
    ));
}

#[test]
fn test_invalid_tag_types() {
    assert!(matches!(
        from_slice::<BigEndian>(&[0x0c, 0x00, 0x00]),
        Err(Error::InvalidTagType(0x0c))
    ));

    let data = [0x0a, 0x00, 0x00, 0xff, 0x00, 0x00];
    assert!(matches!(
        from_slice::<BigEndian>(&data),
        Err(Error::InvalidTagType(0xff))
    ));

    let data = [0x09, 0x00, 0x00, 0x0d, 0x00, 0x00, 0x00, 0x00];
    assert!(matches!(
        from_slice::<BigEndian>(&data),
        Err(Error::InvalidTagType(0x0d))
    ));
}

#[test]
fn test_negative_lengths() {
    let data = [0x07, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff];
    assert!(matches!(
        from_slice::<BigEndian>(&data),
        Err(Error::NegativeLength(-1))
    ));

    let data = [0x09, 0x00, 0x00, 0x01, 0x80, 0x00, 0x00, 0x00];
    assert!(matches!(
        from_slice::<BigEndian>(&data),
        Err(Error::NegativeLength(i32::MIN))
    ));

    let data = [0x0b, 0x00, 0x00, 0xfe, 0xff, 0xff, 0xff];
    assert!(matches!(
        from_slice::<LittleEndian>(&data),
        Err(Error::NegativeLength(-2))
    ));
}

#[test]
fn test_end_list_with_elements() {
    let data = [0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01];
    assert!(matches!(
        from_slice::<BigEndian>(&data),
        Err(Error::UnexpectedEnd)
    ));
}

#[test]
fn test_huge_declared_length() {
    let data = [0x07, 0x00, 0x00, 0x7f, 0xff, 0xff, 0xff, 0x01, 0x02];
    assert!(matches!(from_slice::<BigEndian>(&data), Err(Error::EndOfFile)));

    let data = [0x0b, 0x00, 0x00, 0x7f, 0xff, 0xff, 0xff];
    assert!(matches!(from_slice::<BigEndian>(&data), Err(Error::EndOfFile)));

    let data = [0x09, 0x00, 0x00, 0x0a, 0x7f, 0xff, 0xff, 0xff, 0x00];
    assert!(matches!(from_slice::<BigEndian>(&data), Err(Error::EndOfFile)));
}

#[test]
fn test_invalid_utf8() {
    let data = [0x08, 0x00, 0x00, 0x00, 0x02, 0xff, 0xfe];
    assert!(matches!(
        from_slice::<BigEndian>(&data),
        Err(Error::InvalidString)
    ));

    let data = [0x01, 0x00, 0x01, 0xc0, 0x00];
    assert!(matches!(
        from_slice::<BigEndian>(&data),
        Err(Error::InvalidString)
    ));
}

#[test]
fn test_trailing_data() {
    let data = [0x01, 0x00, 0x00, 0x05, 0xaa, 0xbb];
    assert!(matches!(
        from_slice::<BigEndian>(&data),
        Err(Error::TrailingData(2))
    ));
    assert_eq!(from_reader::<BigEndian>(&data[..]).unwrap().1, Tag::Byte(5));
}

#[test]
fn test_depth_limit() {
    let data = nested_lists(3);
    let (_, tag) = Reader::<_, BigEndian>::new(&data[..])
        .with_max_depth(3)
        .read_named()
        .unwrap();
    assert_eq!(
        tag,
        Tag::List(List::of::<tag::List>([List::of::<tag::List>([List::new()])]))
    );

    match Reader::<_, BigEndian>::new(&data[..])
        .with_max_depth(2)
        .read_named()
    {
        Err(Error::DepthLimitExceeded(2)) => {}
        other => panic!("Expected DepthLimitExceeded, got {other:?}"),
    }

    let data = [0x0a, 0x00, 0x00, 0x0a, 0x00, 0x00, 0x00, 0x00];
    assert!(matches!(
        Reader::<_, BigEndian>::new(&data[..])
            .with_max_depth(1)
            .read_named(),
        Err(Error::DepthLimitExceeded(1))
    ));
}

#[test]
fn test_default_depth_limit() {
    let handle = std::thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(|| {
            let data = nested_lists(DEFAULT_MAX_DEPTH);
            let (name, tag) = from_slice::<BigEndian>(&data).unwrap();
            assert_eq!(to_vec::<BigEndian>(&name, &tag).unwrap(), data);

            match from_slice::<BigEndian>(&nested_lists(DEFAULT_MAX_DEPTH + 1)) {
                Err(Error::DepthLimitExceeded(depth)) => assert_eq!(depth, DEFAULT_MAX_DEPTH),
                other => panic!("Expected DepthLimitExceeded, got {other:?}"),
            }
        })
        .unwrap();
    handle.join().unwrap();
}

#[test]
fn test_deep_hostile_input_fails_without_recursion() {
    let handle = std::thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(|| {
            let data = nested_lists(100_000);
            assert!(matches!(
                from_slice::<BigEndian>(&data),
                Err(Error::DepthLimitExceeded(DEFAULT_MAX_DEPTH))
            ));

            // Truncated before the innermost list closes; every level is open.
            let truncated = &data[..data.len() - 5];
            let result = Reader::<_, BigEndian>::new(truncated)
                .with_max_depth(usize::MAX)
                .read_named();
            assert!(matches!(result, Err(Error::EndOfFile)));
        })
        .unwrap();
    handle.join().unwrap();
}

#[test]
fn test_mixed_nesting_counts_every_container() {
    // Compound > List > Compound, each holding the next.
    let data = [
        0x0a, 0x00, 0x00, // root compound
        0x09, 0x00, 0x01, b'l', 0x0a, 0x00, 0x00, 0x00, 0x01, // list of 1 compound
        0x00, // inner compound closes
        0x00, // root closes
    ];
    let (_, tag) = Reader::<_, BigEndian>::new(&data[..])
        .with_max_depth(3)
        .read_named()
        .unwrap();
    assert_eq!(
        tag,
        Tag::Compound(compound! { "l" => List::of::<tag::Compound>([Compound::new()]) })
    );
    assert!(matches!(
        Reader::<_, BigEndian>::new(&data[..])
            .with_max_depth(2)
            .read_named(),
        Err(Error::DepthLimitExceeded(2))
    ));
}

#[test]
fn test_io_error_passthrough() {
    let err = from_reader::<BigEndian>(FailingIo).unwrap_err();
    assert!(matches!(err, Error::IO(_)));
    assert!(!err.is_format_error());
    assert!(std::error::Error::source(&err).is_some());

    let err = to_writer::<BigEndian>(FailingIo, "", &Tag::Int(0)).unwrap_err();
    assert!(matches!(err, Error::IO(_)));
}

#[test]
fn test_format_error_classification() {
    assert!(Error::EndOfFile.is_format_error());
    assert!(Error::InvalidTagType(12).is_format_error());
    assert!(Error::NegativeLength(-1).is_format_error());
    assert!(Error::DepthLimitExceeded(4).is_format_error());
    assert!(!Error::KeyNotFound("a".to_owned()).is_format_error());
    assert!(!Error::StringTooLong(70000).is_format_error());
    assert!(
        !Error::TypeMismatch {
            expected: TagID::Int,
            actual: TagID::End
        }
        .is_format_error()
    );
}

// ==================== Write Errors ====================

#[test]
fn test_string_too_long() {
    let name = "a".repeat(u16::MAX as usize);
    assert!(to_vec::<BigEndian>(&name, &Tag::Byte(0)).is_ok());

    let name = "a".repeat(u16::MAX as usize + 1);
    assert!(matches!(
        to_vec::<BigEndian>(&name, &Tag::Byte(0)),
        Err(Error::StringTooLong(65536))
    ));

    let tag = Tag::Compound(compound! { "s" => "é".repeat(40000) });
    assert!(matches!(
        to_vec::<BigEndian>("", &tag),
        Err(Error::StringTooLong(80000))
    ));
}

#[test]
fn test_empty_value_in_compound() {
    let mut comp = Compound::new();
    comp.get_or_insert("empty");
    assert!(matches!(
        to_vec::<BigEndian>("", &Tag::Compound(comp)),
        Err(Error::UnexpectedEnd)
    ));
}

#[test]
fn test_failed_write_leaves_partial_stream() {
    let mut comp = compound! { "a" => 1i8 };
    comp.get_or_insert("b");

    let mut sink = Vec::new();
    let result = to_writer::<BigEndian>(&mut sink, "", &Tag::Compound(comp));
    assert!(matches!(result, Err(Error::UnexpectedEnd)));
    // Root header and the "a" entry went out before "b" was found empty.
    assert_eq!(sink, [0x0a, 0x00, 0x00, 0x01, 0x00, 0x01, b'a', 0x01]);
}

#[test]
fn test_rebound_list_element() {
    let mut list = List::of::<tag::Int>([1, 2]);
    list.at_mut(1).unwrap().set_owned(Tag::Long(2));
    match to_vec::<BigEndian>("", &Tag::List(list)) {
        Err(Error::TypeMismatch { expected, actual }) => {
            assert_eq!(expected, TagID::Int);
            assert_eq!(actual, TagID::Long);
        }
        other => panic!("Expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_display() {
    let err = Error::TypeMismatch {
        expected: TagID::ByteArray,
        actual: TagID::End,
    };
    assert_eq!(err.to_string(), "type mismatch: expected Byte_Array, found End");
    assert_eq!(
        Error::KeyNotFound("foo".to_owned()).to_string(),
        "key not found: \"foo\""
    );
    assert_eq!(
        Error::IndexOutOfRange { index: 2, len: 2 }.to_string(),
        "index 2 out of range for list of length 2"
    );
    assert_eq!(Error::EndOfFile.to_string(), "unexpected end of input");
    assert_eq!(Error::InvalidTagType(12).to_string(), "invalid NBT tag type: 0x0c");
    assert_eq!(Error::NegativeLength(-3).to_string(), "negative length: -3");
}
