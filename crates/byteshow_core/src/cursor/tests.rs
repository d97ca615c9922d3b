use super::{DecodeCursor, Malformed};

/// Drain the cursor into a list of decode results.
fn decode_all(bytes: &[u8]) -> Vec<Result<char, Malformed>> {
    let mut cursor = DecodeCursor::new(bytes);
    let mut steps = Vec::new();
    while let Some(step) = cursor.decode_next() {
        steps.push(step);
    }
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), bytes.len());
    steps
}

#[test]
fn empty_buffer() {
    let mut cursor = DecodeCursor::new(b"");
    assert!(cursor.is_eof());
    assert_eq!(cursor.decode_next(), None);
}

#[test]
fn ascii_run() {
    assert_eq!(decode_all(b"ab!"), vec![Ok('a'), Ok('b'), Ok('!')]);
}

#[test]
fn multibyte_scalars() {
    // 2-, 3-, and 4-byte encodings.
    assert_eq!(
        decode_all("é€😀".as_bytes()),
        vec![Ok('é'), Ok('€'), Ok('😀')]
    );
}

#[test]
fn cursor_advances_per_scalar() {
    let mut cursor = DecodeCursor::new("a€".as_bytes());
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.decode_next(), Some(Ok('a')));
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.decode_next(), Some(Ok('€')));
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn invalid_lead_consumes_one_byte() {
    // 0xC0 and 0xC1 are overlong leads; 0xFF is out of range.
    assert_eq!(decode_all(b"\xC0"), vec![Err(Malformed { len: 1 })]);
    assert_eq!(decode_all(b"\xC1"), vec![Err(Malformed { len: 1 })]);
    assert_eq!(decode_all(b"\xFF"), vec![Err(Malformed { len: 1 })]);
}

#[test]
fn stray_continuation_consumes_one_byte() {
    assert_eq!(
        decode_all(b"\x80\xBFa"),
        vec![Err(Malformed { len: 1 }), Err(Malformed { len: 1 }), Ok('a')]
    );
}

#[test]
fn truncated_four_byte_sequence() {
    // First three bytes of 🏕 (F0 9F 8F 95) followed by ASCII: the maximal
    // well-formed prefix is consumed in a single failure.
    assert_eq!(
        decode_all(b"\xF0\x9F\x8Fa"),
        vec![Err(Malformed { len: 3 }), Ok('a')]
    );
}

#[test]
fn truncated_at_eof() {
    assert_eq!(decode_all(b"\xE2\x82"), vec![Err(Malformed { len: 2 })]);
}

#[test]
fn overlong_three_byte_encoding() {
    // E0 80 would be an overlong encoding; the second-byte window (A0..=BF)
    // rejects it with only the lead consumed.
    assert_eq!(
        decode_all(b"\xE0\x80"),
        vec![Err(Malformed { len: 1 }), Err(Malformed { len: 1 })]
    );
}

#[test]
fn surrogate_encoding_rejected() {
    // ED A0 80 would decode to U+D800. The ED window (80..=9F) rejects the
    // second byte, then the two stray continuations fail individually.
    assert_eq!(
        decode_all(b"\xED\xA0\x80"),
        vec![
            Err(Malformed { len: 1 }),
            Err(Malformed { len: 1 }),
            Err(Malformed { len: 1 }),
        ]
    );
}

#[test]
fn out_of_range_four_byte_rejected() {
    // F4 90 80 80 would decode to U+110000.
    let steps = decode_all(b"\xF4\x90\x80\x80");
    assert_eq!(steps[0], Err(Malformed { len: 1 }));
    assert!(steps.iter().all(Result::is_err));
}

#[test]
fn matches_std_utf8_validation() {
    // The stepping decoder and str::from_utf8 must agree on well-formedness.
    let cases: &[&[u8]] = &[
        b"plain",
        "mixed é€😀 text".as_bytes(),
        b"\xC2\x80",
        b"\xED\x9F\xBF", // U+D7FF, last scalar before surrogates
        b"\xEE\x80\x80", // U+E000, first scalar after surrogates
        b"\xF4\x8F\xBF\xBF", // U+10FFFF
    ];
    for &case in cases {
        let decoded: Result<String, Malformed> = decode_all(case)
            .into_iter()
            .collect();
        match decoded {
            Ok(text) => assert_eq!(Some(text.as_str()), core::str::from_utf8(case).ok()),
            Err(_) => assert!(core::str::from_utf8(case).is_err()),
        }
    }
}
