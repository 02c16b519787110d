use crate::{DecodeOptions, Map, Number, Value, decode, decode_str, decode_with_options};

fn object(pairs: Vec<(&str, Value)>) -> Value {
    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), v);
    }
    Value::Object(map)
}

#[test]
fn empty_object() {
    assert_eq!(decode_str("{}").unwrap(), Value::Object(Map::new()));
    assert_eq!(decode_str("  {  }  ").unwrap(), Value::Object(Map::new()));
}

#[test]
fn empty_array() {
    assert_eq!(decode_str("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(decode_str(" [ ] ").unwrap(), Value::Array(vec![]));
}

#[test]
fn scalar_roots() {
    assert_eq!(decode_str("null").unwrap(), Value::Null);
    assert_eq!(decode_str("true").unwrap(), Value::Bool(true));
    assert_eq!(decode_str("false").unwrap(), Value::Bool(false));
    assert_eq!(decode_str("\"hi\"").unwrap(), Value::String("hi".into()));
    assert_eq!(decode_str("7").unwrap(), Value::Number(Number::I8(7)));
}

#[test]
fn nested_document() {
    let doc = r#"{"a": 1, "b": [true, null, "x"], "c": {"d": []}}"#;
    let expected = object(vec![
        ("a", Value::Number(Number::I8(1))),
        (
            "b",
            Value::Array(vec![
                Value::Bool(true),
                Value::Null,
                Value::String("x".into()),
            ]),
        ),
        ("c", object(vec![("d", Value::Array(vec![]))])),
    ]);
    assert_eq!(decode_str(doc).unwrap(), expected);
}

#[test]
fn array_preserves_decode_order() {
    let v = decode_str("[3, 1, 2]").unwrap();
    assert_eq!(
        v,
        Value::Array(vec![
            Value::Number(Number::I8(3)),
            Value::Number(Number::I8(1)),
            Value::Number(Number::I8(2)),
        ])
    );
}

#[test]
fn whitespace_between_tokens() {
    let doc = "\t{ \"a\" :\n [ 1 ,\r\n 2 ] }\n";
    let expected = object(vec![(
        "a",
        Value::Array(vec![
            Value::Number(Number::I8(1)),
            Value::Number(Number::I8(2)),
        ]),
    )]);
    assert_eq!(decode_str(doc).unwrap(), expected);
}

#[test]
fn duplicate_keys_last_write_wins() {
    let v = decode_str(r#"{"k":1,"k":2}"#).unwrap();
    assert_eq!(v, object(vec![("k", Value::Number(Number::I8(2)))]));
}

#[test]
fn object_leniency_skips_leading_junk() {
    // Unquoted content before the first structural character is discarded,
    // not rejected.
    assert_eq!(decode_str("{xyz}").unwrap(), Value::Object(Map::new()));
    assert_eq!(
        decode_str("{junk \"a\":1}").unwrap(),
        object(vec![("a", Value::Number(Number::I8(1)))])
    );
}

#[test]
fn object_leniency_yields_truncated_object() {
    // Junk after the last complete pair swallows everything to the brace.
    let v = decode_str(r#"{"a":"x", @@@ }"#).unwrap();
    assert_eq!(v, object(vec![("a", Value::String("x".into()))]));
}

#[test]
fn containers_adjacent_to_delimiters() {
    let doc = r#"{"a":{},"b":[[]],"c":0}"#;
    let expected = object(vec![
        ("a", Value::Object(Map::new())),
        ("b", Value::Array(vec![Value::Array(vec![])])),
        ("c", Value::Number(Number::I8(0))),
    ]);
    assert_eq!(decode_str(doc).unwrap(), expected);
}

#[test]
fn string_escapes_decode() {
    assert_eq!(
        decode_str(r#""a\tb""#).unwrap(),
        Value::String("a\tb".into())
    );
    assert_eq!(
        decode_str(r#""\b\f\n\r\t\"\\\/\'""#).unwrap(),
        Value::String("\u{0008}\u{000C}\n\r\t\"\\/'".into())
    );
    // Raw slashes are accepted even though the encoder always escapes them.
    assert_eq!(decode_str(r#""a/b""#).unwrap(), Value::String("a/b".into()));
}

#[test]
fn unicode_escapes_decode() {
    assert_eq!(
        decode_str("\"\\u0041\"").unwrap(),
        Value::String("A".into())
    );
    assert_eq!(
        decode_str("\"\\u00E9\\u20AC\"").unwrap(),
        Value::String("\u{00E9}\u{20AC}".into())
    );
    // Lowercase hex digits are accepted too.
    assert_eq!(
        decode_str("\"\\u00e9\"").unwrap(),
        Value::String("\u{00E9}".into())
    );
}

#[test]
fn surrogate_pairs_combine() {
    assert_eq!(
        decode_str("\"\\uD83D\\uDE00\"").unwrap(),
        Value::String("\u{1F600}".into())
    );
}

#[test]
fn unpaired_surrogates_degrade_to_replacement() {
    assert_eq!(
        decode_str("\"\\uD800x\"").unwrap(),
        Value::String("\u{FFFD}x".into())
    );
    assert_eq!(
        decode_str("\"\\uDC00\"").unwrap(),
        Value::String("\u{FFFD}".into())
    );
}

#[test]
fn numbers_stop_at_delimiters_not_whitespace() {
    let v = decode_str("[1 , 2]").unwrap();
    assert_eq!(
        v,
        Value::Array(vec![
            Value::Number(Number::I8(1)),
            Value::Number(Number::I8(2)),
        ])
    );
}

#[test]
fn decode_from_chunked_source() {
    // A forward-only source fed in arbitrary chunks behaves like one
    // contiguous stream.
    let chunks = ["[tr", "ue,{\"a\"", ":3.1", "4}]"];
    let source = chunks.iter().flat_map(|chunk| chunk.chars());
    let v = decode(source).unwrap();
    assert_eq!(
        v,
        Value::Array(vec![
            Value::Bool(true),
            object(vec![("a", Value::Number(Number::F32(3.14)))]),
        ])
    );
}

#[test]
fn depth_within_the_limit_decodes() {
    let options = DecodeOptions { max_depth: 3 };
    let v = decode_with_options("[[[1]]]".chars(), options).unwrap();
    assert_eq!(
        v,
        Value::Array(vec![Value::Array(vec![Value::Array(vec![Value::Number(
            Number::I8(1)
        )])])])
    );
}

#[test]
fn separate_decodes_share_nothing() {
    // Each call owns its source and cursor; decodes on separate threads
    // need no coordination.
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || decode_str(&format!("[{i}]")).unwrap()))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = Value::Array(vec![Value::Number(Number::I8(
            i8::try_from(i).expect("small index"),
        ))]);
        assert_eq!(handle.join().unwrap(), expected);
    }
}
