//! Property-based tests for the codec's round-trip guarantees.
//!
//! Generated documents stay inside the canonical forms the decoder reads
//! back: scalars, nested objects, lists of scalars and tables, including
//! tables with no fields.

use proptest::prelude::*;
use toon_codec::{
    decode, decode_with_options, encode, encode_with_options, DecodeOptions, Delimiter, Table,
    ToonMap, ToonOptions, ToonValue,
};

fn key() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}"
}

fn scalar() -> impl Strategy<Value = ToonValue> {
    prop_oneof![
        Just(ToonValue::Null),
        any::<bool>().prop_map(ToonValue::Bool),
        any::<i64>().prop_map(ToonValue::Int),
        (-1.0e6..1.0e6f64).prop_map(ToonValue::Float),
        "[a-zA-Z0-9 ,:#|\"\\\\.-]{0,12}".prop_map(ToonValue::String),
    ]
}

fn headers() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key(), 1..4).prop_map(|mut headers| {
        headers.sort();
        headers.dedup();
        headers
    })
}

fn table() -> impl Strategy<Value = Table> {
    headers().prop_flat_map(|headers| {
        let width = headers.len();
        prop::collection::vec(prop::collection::vec(scalar(), width), 0..4)
            .prop_map(move |rows| Table::from_rows(headers.clone(), rows))
    })
}

fn fieldless_table() -> impl Strategy<Value = Table> {
    (0usize..4).prop_map(|count| Table::from_rows(Vec::new(), vec![Vec::new(); count]))
}

fn flat_object() -> impl Strategy<Value = ToonValue> {
    prop::collection::vec((key(), scalar()), 0..5)
        .prop_map(|entries| ToonValue::Object(entries.into_iter().collect()))
}

fn value() -> impl Strategy<Value = ToonValue> {
    prop_oneof![
        scalar(),
        flat_object(),
        prop::collection::vec(scalar(), 0..5).prop_map(ToonValue::List),
        table().prop_map(ToonValue::Table),
        fieldless_table().prop_map(ToonValue::Table),
    ]
}

fn document() -> impl Strategy<Value = ToonValue> {
    prop::collection::vec((key(), value()), 0..6)
        .prop_map(|entries| ToonValue::Object(entries.into_iter().collect::<ToonMap>()))
}

fn delimiter() -> impl Strategy<Value = Delimiter> {
    prop_oneof![
        Just(Delimiter::Comma),
        Just(Delimiter::Tab),
        Just(Delimiter::Pipe),
    ]
}

proptest! {
    #[test]
    fn prop_document_round_trip(doc in document()) {
        let text = encode(&doc);
        prop_assert_eq!(decode(&text).unwrap(), doc, "through:\n{}", text);
    }

    #[test]
    fn prop_round_trip_with_options(doc in document(), delimiter in delimiter(), indent in 1usize..6) {
        let options = ToonOptions::new().with_delimiter(delimiter).with_indent(indent);
        let text = encode_with_options(&doc, &options);
        let decoded = decode_with_options(&text, &DecodeOptions::new().with_delimiter(delimiter));
        prop_assert_eq!(decoded.unwrap(), doc);
    }

    #[test]
    fn prop_uniform_objects_come_back_as_table(
        headers in headers(),
        cells in prop::collection::vec(prop::collection::vec(scalar(), 3), 1..5),
    ) {
        let rows: Vec<ToonValue> = cells
            .into_iter()
            .map(|row| ToonValue::Object(headers.iter().cloned().zip(row).collect()))
            .collect();
        let expected = Table::from_objects(&rows).unwrap();

        let mut doc = ToonMap::new();
        doc.insert("rows".to_string(), ToonValue::List(rows));
        let decoded = decode(&encode(&ToonValue::Object(doc))).unwrap();

        prop_assert_eq!(decoded.get("rows"), Some(&ToonValue::Table(expected)));
    }

    #[test]
    fn prop_empty_objects_keep_their_siblings(count in 1usize..4, doc in document()) {
        let mut map = ToonMap::new();
        map.insert(
            "empty_objects".to_string(),
            ToonValue::List(vec![ToonValue::Object(ToonMap::new()); count]),
        );
        let entries = doc.as_object().cloned().unwrap_or_default();
        for (key, value) in &entries {
            map.insert(key.clone(), value.clone());
        }

        let text = encode(&ToonValue::Object(map));
        let decoded = decode(&text).unwrap();
        let rows = decoded.get("empty_objects").and_then(ToonValue::as_table).map(Table::len);
        prop_assert_eq!(rows, Some(count), "through:\n{}", text);
        for (key, value) in &entries {
            prop_assert_eq!(decoded.get(key), Some(value), "through:\n{}", text);
        }
    }

    #[test]
    fn prop_scalar_assignment_round_trip(value in scalar()) {
        let mut doc = ToonMap::new();
        doc.insert("k".to_string(), value.clone());
        let text = encode(&ToonValue::Object(doc));
        let decoded = decode(&text).unwrap();
        prop_assert_eq!(decoded.get("k"), Some(&value));
    }

    #[test]
    fn prop_decode_never_panics(text in "([a-z_\\[\\]{}0-9:, #\"|-]{0,12}\n){0,12}") {
        let _ = decode(&text);
        let _ = decode_with_options(&text, &DecodeOptions::new().strict(true));
    }

    #[test]
    fn prop_decoded_root_is_object(text in "\\PC{0,64}") {
        if let Ok(value) = decode(&text) {
            prop_assert!(value.is_object());
        }
    }
}
