use toon_codec::{encode, toon, ToonMap, ToonValue};

#[test]
fn test_toon_macro_null() {
    let value = toon!(null);
    assert_eq!(value, ToonValue::Null);
}

#[test]
fn test_toon_macro_booleans() {
    assert_eq!(toon!(true), ToonValue::Bool(true));
    assert_eq!(toon!(false), ToonValue::Bool(false));
}

#[test]
fn test_toon_macro_numbers() {
    assert_eq!(toon!(42), ToonValue::Int(42));
    assert_eq!(toon!(3.5), ToonValue::Float(3.5));
    assert_eq!(toon!(-123), ToonValue::Int(-123));
    assert_eq!(toon!(7u64), ToonValue::Int(7));
}

#[test]
fn test_toon_macro_strings() {
    assert_eq!(toon!("hello world"), ToonValue::String("hello world".to_string()));
    assert_eq!(toon!(""), ToonValue::String(String::new()));
}

#[test]
fn test_toon_macro_lists() {
    assert_eq!(toon!([]), ToonValue::List(vec![]));
    assert_eq!(
        toon!([1, "hello", true, null]),
        ToonValue::List(vec![
            ToonValue::Int(1),
            ToonValue::String("hello".to_string()),
            ToonValue::Bool(true),
            ToonValue::Null,
        ])
    );
}

#[test]
fn test_toon_macro_objects() {
    assert_eq!(toon!({}), ToonValue::Object(ToonMap::new()));

    let obj = toon!({
        "name": "Alice",
        "age": 30,
    });
    let map = obj.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("name"), Some(&ToonValue::from("Alice")));
    assert_eq!(map.get("age"), Some(&ToonValue::Int(30)));
}

#[test]
fn test_toon_macro_nested() {
    let nested = toon!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let user = nested.get("user").unwrap();
    assert_eq!(user.get("id"), Some(&ToonValue::Int(123)));
    assert_eq!(user.get("active"), Some(&ToonValue::Bool(true)));
    assert_eq!(
        nested.get("tags").and_then(ToonValue::as_list).map(<[_]>::len),
        Some(2)
    );
    assert_eq!(
        encode(&nested),
        "user:\n  id:123\n  name:Bob\n  active:true\ntags:\n  [2]:\n    admin\n    developer\ncount:42\n"
    );
}

#[test]
fn test_toon_value_methods() {
    let null_val = toon!(null);
    assert!(null_val.is_null());
    assert!(null_val.is_scalar());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_list());
    assert!(!null_val.is_table());

    let num = toon!(2);
    assert!(num.is_number());
    assert_eq!(num.as_i64(), Some(2));
    assert_eq!(num.as_f64(), Some(2.0));

    let list = toon!([1, 2, 3]);
    assert!(list.is_list());
    assert!(!list.is_scalar());
    assert_eq!(list.as_list().unwrap().len(), 3);

    let obj = toon!({ "key": "value" });
    assert!(obj.is_object());
    assert_eq!(obj.get("key").and_then(ToonValue::as_str), Some("value"));
}
