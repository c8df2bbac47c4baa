/// Builds a [`ToonValue`](crate::ToonValue) from a JSON-like literal.
///
/// Arrays become [`ToonValue::List`](crate::ToonValue::List) and objects
/// become [`ToonValue::Object`](crate::ToonValue::Object) with keys in the
/// order written. An expression that is already a `ToonValue` is cloned as
/// is, so a [`Table`](crate::Table) stays a table. Any other expression goes
/// through [`to_value`](crate::to_value); if its `Serialize` impl fails the
/// result is `Null`, so call `to_value` directly where that error matters.
///
/// ```rust
/// use toon_codec::{toon, Table, ToonValue};
///
/// let value = toon!({ "id": 7, "tags": ["a", "b"], "extra": null });
/// assert_eq!(value.get("id"), Some(&ToonValue::Int(7)));
/// assert_eq!(value.get("extra"), Some(&ToonValue::Null));
///
/// let stock = ToonValue::Table(Table::new(vec!["sku".to_string()]));
/// assert!(toon!({ "stock": stock }).get("stock").unwrap().is_table());
/// ```
#[macro_export]
macro_rules! toon {
    (null) => {
        $crate::ToonValue::Null
    };

    (true) => {
        $crate::ToonValue::Bool(true)
    };

    (false) => {
        $crate::ToonValue::Bool(false)
    };

    ([]) => {
        $crate::ToonValue::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::ToonValue::List(vec![$($crate::toon!($elem)),*])
    };

    ({}) => {
        $crate::ToonValue::Object($crate::ToonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ToonMap::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::ToonValue::Object(object)
    }};

    ($s:literal) => {
        $crate::to_value(&$s).unwrap_or($crate::ToonValue::Null)
    };

    ($s:expr) => {
        match &$s {
            value => {
                #[allow(unused_imports)]
                use $crate::macros::__private::{SerializeKind as _, ValueKind as _};
                value.toon_kind().convert(value)
            }
        }
    };
}

/// Picks the conversion for `toon!(expr)` by method resolution: a
/// `&ToonValue` receiver matches [`ValueKind`] before the auto-referenced
/// [`SerializeKind`] impl is tried.
#[doc(hidden)]
pub mod __private {
    use crate::ToonValue;
    use serde::Serialize;

    pub struct Identity;
    pub struct Serialized;

    pub trait ValueKind {
        #[inline]
        fn toon_kind(&self) -> Identity {
            Identity
        }
    }

    impl ValueKind for ToonValue {}

    pub trait SerializeKind {
        #[inline]
        fn toon_kind(&self) -> Serialized {
            Serialized
        }
    }

    impl<T: ?Sized + Serialize> SerializeKind for &T {}

    impl Identity {
        #[inline]
        pub fn convert(self, value: &ToonValue) -> ToonValue {
            value.clone()
        }
    }

    impl Serialized {
        #[inline]
        pub fn convert<T: ?Sized + Serialize>(self, value: &T) -> ToonValue {
            crate::to_value(value).unwrap_or(ToonValue::Null)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ToonMap, ToonValue};

    #[test]
    fn test_toon_macro_primitives() {
        assert_eq!(toon!(null), ToonValue::Null);
        assert_eq!(toon!(true), ToonValue::Bool(true));
        assert_eq!(toon!(false), ToonValue::Bool(false));
        assert_eq!(toon!(42), ToonValue::Int(42));
        assert_eq!(toon!(3.5), ToonValue::Float(3.5));
        assert_eq!(toon!("hello"), ToonValue::String("hello".to_string()));
    }

    #[test]
    fn test_toon_macro_lists() {
        assert_eq!(toon!([]), ToonValue::List(vec![]));
        assert_eq!(
            toon!([1, "two", null]),
            ToonValue::List(vec![
                ToonValue::Int(1),
                ToonValue::String("two".into()),
                ToonValue::Null,
            ])
        );
    }

    #[test]
    fn test_toon_macro_objects_keep_order() {
        assert_eq!(toon!({}), ToonValue::Object(ToonMap::new()));

        let obj = toon!({ "zeta": 1, "alpha": { "inner": true } });
        let keys: Vec<&String> = obj.as_object().map(|m| m.keys().collect()).unwrap_or_default();
        assert_eq!(keys, ["zeta", "alpha"]);
        assert_eq!(
            obj.get("alpha").and_then(|a| a.get("inner")),
            Some(&ToonValue::Bool(true))
        );
    }

    #[test]
    fn test_toon_macro_keeps_values_as_is() {
        use crate::Table;

        let mut table = Table::new(vec!["id".into()]);
        table.push_row(vec![ToonValue::Int(1)]);
        let value = ToonValue::Table(table.clone());

        assert_eq!(toon!(value), ToonValue::Table(table.clone()));
        assert_eq!(
            toon!({ "t": value }).get("t"),
            Some(&ToonValue::Table(table))
        );
        // still usable: the macro only borrows its expression
        assert!(value.is_table());
    }

    #[test]
    fn test_toon_macro_expression_fallback() {
        let limit = Some(5u8);
        assert_eq!(toon!(limit), ToonValue::Int(5));
        let names = vec!["x", "y"];
        assert_eq!(toon!(names), toon!(["x", "y"]));
    }
}
