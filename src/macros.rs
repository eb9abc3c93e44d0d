#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array, elements recursively
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    // Fallback for any expression with a From conversion
    ($e:expr) => {
        $crate::Value::from($e)
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(42.0));
        assert_eq!(value!(4.2), Value::Number(4.2));
        assert_eq!(value!("hello"), Value::Str("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));

        let arr = value!([1, 2, 3]);
        match arr {
            Value::Array(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], Value::Number(1.0));
                assert_eq!(items[1], Value::Number(2.0));
                assert_eq!(items[2], Value::Number(3.0));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_value_macro_nested_arrays() {
        let nested = value!([[1, 2], [3, 4]]);
        assert_eq!(
            nested,
            Value::Array(vec![
                Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]),
                Value::Array(vec![Value::Number(3.0), Value::Number(4.0)]),
            ])
        );
    }

    #[test]
    fn test_value_macro_mixed_kinds() {
        let mixed = value!([null, true, 4.2, "x"]);
        assert_eq!(
            mixed,
            Value::Array(vec![
                Value::Null,
                Value::Bool(true),
                Value::Number(4.2),
                Value::Str("x".to_string()),
            ])
        );
    }

    #[test]
    fn test_value_macro_expressions() {
        let n = 7;
        assert_eq!(value!(n), Value::Number(7.0));
        assert_eq!(value!((1 + 2)), Value::Number(3.0));
    }
}
