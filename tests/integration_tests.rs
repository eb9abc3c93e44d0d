use chrono::{TimeZone, Utc};
use num_bigint::BigInt;
use valtext::{
    format, tex_template, to_text, to_text_opt, to_text_with_options, value, Matrix, TextOptions,
    Value,
};

#[test]
fn test_no_argument_returns_empty_text() {
    assert_eq!(to_text_opt(None), Value::from(""));
    // Constant on every call
    for _ in 0..3 {
        assert_eq!(to_text_opt(None), Value::Str(String::new()));
    }
}

#[test]
fn test_number_matches_formatter_exactly() {
    let inputs = [4.2, 0.0, -0.0, 1.0, -3.25, 0.001, 0.0001, 123456.0, 2e21];
    for n in inputs {
        assert_eq!(to_text(&Value::Number(n)), Value::Str(format::number(n)));
    }
}

#[test]
fn test_number_scenarios() {
    assert_eq!(to_text(&Value::from(4.2)), Value::from("4.2"));
    assert_eq!(to_text(&Value::from(0.0)), Value::from("0"));
    assert_eq!(to_text(&Value::from(123456.0)), Value::from("1.23456e+5"));
    assert_eq!(to_text(&Value::Number(f64::NAN)), Value::from("NaN"));
    assert_eq!(to_text(&Value::Number(f64::INFINITY)), Value::from("Infinity"));
}

#[test]
fn test_null_scenario() {
    assert_eq!(to_text(&Value::Null), Value::from("null"));
}

#[test]
fn test_boolean_scenarios() {
    assert_eq!(to_text(&Value::from(true)), Value::from("true"));
    assert_eq!(to_text(&Value::from(false)), Value::from("false"));
}

#[test]
fn test_text_identity() {
    for s in ["already", "", "null", "4.2", "  spaced  "] {
        assert_eq!(to_text(&Value::from(s)), Value::from(s));
    }
}

#[test]
fn test_flat_array_of_booleans() {
    assert_eq!(to_text(&value!([true, false])), value!(["true", "false"]));
}

#[test]
fn test_nested_array_preserves_two_level_shape() {
    assert_eq!(
        to_text(&value!([[1, 2], [3, 4]])),
        value!([["1", "2"], ["3", "4"]])
    );
}

#[test]
fn test_deeply_nested_mixed_array() {
    let input = value!([null, [true, [4.2, "keep"]], []]);
    let expected = value!(["null", ["true", ["4.2", "keep"]], []]);
    assert_eq!(to_text(&input), expected);
}

#[test]
fn test_array_lengths_preserved_per_level() {
    let input = value!([[1], [2, 3], [4, 5, 6]]);
    let converted = to_text(&input);
    let rows = converted.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.as_array().unwrap().len(), i + 1);
    }
}

#[test]
fn test_matrix_conversion_keeps_dimensions() {
    let m = Matrix::new(
        (1..=24).map(Value::from).collect(),
        vec![2, 3, 4],
    )
    .unwrap();
    let converted = to_text(&Value::Matrix(m));
    let out = converted.as_matrix().unwrap();
    assert_eq!(out.shape(), &[2, 3, 4]);
    assert_eq!(out.get(&[0, 0, 0]), Some(&Value::from("1")));
    assert_eq!(out.get(&[1, 2, 3]), Some(&Value::from("24")));
}

#[test]
fn test_matrix_of_text_is_unchanged() {
    let m = Matrix::from_rows(vec![
        vec![Value::from("a"), Value::from("b")],
        vec![Value::from("c"), Value::from("d")],
    ])
    .unwrap();
    let input = Value::Matrix(m);
    assert_eq!(to_text(&input), input);
}

#[test]
fn test_bigint_uses_generic_fallback() {
    let big = BigInt::parse_bytes(b"340282366920938463463374607431768211456", 10).unwrap();
    let text = to_text(&Value::BigInt(big));
    assert_eq!(
        text,
        Value::from("340282366920938463463374607431768211456")
    );
}

#[test]
fn test_date_uses_generic_fallback() {
    let dt = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap();
    assert_eq!(
        to_text(&Value::Date(dt)),
        Value::from("2024-03-01T12:30:45+00:00")
    );
}

#[test]
fn test_fallback_inside_containers() {
    let input = Value::Array(vec![Value::BigInt(BigInt::from(7)), Value::from(true)]);
    assert_eq!(to_text(&input), value!(["7", "true"]));
}

#[test]
fn test_custom_number_format_option() {
    let options = TextOptions::new().with_number_format(|n| format!("{:.2}", n));
    assert_eq!(
        to_text_with_options(&value!([1, 2.5]), options),
        value!(["1.00", "2.50"])
    );
}

#[test]
fn test_custom_fallback_option() {
    let options = TextOptions::new().with_fallback(|v| format!("<{}>", v.kind()));
    let input = Value::BigInt(BigInt::from(9));
    assert_eq!(to_text_with_options(&input, options), Value::from("<bigint>"));
    // Closed-set kinds never reach the fallback
    assert_eq!(
        to_text_with_options(&Value::Null, options),
        Value::from("null")
    );
    assert_eq!(
        to_text_with_options(&Value::from(true), options),
        Value::from("true")
    );
}

#[test]
fn test_inputs_built_from_json() {
    let input: Value = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
    assert_eq!(to_text(&input), value!([["1", "2"], ["3", "4"]]));

    let scalar: Value = serde_json::from_str("true").unwrap();
    assert_eq!(to_text(&scalar), Value::from("true"));
}

#[test]
fn test_converted_output_serializes_to_json_strings() {
    let converted = to_text(&value!([true, 4.2]));
    let json = serde_json::to_string(&converted).unwrap();
    assert_eq!(json, r#"["true","4.2"]"#);
}

#[test]
fn test_tex_template_table() {
    assert_eq!(tex_template(0), Some(r#"\mathtt{""}"#));
    assert_eq!(
        tex_template(1),
        Some(r"\mathrm{string}\left(${args[0]}\right)")
    );
    assert_eq!(tex_template(2), None);
    assert_eq!(tex_template(usize::MAX), None);
}
