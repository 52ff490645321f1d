use parsimony::grammars::json;
use parsimony::parse;
use proptest::prelude::*;
use serde_json::{Value, json};

fn round_trip(value: &Value) -> Value {
    let text = serde_json::to_string(value).unwrap();
    parse(&text, &json::rfc4627()).unwrap()
}

#[test]
fn test_empty_array() {
    assert_eq!(round_trip(&json!([])), json!([]));
}

#[test]
fn test_empty_object() {
    assert_eq!(round_trip(&json!({})), json!({}));
}

#[test]
fn test_array() {
    let value = json!([
        false,
        true,
        null,
        124,
        0,
        42.8,
        -89.4,
        0.35e3,
        12.5e-2,
        3e3,
        3e-3,
        87e+2,
        0.352,
        "nauitedpent",
        "s\\utenau\"austeun\"",
        "\u{8}sdpt a \n ast/ein \t /ai\r \u{c}ets \u{af7b}sdet, n",
        {},
        [],
        "",
        {
            "auets": false,
            "usetaa": [14, "tisen"],
            "ddd": {
                "rr": null,
                "satu": "sutenstui\t \n \u{45}"
            }
        }
    ]);

    assert_eq!(round_trip(&value), value);
}

#[test]
fn test_object() {
    let value = json!({
        "uites": {},
        "sutaiset": [],
        "satuie": false,
        "tuase": {
            "sett": null,
            "sauietn": "ttsu\"\"\" tuestae \u{1234} \n",
            "tesauitn": [1, 53, 4e-34, 0.43e3, 0],
            "tuaisen": [false, true]
        }
    });

    assert_eq!(round_trip(&value), value);
}

#[test]
fn test_number_literal_edge_cases() {
    let parsed = parse("[12.5e-2, 12.5E-2, -0.0, 1E400]", &json::rfc4627());
    assert!(parsed.is_err());

    let parsed = parse("[12.5e-2, 12.5E-2, 87E+2]", &json::rfc4627()).unwrap();
    assert_eq!(parsed, json!([0.125, 0.125, 8700.0]));
}

#[test]
fn test_control_characters_escaped_by_serializer() {
    let value = json!(["\u{1}\u{1f}", "tab\there"]);
    assert_eq!(round_trip(&value), value);
}

#[test]
fn test_error_message() {
    let err = parse("[1,2", &json::rfc4627()).unwrap_err();
    assert_eq!(err.to_string(), "unexpected \"2\", expecting \"]\"");
    assert_eq!(err.offset(), 3);
}

fn arbitrary_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<u64>().prop_map(|n| json!(n)),
        (-1.0e12f64..1.0e12).prop_map(|x| json!(x)),
        any::<String>().prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(any::<String>(), inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn reparses_serialized_values(value in arbitrary_value()) {
        let wrapped = json!([value]);
        prop_assert_eq!(round_trip(&wrapped), wrapped);
    }

    #[test]
    fn reparses_pretty_printed_values(value in arbitrary_value()) {
        let wrapped = json!({ "value": value });
        let text = serde_json::to_string_pretty(&wrapped).unwrap();
        prop_assert_eq!(parse(&text, &json::rfc4627()).unwrap(), wrapped);
    }
}
