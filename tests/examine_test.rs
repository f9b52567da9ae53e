//! Tests for combined validation and extraction.

use examiner::{diagnose, examine, inspect, predicates, see, where_all, Outcome, Spec};
use serde_json::{json, Value};

fn array_and_nested_spec() -> Spec {
    Spec::map([(
        "a",
        Spec::map([(
            "h",
            Spec::seq([
                Spec::any(),
                see(|v| v.is_array(), "foo", None).into(),
                Spec::present(),
                Spec::map([(
                    "l",
                    Spec::map([(
                        "m",
                        see(
                            |v| where_all(&Spec::pattern(&json!({"n": true})), v),
                            "bar",
                            None,
                        ),
                    )]),
                )]),
            ]),
        )]),
    )])
}

// The same shape built from plain predicates answering a name or nothing.
fn predicate_spec() -> Spec {
    let conforms = predicates::conforms(Spec::pattern(&json!({"n": true})));
    Spec::map([(
        "a",
        Spec::map([(
            "h",
            Spec::seq([
                Spec::any(),
                Spec::predicate(|v: &Value| v.is_array().then_some("foo")),
                Spec::present(),
                Spec::map([(
                    "l",
                    Spec::map([(
                        "m",
                        Spec::predicate(move |v: &Value| {
                            conforms.probe(v).is_valid().then_some("bar")
                        }),
                    )]),
                )]),
            ]),
        )]),
    )])
}

fn complete_data() -> Value {
    json!({
        "a": {
            "h": [
                {"i": 5},
                [{"j": 6, "k": 7}, {"j": 8, "k": "nine"}],
                10,
                {"l": {"m": {"n": false}}}
            ]
        }
    })
}

fn incomplete_data() -> Value {
    json!({
        "a": {
            "h": [
                {"i": 5},
                [{"j": 8, "k": "nine"}]
            ]
        }
    })
}

#[test]
fn test_extracts_with_see_leaves() {
    let found = examine(&array_and_nested_spec(), &complete_data()).unwrap();
    assert_eq!(
        found.to_json(),
        json!({
            "foo": [{"j": 6, "k": 7}, {"j": 8, "k": "nine"}],
            "bar": {"n": false}
        })
    );
}

#[test]
fn test_rejects_missing_element_with_see_leaves() {
    assert!(examine(&array_and_nested_spec(), &incomplete_data()).is_none());
}

#[test]
fn test_extracts_with_naming_predicates() {
    let found = examine(&predicate_spec(), &complete_data()).unwrap();
    assert_eq!(found.names().collect::<Vec<_>>(), vec!["foo", "bar"]);
    assert_eq!(found.get("bar"), Some(&json!({"n": false})));
}

#[test]
fn test_rejects_missing_element_with_naming_predicates() {
    assert!(examine(&predicate_spec(), &incomplete_data()).is_none());
}

#[test]
fn test_see_binds_array() {
    let spec = Spec::map([("a", see(|v| v.is_array(), "foo", None))]);
    let found = examine(&spec, &json!({"a": [1, 2]})).unwrap();
    assert_eq!(found.to_json(), json!({"foo": [1, 2]}));
}

#[test]
fn test_see_rejects_non_array() {
    let spec = Spec::map([("a", see(|v| v.is_array(), "foo", None))]);
    assert!(examine(&spec, &json!({"a": 5})).is_none());
}

#[test]
fn test_presence_flag_is_inert() {
    for presence in [None, Some(true), Some(false)] {
        let spec = Spec::map([("a", see(|v| v.is_array(), "foo", presence))]);
        assert!(examine(&spec, &json!({"a": 5})).is_none());
        assert!(examine(&spec, &json!({})).is_none());
    }
}

#[test]
fn test_name_markers_and_constants_together() {
    let spec = Spec::map([
        ("kind", Spec::equals("user")),
        ("id", Spec::bind("id")),
        ("tags", Spec::seq([Spec::bind("first_tag")])),
    ]);

    let found = examine(&spec, &json!({"kind": "user", "id": 7, "tags": ["x", "y"]})).unwrap();
    assert_eq!(found.to_json(), json!({"id": 7, "first_tag": "x"}));

    assert!(examine(&spec, &json!({"kind": "admin", "id": 7, "tags": ["x"]})).is_none());
}

#[test]
fn test_template_in_examine_requires_marked_positions() {
    let spec = Spec::template(&json!({"a": "foo", "b": {"c": "bar"}}));
    assert!(examine(&spec, &json!({"a": 1, "b": {"c": 3}})).is_some());
    assert!(examine(&spec, &json!({"a": 1, "b": {}})).is_none());
    assert!(examine(&spec, &json!({"a": 1, "b": 3})).is_none());
}

#[test]
fn test_success_without_markers_is_empty() {
    let found = examine(&Spec::pattern(&json!({"a": 1})), &json!({"a": 1})).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_predicate_valid_without_name_binds_nothing() {
    let spec = Spec::map([("a", Spec::predicate(|_: &Value| Outcome::Valid))]);
    assert!(examine(&spec, &json!({"a": 1})).unwrap().is_empty());
}

#[test]
fn test_empty_name_fails() {
    let spec = Spec::map([("a", Spec::predicate(|_: &Value| ""))]);
    assert!(examine(&spec, &json!({"a": 1})).is_none());
}

#[test]
fn test_absent_position_with_absent_spec() {
    let spec = Spec::map([("gone", Spec::absent()), ("here", Spec::bind("here"))]);
    let found = examine(&spec, &json!({"here": 1})).unwrap();
    assert_eq!(found.get("here"), Some(&json!(1)));
    assert!(examine(&spec, &json!({"here": 1, "gone": null})).is_none());
}

#[test]
fn test_collision_last_write_wins() {
    let spec = Spec::template(&json!({"a": "x", "b": "x"}));
    let found = examine(&spec, &json!({"a": 1, "b": 2})).unwrap();
    assert_eq!(found.to_json(), json!({"x": 2}));
}

#[test]
fn test_idempotent() {
    let spec = array_and_nested_spec();
    let data = complete_data();
    assert_eq!(examine(&spec, &data), examine(&spec, &data));

    // A failing call in between leaves nothing behind.
    assert!(examine(&spec, &incomplete_data()).is_none());
    assert_eq!(examine(&spec, &data), examine(&spec, &data));
}

#[test]
#[should_panic(expected = "predicate blew up")]
fn test_predicate_panic_propagates() {
    let spec = Spec::map([(
        "a",
        Spec::predicate(|_: &Value| -> bool { panic!("predicate blew up") }),
    )]);
    let _ = examine(&spec, &json!({"a": 1}));
}

#[test]
fn test_agrees_with_where_all_without_markers() {
    let specs = [
        Spec::pattern(&json!({"a": 1, "b": [null, "x"], "c": false})),
        Spec::pattern(&json!([true, {"d": null}])),
        Spec::map([
            ("a", Spec::from(predicates::is_number())),
            ("b", Spec::seq([predicates::matches("^x+$").unwrap()])),
        ]),
        Spec::pattern(&json!({})),
        Spec::absent(),
        Spec::any(),
    ];
    let data = [
        json!({"a": 1, "b": [0, "x"]}),
        json!({"a": 1, "b": [0, "y"]}),
        json!({"a": 1, "b": ["xx"], "c": 3}),
        json!([0, {"d": 1}]),
        json!([0, 1]),
        json!(5),
        json!(null),
        json!({}),
    ];

    for spec in &specs {
        for item in &data {
            assert_eq!(
                where_all(spec, item),
                examine(spec, item).is_some(),
                "disagreement on {:?} / {}",
                spec,
                item
            );
        }
    }
}

mod deep_nesting {
    use super::*;

    const LEVELS: usize = 200;

    #[test]
    fn test_deep_map_agrees_with_where_all() {
        let mut spec = Spec::equals(1);
        let mut data = json!(1);
        for _ in 0..LEVELS {
            spec = Spec::map([("a", spec)]);
            data = json!({ "a": data });
        }

        assert!(where_all(&spec, &data));
        assert!(examine(&spec, &data).is_some());
        assert!(diagnose(&spec, &data).is_success());
    }

    #[test]
    fn test_deep_seq_extracts_like_inspect() {
        let mut spec = Spec::bind("deep");
        let mut data = json!(7);
        for _ in 0..LEVELS {
            spec = Spec::seq([spec]);
            data = json!([data]);
        }

        let found = examine(&spec, &data).unwrap();
        assert_eq!(found.get("deep"), Some(&json!(7)));
        assert_eq!(inspect(&spec, &data).get("deep"), found.get("deep"));
    }

    #[test]
    fn test_deep_mismatch_reports_full_path() {
        let mut spec = Spec::equals(1);
        let mut data = json!(2);
        for _ in 0..LEVELS {
            spec = Spec::seq([spec]);
            data = json!([data]);
        }

        let errors = diagnose(&spec, &data).into_result().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().path.len(), LEVELS);
        assert_eq!(errors.first().code(), "not_equal");
    }
}
