//! Integration tests for `evaluate` and the standard operator set.

use json_logic::{evaluate, Arity, LogicError, Operator, Registry};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;

fn check(logic: Value, expected: Value, data: Value) {
    let result = evaluate(&logic, &data).unwrap_or_else(|e| panic!("evaluate({}) failed: {}", logic, e));
    assert_eq!(result, expected, "logic: {}", logic);
}

fn check_err(logic: Value, data: Value) -> LogicError {
    evaluate(&logic, &data)
        .err()
        .unwrap_or_else(|| panic!("expected error for {}", logic))
}

// ----------------------------------------------------------------- Evaluator

#[test]
fn test_literals_pass_through() {
    check(json!(1), json!(1), json!(null));
    check(json!("x"), json!("x"), json!({"x": 1}));
    check(json!(null), json!(null), json!(null));
    check(json!({}), json!({}), json!(null));
    check(json!({"a": 1, "b": 2}), json!({"a": 1, "b": 2}), json!(null));
}

#[test]
fn test_array_of_rules() {
    check(
        json!([{"+": [1, 1]}, "x", {"var": "a"}]),
        json!([2, "x", 7]),
        json!({"a": 7}),
    );
    assert_eq!(
        check_err(json!([1, {"nope": []}]), json!(null)),
        LogicError::UnknownOperator("nope".to_string())
    );
}

#[test]
fn test_unknown_operator() {
    let err = check_err(json!({"nope": [1]}), json!(null));
    assert_eq!(err.to_string(), "Unknown operator: nope");
}

#[test]
fn test_non_array_operand_is_single_param() {
    check(json!({"var": "a"}), json!(1), json!({"a": 1}));
    check(json!({"var": ["a"]}), json!(1), json!({"a": 1}));
    check(json!({"!": true}), json!(false), json!(null));
}

// ----------------------------------------------------------------- Data access

#[test]
fn test_var() {
    check(json!({"var": "a.b"}), json!(5), json!({"a": {"b": 5}}));
    check(json!({"var": "z"}), json!(null), json!({"a": 1}));
    check(json!({"var": ["z", 26]}), json!(26), json!({"a": 1}));
    check(json!({"var": "a.0"}), json!(8), json!({"a": [8, 9]}));
    check(json!({"var": 1}), json!("b"), json!(["a", "b"]));
    check(json!({"var": "a"}), json!(null), json!(null));
}

#[test]
fn test_var_whole_document() {
    check(json!({"var": ""}), json!({"a": 1}), json!({"a": 1}));
    check(json!({"var": []}), json!([1, 2]), json!([1, 2]));
    check(json!({"var": null}), json!({}), json!(null));
}

#[test]
fn test_var_key_is_evaluated() {
    check(
        json!({"var": {"cat": ["a", ".b"]}}),
        json!(1),
        json!({"a": {"b": 1}}),
    );
}

#[test]
fn test_var_default_is_lazy() {
    check(json!({"var": ["a", {"nope": []}]}), json!(1), json!({"a": 1}));
    check(json!({"var": ["z", {"+": [1, 2]}]}), json!(3), json!({"a": 1}));
}

#[test]
fn test_var_rejects_structured_key() {
    assert!(matches!(
        check_err(json!({"var": [["a"]]}), json!({"a": 1})),
        LogicError::UnexpectedType { .. }
    ));
}

#[test]
fn test_missing() {
    check(json!({"missing": ["a", "b"]}), json!(["b"]), json!({"a": 1}));
    check(json!({"missing": ["a", "b"]}), json!([]), json!({"a": 1, "b": 2}));
    check(json!({"missing": ["a"]}), json!(["a"]), json!({"a": ""}));
    check(json!({"missing": ["a"]}), json!(["a"]), json!({"a": null}));
    check(json!({"missing": ["a.b"]}), json!([]), json!({"a": {"b": 0}}));
    check(json!({"missing": []}), json!([]), json!(null));
}

#[test]
fn test_missing_with_computed_keys() {
    check(
        json!({"missing": {"merge": ["vin", {"if": [{"var": "financing"}, ["apr"], []]}]}}),
        json!(["vin", "apr"]),
        json!({"financing": true}),
    );
    check(
        json!({"missing": {"merge": ["vin", {"if": [{"var": "financing"}, ["apr"], []]}]}}),
        json!(["vin"]),
        json!({"financing": false}),
    );
}

#[test]
fn test_missing_some() {
    check(
        json!({"missing_some": [1, ["a", "b", "c"]]}),
        json!([]),
        json!({"a": "apple"}),
    );
    check(
        json!({"missing_some": [2, ["a", "b", "c"]]}),
        json!(["b", "c"]),
        json!({"a": "apple"}),
    );
    assert!(matches!(
        check_err(json!({"missing_some": [1, "a"]}), json!(null)),
        LogicError::UnexpectedType { .. }
    ));
    assert!(matches!(
        check_err(json!({"missing_some": [1]}), json!(null)),
        LogicError::ArityError(_)
    ));
}

// ----------------------------------------------------------------- Branching

#[test]
fn test_if() {
    check(json!({"if": [true, "yes", "no"]}), json!("yes"), json!(null));
    check(json!({"if": [false, "yes", "no"]}), json!("no"), json!(null));
    check(json!({"if": []}), json!(null), json!(null));
    check(json!({"if": [false, "yes"]}), json!(null), json!(null));
    check(json!({"if": ["x"]}), json!("x"), json!(null));
}

#[test]
fn test_if_chain() {
    let logic = json!({"if": [
        {"<": [{"var": "temp"}, 0]}, "freezing",
        {"<": [{"var": "temp"}, 100]}, "liquid",
        "gas"
    ]});
    check(logic.clone(), json!("freezing"), json!({"temp": -5}));
    check(logic.clone(), json!("liquid"), json!({"temp": 55}));
    check(logic, json!("gas"), json!({"temp": 120}));
}

#[test]
fn test_if_is_lazy() {
    check(json!({"if": [true, 1, {"nope": []}]}), json!(1), json!(null));
    check(json!({"?:": [false, {"nope": []}, 2]}), json!(2), json!(null));
}

// ----------------------------------------------------------------- Logic

#[test]
fn test_not() {
    check(json!({"!": [true]}), json!(false), json!(null));
    check(json!({"!": [[]]}), json!(true), json!(null));
    check(json!({"!": ["0"]}), json!(false), json!(null));
    check(json!({"!!": [0]}), json!(false), json!(null));
    check(json!({"!!": [{}]}), json!(true), json!(null));
    assert!(matches!(check_err(json!({"!": []}), json!(null)), LogicError::ArityError(_)));
    assert!(matches!(check_err(json!({"!!": []}), json!(null)), LogicError::ArityError(_)));
}

#[test]
fn test_and_or_return_operands() {
    check(json!({"and": [true, "a", 3]}), json!(3), json!(null));
    check(json!({"and": [true, "", 3]}), json!(""), json!(null));
    check(json!({"or": [false, 0, "a"]}), json!("a"), json!(null));
    check(json!({"or": [false, 0]}), json!(0), json!(null));
    check(json!({"and": [1]}), json!(1), json!(null));
}

#[test]
fn test_and_or_short_circuit() {
    check(json!({"or": [true, {"nope": []}]}), json!(true), json!(null));
    check(json!({"and": [false, {"nope": []}]}), json!(false), json!(null));
    assert!(matches!(
        check_err(json!({"and": [true, {"nope": []}]}), json!(null)),
        LogicError::UnknownOperator(_)
    ));
}

#[test]
fn test_and_or_arity() {
    let err = check_err(json!({"and": []}), json!(null));
    assert_eq!(err.to_string(), "\"and\" operator expects at least 1 operands.");
    assert!(matches!(check_err(json!({"or": []}), json!(null)), LogicError::ArityError(_)));
}

// ----------------------------------------------------------------- Comparison

#[test]
fn test_strict_equality() {
    check(json!({"===": [1, 1]}), json!(true), json!(null));
    check(json!({"===": [1, 1.0]}), json!(true), json!(null));
    check(json!({"===": [1, "1"]}), json!(false), json!(null));
    check(json!({"!==": [1, "1"]}), json!(true), json!(null));
    check(json!({"===": [null, null]}), json!(true), json!(null));
    check(json!({"!==": [true, true]}), json!(false), json!(null));
}

#[test]
fn test_strict_equality_errors() {
    let err = check_err(json!({"===": [1]}), json!(null));
    assert_eq!(err.to_string(), "\"===\" operator expects 2 operands.");
    assert!(matches!(check_err(json!({"!==": [1, 2, 3]}), json!(null)), LogicError::ArityError(_)));
    assert_eq!(check_err(json!({"===": [[1], [1]]}), json!(null)), LogicError::NotPrimitive);
}

#[test]
fn test_ordering() {
    check(json!({"<": [1, 2]}), json!(true), json!(null));
    check(json!({"<": [2, 1]}), json!(false), json!(null));
    check(json!({"<=": [1, 1]}), json!(true), json!(null));
    check(json!({">": [2, 1]}), json!(true), json!(null));
    check(json!({">=": [1, 1]}), json!(true), json!(null));
    check(json!({">": ["b", "a"]}), json!(true), json!(null));
    check(json!({"<": ["10", 9]}), json!(false), json!(null));
    check(json!({"<": [null, true]}), json!(true), json!(null));
}

#[test]
fn test_between() {
    check(json!({"<": [1, 2, 3]}), json!(true), json!(null));
    check(json!({"<": [1, 1, 3]}), json!(false), json!(null));
    check(json!({"<=": [1, 1, 3]}), json!(true), json!(null));
    check(json!({"<": [1, 4, 3]}), json!(false), json!(null));
    check(
        json!({"<=": [0, {"var": "n"}, 10]}),
        json!(true),
        json!({"n": 10}),
    );
}

#[test]
fn test_ordering_errors() {
    assert!(matches!(check_err(json!({"<": [1]}), json!(null)), LogicError::ArityError(_)));
    let err = check_err(json!({"<": [1, 2, 3, 4]}), json!(null));
    assert_eq!(err.to_string(), "\"<\" operator expects at most 3 operands.");
    assert_eq!(
        check_err(json!({"<": [1, "a"]}), json!(null)),
        LogicError::InvalidNumber("a".to_string())
    );
    assert_eq!(check_err(json!({">": [1, [1]]}), json!(null)), LogicError::NotPrimitive);
    // The second pair is still checked when the first already fails.
    assert_eq!(check_err(json!({"<": [2, 1, {}]}), json!(null)), LogicError::NotPrimitive);
}

// ----------------------------------------------------------------- Arithmetic

#[test]
fn test_add_multiply() {
    check(json!({"+": [1, 2]}), json!(3), json!(null));
    check(json!({"+": [1, 2, 3, 4]}), json!(10), json!(null));
    check(json!({"+": ["1", "10.5"]}), json!(11.5), json!(null));
    check(json!({"+": "3.5"}), json!(3.5), json!(null));
    check(json!({"+": []}), json!(0), json!(null));
    check(json!({"*": [2, 3, 4]}), json!(24), json!(null));
    check(json!({"*": [0.5]}), json!(0.5), json!(null));
    assert!(matches!(check_err(json!({"*": []}), json!(null)), LogicError::ArityError(_)));
}

#[test]
fn test_subtract_divide_modulo() {
    check(json!({"-": [5, 2]}), json!(3), json!(null));
    check(json!({"-": 2}), json!(-2), json!(null));
    check(json!({"/": [4, 2]}), json!(2), json!(null));
    check(json!({"/": [1, 4]}), json!(0.25), json!(null));
    check(json!({"%": [7, 3]}), json!(1), json!(null));
    check(json!({"%": [-7, 3]}), json!(-1), json!(null));
    assert!(matches!(check_err(json!({"-": []}), json!(null)), LogicError::ArityError(_)));
    assert!(matches!(check_err(json!({"/": [1]}), json!(null)), LogicError::ArityError(_)));
    assert!(matches!(check_err(json!({"%": [1]}), json!(null)), LogicError::ArityError(_)));
}

#[test]
fn test_arithmetic_errors() {
    assert_eq!(check_err(json!({"/": [1, 0]}), json!(null)), LogicError::Infinite);
    assert_eq!(check_err(json!({"%": [1, 0]}), json!(null)), LogicError::NotANumber);
    assert_eq!(
        check_err(json!({"+": [1.7976931348623157e308, 1.7976931348623157e308]}), json!(null)),
        LogicError::Infinite
    );
    assert_eq!(check_err(json!({"*": [1e200, 1e200]}), json!(null)), LogicError::Infinite);
    assert_eq!(
        check_err(json!({"+": [1, "x"]}), json!(null)),
        LogicError::InvalidNumber("x".to_string())
    );
    assert_eq!(check_err(json!({"+": [1, [2]]}), json!(null)), LogicError::NotPrimitive);
}

#[test]
fn test_min_max() {
    check(json!({"min": [3, 1, 2]}), json!(1), json!(null));
    check(json!({"max": [3, 1, 2]}), json!(3), json!(null));
    check(json!({"max": ["4", 2.5]}), json!(4), json!(null));
    check(json!({"min": [-0.5, 2]}), json!(-0.5), json!(null));
    check(json!({"min": []}), json!(null), json!(null));
    check(json!({"max": []}), json!(null), json!(null));
    assert!(check_err(json!({"max": [1, "z"]}), json!(null)).to_string().contains("Invalid number"));
}

// ----------------------------------------------------------------- Arrays

#[test]
fn test_map() {
    check(
        json!({"map": [{"var": "xs"}, {"*": [{"var": ""}, 2]}]}),
        json!([2, 4, 6]),
        json!({"xs": [1, 2, 3]}),
    );
    check(json!({"map": [{"var": "nope"}, {"var": ""}]}), json!([]), json!({}));
    check(json!({"map": [5, {"var": ""}]}), json!([]), json!(null));
}

#[test]
fn test_filter() {
    check(
        json!({"filter": [{"var": "xs"}, {"%": [{"var": ""}, 2]}]}),
        json!([1, 3, 5]),
        json!({"xs": [1, 2, 3, 4, 5]}),
    );
    check(json!({"filter": ["abc", true]}), json!([]), json!(null));
}

#[test]
fn test_reduce() {
    check(
        json!({"reduce": [
            {"var": "xs"},
            {"+": [{"var": "current"}, {"var": "accumulator"}]},
            0
        ]}),
        json!(15),
        json!({"xs": [1, 2, 3, 4, 5]}),
    );
    // The initial value is evaluated against the outer data.
    check(
        json!({"reduce": [
            [1, 2],
            {"*": [{"var": "current"}, {"var": "accumulator"}]},
            {"var": "seed"}
        ]}),
        json!(6),
        json!({"seed": 3}),
    );
    check(json!({"reduce": [5, {"var": "current"}, 7]}), json!(7), json!(null));
    assert!(matches!(
        check_err(json!({"reduce": [[1], {"var": "current"}]}), json!(null)),
        LogicError::ArityError(_)
    ));
}

#[test]
fn test_quantifiers() {
    let positive = json!({">": [{"var": ""}, 0]});
    check(json!({"all": [[1, 2, 3], positive]}), json!(true), json!(null));
    check(json!({"all": [[1, -2, 3], positive]}), json!(false), json!(null));
    check(json!({"some": [[-1, 0, 1], positive]}), json!(true), json!(null));
    check(json!({"some": [[-1, 0], positive]}), json!(false), json!(null));
    check(json!({"none": [[-1, 0], positive]}), json!(true), json!(null));
    check(json!({"none": [[-1, 0, 1], positive]}), json!(false), json!(null));
}

#[test]
fn test_quantifiers_on_empty() {
    check(json!({"all": [[], true]}), json!(false), json!(null));
    check(json!({"none": [[], true]}), json!(true), json!(null));
    check(json!({"some": [[], true]}), json!(false), json!(null));
}

#[test]
fn test_quantifiers_reject_non_array() {
    let err = check_err(json!({"all": [5, true]}), json!(null));
    assert_eq!(err.to_string(), "\"all\" operator expects an array but got number.");
    assert!(matches!(
        check_err(json!({"none": [{"var": "x"}, true]}), json!({"x": "s"})),
        LogicError::UnexpectedType { .. }
    ));
    assert!(matches!(check_err(json!({"some": [null, true]}), json!(null)), LogicError::UnexpectedType { .. }));
    assert!(matches!(check_err(json!({"some": [[1]]}), json!(null)), LogicError::ArityError(_)));
}

#[test]
fn test_merge() {
    check(json!({"merge": [[1, 2], [3], 4]}), json!([1, 2, 3, 4]), json!(null));
    check(json!({"merge": [[1, [2]]]}), json!([1, [2]]), json!(null));
    check(json!({"merge": []}), json!([]), json!(null));
    check(json!({"merge": 1}), json!([1]), json!(null));
}

#[test]
fn test_in() {
    check(json!({"in": ["Spring", "Springfield"]}), json!(true), json!(null));
    check(json!({"in": ["Fall", "Springfield"]}), json!(false), json!(null));
    check(json!({"in": [1, "a1"]}), json!(true), json!(null));
    check(json!({"in": ["i", ["a", "i"]]}), json!(true), json!(null));
    check(json!({"in": [1, ["1"]]}), json!(false), json!(null));
    check(json!({"in": [1, []]}), json!(false), json!(null));
}

#[test]
fn test_in_errors() {
    assert_eq!(check_err(json!({"in": [[1], [1]]}), json!(null)), LogicError::NotPrimitive);
    assert_eq!(check_err(json!({"in": [1, [[1]]]}), json!(null)), LogicError::NotPrimitive);
    assert!(matches!(check_err(json!({"in": ["a", 5]}), json!(null)), LogicError::UnexpectedType { .. }));
    assert!(matches!(check_err(json!({"in": ["a"]}), json!(null)), LogicError::ArityError(_)));
}

// ----------------------------------------------------------------- Strings

#[test]
fn test_cat() {
    check(json!({"cat": ["I love", " pie"]}), json!("I love pie"), json!(null));
    check(json!({"cat": ["n=", 1.5, null, true]}), json!("n=1.5nulltrue"), json!(null));
    check(json!({"cat": []}), json!(""), json!(null));
    check(json!({"cat": "x"}), json!("x"), json!(null));
    assert_eq!(check_err(json!({"cat": [[1]]}), json!(null)), LogicError::NotStringable("array"));
}

#[test]
fn test_substr() {
    check(json!({"substr": ["jsonlogic", -5]}), json!("logic"), json!(null));
    check(json!({"substr": ["jsonlogic", 4, -2]}), json!("log"), json!(null));
    check(json!({"substr": ["jsonlogic", 1, 3]}), json!("son"), json!(null));
    check(json!({"substr": [12345, 1, 2]}), json!("23"), json!(null));
    check(json!({"substr": ["abc", 10]}), json!(""), json!(null));
    check(json!({"substr": ["abc", -10, 100]}), json!("abc"), json!(null));
}

#[test]
fn test_substr_errors() {
    assert!(matches!(check_err(json!({"substr": ["jsonlogic"]}), json!(null)), LogicError::ArityError(_)));
    let err = check_err(json!({"substr": ["a", 0, 1, 2]}), json!(null));
    assert_eq!(err.to_string(), "\"substr\" operator expects at most 3 operands.");
    assert!(matches!(check_err(json!({"substr": ["a", "b"]}), json!(null)), LogicError::InvalidNumber(_)));
}

// ----------------------------------------------------------------- Registry

#[test]
fn test_child_registry_overrides_operator() {
    let parent = Arc::new(Registry::standard());
    let mut child = Registry::derive(Arc::clone(&parent));
    child.register(
        "+",
        Operator::new(|apply, params, data| {
            let mut joined = String::new();
            for p in params {
                joined.push_str(&json_logic::to_string(&apply(p, data)?)?);
            }
            Ok(Value::String(joined))
        }),
    );

    let logic = json!({"+": [1, {"var": "x"}]});
    assert_eq!(child.apply(&logic, &json!({"x": 2})), Ok(json!("12")));
    assert_eq!(parent.apply(&logic, &json!({"x": 2})), Ok(json!(3)));
    assert_eq!(evaluate(&logic, &json!({"x": 2})), Ok(json!(3)));
}

#[test]
fn test_custom_operator_arity() {
    let mut registry = Registry::derive(Arc::new(Registry::standard()));
    registry.register(
        "double",
        Operator::new(|apply, params, data| {
            let n = json_logic::to_number(&apply(&params[0], data)?)?;
            Ok(json!(n * 2.0))
        })
        .with_arity(Arity::Fixed(1)),
    );
    assert_eq!(registry.apply(&json!({"double": 2.5}), &json!(null)), Ok(json!(5.0)));
    assert_eq!(
        registry.apply(&json!({"double": []}), &json!(null)),
        Err(LogicError::ArityError("\"double\" operator expects 1 operands.".to_string()))
    );
}

// ----------------------------------------------------------------- Properties

fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9f64).prop_map(|n| json!(n)),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

fn primitive_document() -> impl Strategy<Value = Value> {
    primitive().prop_recursive(3, 24, 6, |inner| prop::collection::vec(inner, 0..6).prop_map(Value::Array))
}

fn data_document() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!(null)),
        Just(json!({"a": 1})),
        Just(json!([1, 2, 3])),
        primitive(),
    ]
}

proptest! {
    #[test]
    fn prop_primitive_documents_evaluate_to_themselves(logic in primitive_document(), data in data_document()) {
        prop_assert_eq!(evaluate(&logic, &data), Ok(logic.clone()));
    }

    #[test]
    fn prop_double_negation_matches_truthiness(v in primitive()) {
        let expected = json_logic::truthy(&v);
        prop_assert_eq!(evaluate(&json!({"!!": [v]}), &json!(null)), Ok(Value::Bool(expected)));
    }
}
