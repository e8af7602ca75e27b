//! Universal invariants of the transform, exercised as concrete regression
//! cases rather than a property-testing harness.

use pretty_assertions::assert_eq;

#[test]
fn instrumented_output_is_never_shorter_than_the_source() {
    let cases = [
        "var a = 1;",
        "if (a) b(); else c();",
        "for (;;) {}",
        "function f(a, b) { return a + b; }",
        "",
        ";",
    ];
    for source in cases {
        let out = gasmeter::transform(source).unwrap();
        assert!(out.len() >= source.len(), "shrunk for {source:?}: {out:?}");
    }
}

#[test]
fn an_empty_script_instruments_to_itself() {
    assert_eq!(gasmeter::transform("").unwrap(), "");
}

#[test]
fn a_script_with_no_tracked_nodes_instruments_to_itself() {
    assert_eq!(gasmeter::transform("var a;").unwrap(), "var a;");
    assert_eq!(gasmeter::transform("a;").unwrap(), "a;");
}

#[test]
fn two_independent_statements_are_instrumented_independently() {
    let out = gasmeter::transform("f();g();").unwrap();
    assert_eq!(out, "_instruction_counter.incr(1);f();_instruction_counter.incr(1);g();");
}

#[test]
fn deeply_nested_control_flow_tracks_every_level() {
    let out = gasmeter::transform("if (a) { if (b) { c(); } }").unwrap();
    assert_eq!(out, "if (a) { if (b) { _instruction_counter.incr(1);c(); } }");
}

#[test]
fn untracked_test_expressions_contribute_no_inner_beginning_increment() {
    assert_eq!(gasmeter::transform("if (a) { b(); }").unwrap(), "if (a) { _instruction_counter.incr(1);b(); }");
}

#[test]
fn reserved_identifier_guardrail_only_matches_the_exact_name() {
    assert!(gasmeter::transform("var _instruction_counterX = 1;").is_ok());
    assert!(gasmeter::transform("var my_instruction_counter = 1;").is_ok());
}

#[test]
fn guardrail_is_checked_even_inside_nested_function_bodies() {
    let err = gasmeter::transform("function outer() { var _instruction_counter = 1; }").unwrap_err();
    assert!(matches!(err, gasmeter::TransformError::ReservedIdentifier(_)));
}

#[test]
fn parse_exposes_the_ast_without_instrumenting() {
    let script = gasmeter::parse("var a = 1;").unwrap();
    assert_eq!(script.body.len(), 1);
}

#[test]
fn parse_and_transform_agree_on_which_scripts_are_valid() {
    assert!(gasmeter::parse("var a = ;").is_err());
    assert!(gasmeter::transform("var a = ;").is_err());
}
