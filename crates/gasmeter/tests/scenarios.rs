//! End-to-end instrumentation scenarios, one per worked example in the
//! specification this transformer implements.

use pretty_assertions::assert_eq;

// ==================== statement-level tracked nodes ====================

#[test]
fn expression_statement_with_call_gets_a_leading_increment() {
    let out = gasmeter::transform("f();").unwrap();
    assert_eq!(out, "_instruction_counter.incr(1);f();");
}

#[test]
fn variable_declaration_with_binary_expression_counts_once_at_the_statement() {
    let out = gasmeter::transform("var a = 1 + 2;").unwrap();
    assert_eq!(out, "_instruction_counter.incr(1);var a = 1 + 2;");
}

#[test]
fn assignment_and_binary_expression_coalesce_at_the_same_statement() {
    let out = gasmeter::transform("a = b + c;").unwrap();
    assert_eq!(out, "_instruction_counter.incr(2);a = b + c;");
}

#[test]
fn throw_statement_counts_itself_and_is_its_own_anchor() {
    let out = gasmeter::transform("throw e;").unwrap();
    assert_eq!(out, "_instruction_counter.incr(1);throw e;");
}

#[test]
fn return_statement_is_an_anchor_but_not_itself_tracked() {
    let out = gasmeter::transform("function f() { return a + b; }").unwrap();
    assert_eq!(out, "function f() { _instruction_counter.incr(1);return a + b; }");
}

// ==================== control flow ====================

#[test]
fn if_with_bare_consequent_is_block_wrapped_and_test_uses_inner_beginning() {
    let out = gasmeter::transform("if (a > 0) a++;").unwrap();
    assert_eq!(
        out,
        "if (_instruction_counter.incr(1) && a > 0) {_instruction_counter.incr(1);a++;}"
    );
}

#[test]
fn if_with_already_blocked_branches_is_left_unwrapped() {
    let out = gasmeter::transform("if (a > 0) { a++; } else { b++; }").unwrap();
    assert_eq!(
        out,
        "if (_instruction_counter.incr(1) && a > 0) { _instruction_counter.incr(1);a++; } else { _instruction_counter.incr(1);b++; }"
    );
}

#[test]
fn while_loop_wraps_body_and_counts_test_inner() {
    let out = gasmeter::transform("while (i < 10) i++;").unwrap();
    assert_eq!(
        out,
        "while (_instruction_counter.incr(1) && i < 10) {_instruction_counter.incr(1);i++;}"
    );
}

#[test]
fn for_loop_counts_init_before_and_test_update_inner() {
    let out = gasmeter::transform("for (i = 0; i < n; i++) sum += i;").unwrap();
    assert_eq!(
        out,
        "_instruction_counter.incr(1);for (i = 0; _instruction_counter.incr(1) && i < n; _instruction_counter.incr(1) && i++) {_instruction_counter.incr(1);sum += i;}"
    );
}

#[test]
fn for_in_counts_a_tracked_right_hand_side_before_the_loop() {
    let out = gasmeter::transform("for (var k in getObj()) use(k);").unwrap();
    assert_eq!(
        out,
        "_instruction_counter.incr(1);for (var k in getObj()) {_instruction_counter.incr(1);use(k);}"
    );
}

#[test]
fn switch_counts_a_tracked_discriminant_before_node() {
    let out = gasmeter::transform("switch (f()) { case 1: g(); break; }").unwrap();
    assert_eq!(
        out,
        "_instruction_counter.incr(1);switch (f()) { case 1: _instruction_counter.incr(1);g(); break; }"
    );
}

#[test]
fn with_statement_wraps_body_and_counts_a_tracked_object_before_node() {
    let out = gasmeter::transform("with (getObj()) a++;").unwrap();
    assert_eq!(out, "_instruction_counter.incr(1);with (getObj()) {_instruction_counter.incr(1);a++;}");
}

#[test]
fn untracked_discriminant_and_object_contribute_no_increment() {
    assert_eq!(
        gasmeter::transform("switch (x) { case 1: break; }").unwrap(),
        "switch (x) { case 1: break; }"
    );
    assert_eq!(gasmeter::transform("with (obj) { }").unwrap(), "with (obj) { }");
}

// ==================== nested / no-ancestor fallback ====================

#[test]
fn nested_tracked_expression_climbs_to_the_enclosing_statement() {
    let out = gasmeter::transform("var a = (f(), g());").unwrap();
    assert_eq!(out, "_instruction_counter.incr(2);var a = (f(), g());");
}

#[test]
fn arrow_concise_body_climbs_past_the_arrow_to_its_statement() {
    let out = gasmeter::transform("var f = () => a + b;").unwrap();
    assert_eq!(out, "_instruction_counter.incr(1);var f = () => a + b;");
}

// ==================== guardrail ====================

#[test]
fn rebinding_the_counter_identifier_is_rejected() {
    let err = gasmeter::transform("var _instruction_counter = 1;").unwrap_err();
    assert!(matches!(err, gasmeter::TransformError::ReservedIdentifier(_)));
}

#[test]
fn rebinding_as_a_function_declaration_is_rejected() {
    let err = gasmeter::transform("function _instruction_counter() {}").unwrap_err();
    assert!(matches!(err, gasmeter::TransformError::ReservedIdentifier(_)));
}

#[test]
fn destructuring_the_counter_name_is_not_an_immediate_binding_and_is_allowed() {
    // Per spec, the guardrail only fires when the reserved name's
    // *immediate* parent is a VariableDeclarator/FunctionDeclaration/
    // FunctionExpression, not any binding buried in a pattern.
    assert!(gasmeter::transform("var {_instruction_counter} = x;").is_ok());
}

// ==================== parse failures ====================

#[test]
fn syntactically_invalid_scripts_fail_to_parse_and_produce_no_output() {
    let err = gasmeter::transform("var a = ;").unwrap_err();
    assert!(matches!(err, gasmeter::TransformError::Parse(_)));
}
