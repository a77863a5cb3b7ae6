//! Integration tests for alias definitions

use rpncalc::eval::{Evaluator, eval};
use rpncalc::foundation::Value;

fn sink() -> impl FnMut(String) {
    |_| {}
}

#[test]
fn define_and_invoke() {
    let stack = eval("def tau 2 pi x end tau").unwrap();
    assert_eq!(stack, vec![Value::from(2.0 * std::f64::consts::PI)]);
}

#[test]
fn forth_style_markers_work_too() {
    assert_eq!(eval(": squared dup x ; 9 squared").unwrap(), vec![Value::from(81)]);
}

#[test]
fn markers_can_be_mixed() {
    assert_eq!(eval("def six 2 3 x ; six").unwrap(), vec![Value::from(6)]);
}

#[test]
fn definitions_survive_across_calls() {
    let mut evaluator = Evaluator::new();
    evaluator.eval("def avg + 2 /", &mut sink()).unwrap_err(); // unterminated
    evaluator.eval("def avg + 2 / end", &mut sink()).unwrap();
    assert_eq!(
        evaluator.eval("10 20 avg", &mut sink()).unwrap(),
        vec![Value::from(15)]
    );
}

#[test]
fn aliases_can_build_on_earlier_aliases() {
    let stack = eval("def four 2 2 + end def eight four 2 x end eight").unwrap();
    assert_eq!(stack, vec![Value::from(8)]);
}

#[test]
fn bodies_are_resolved_at_definition_time() {
    let mut evaluator = Evaluator::new();
    evaluator.eval("def two 2 end def four two two + end", &mut sink()).unwrap();
    assert_eq!(
        evaluator.eval("four", &mut sink()).unwrap(),
        vec![Value::from(4)]
    );
}

// =============================================================================
// Rejected definitions
// =============================================================================

#[test]
fn builtins_cannot_be_redefined() {
    let err = eval("def + 1 end").unwrap_err();
    assert_eq!(
        err.to_string(),
        "attempted to redefine operation \"+\" in definition starting at argument 1"
    );
}

#[test]
fn aliases_cannot_be_redefined_either() {
    let err = eval("def tau 2 pi x end def tau 6.28 end").unwrap_err();
    assert_eq!(
        err.to_string(),
        "attempted to redefine operation \"tau\" in definition starting at argument 7"
    );
}

#[test]
fn empty_bodies_are_rejected() {
    let err = eval("def nothing end").unwrap_err();
    assert_eq!(err.to_string(), "empty definition at argument 1");
}

#[test]
fn definitions_cannot_nest() {
    let err = eval("def outer 1 def inner 2 end end").unwrap_err();
    assert_eq!(err.to_string(), "nested definition at argument 4");
}

#[test]
fn unterminated_definitions_are_rejected() {
    let err = eval("1 def dangling 2 +").unwrap_err();
    assert_eq!(
        err.to_string(),
        "definition starting at argument 2 unterminated"
    );
}

#[test]
fn unresolvable_body_words_are_rejected() {
    let err = eval("def broken 1 zzz end").unwrap_err();
    assert_eq!(err.to_string(), "argument 4 (\"zzz\") unparseable");
}

#[test]
fn a_rejected_definition_registers_nothing() {
    let mut evaluator = Evaluator::new();
    evaluator.eval("def broken zzz end", &mut sink()).unwrap_err();
    let err = evaluator.eval("5 broken", &mut sink()).unwrap_err();
    assert_eq!(err.to_string(), "argument 2 (\"broken\") unparseable");
}

// =============================================================================
// Fault reporting through aliases
// =============================================================================

#[test]
fn faults_report_the_invocation_site() {
    let err = eval("def popper drop end popper").unwrap_err();
    assert_eq!(
        err.to_string(),
        "stack underflow at argument 5 (\"popper\")"
    );
}

#[test]
fn alias_names_are_case_insensitive() {
    assert_eq!(eval("DEF Tau 2 pi x END TAU").unwrap().len(), 1);
}
