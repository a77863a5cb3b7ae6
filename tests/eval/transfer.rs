//! Integration tests for secondary-stack transfer operations

use rpncalc::eval::Evaluator;
use rpncalc::foundation::Value;

fn sink() -> impl FnMut(String) {
    |_| {}
}

#[test]
fn push_and_pop_move_values_across() {
    let mut evaluator = Evaluator::new();
    evaluator.eval("1 2 push", &mut sink()).unwrap();
    assert_eq!(evaluator.stack().contents(), &[Value::from(1)]);
    assert_eq!(evaluator.secondary_stack().contents(), &[Value::from(2)]);

    evaluator.eval("pop", &mut sink()).unwrap();
    assert_eq!(
        evaluator.stack().contents(),
        &[Value::from(1), Value::from(2)]
    );
    assert!(evaluator.secondary_stack().is_empty());
}

#[test]
fn pop_names_the_secondary_stack() {
    let err = Evaluator::new().eval("pop", &mut sink()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "secondary stack underflow at argument 1 (\"pop\")"
    );
}

#[test]
fn xchg_swaps_whole_stacks() {
    let mut evaluator = Evaluator::new();
    evaluator.eval("1 2 3 push push xchg", &mut sink()).unwrap();
    assert_eq!(
        evaluator.stack().contents(),
        &[Value::from(3), Value::from(2)]
    );
    assert_eq!(evaluator.secondary_stack().contents(), &[Value::from(1)]);
}

#[test]
fn xchg_of_empty_stacks_is_fine() {
    let mut evaluator = Evaluator::new();
    evaluator.eval("xchg", &mut sink()).unwrap();
    assert!(evaluator.stack().is_empty());
    assert!(evaluator.secondary_stack().is_empty());
}

#[test]
fn secondary_stack_survives_across_calls() {
    let mut evaluator = Evaluator::new();
    evaluator.eval("42 push", &mut sink()).unwrap();
    evaluator.eval("pop", &mut sink()).unwrap();
    assert_eq!(evaluator.stack().contents(), &[Value::from(42)]);
}
