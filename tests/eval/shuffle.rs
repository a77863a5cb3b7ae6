//! Integration tests for stack-reordering operations

use rpncalc::eval::eval;
use rpncalc::foundation::Value;

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().map(|&n| Value::from(n)).collect()
}

#[test]
fn depth_reports_without_disturbing() {
    assert_eq!(eval("depth").unwrap(), ints(&[0]));
    assert_eq!(eval("7 8 size").unwrap(), ints(&[7, 8, 2]));
}

#[test]
fn dup_duplicates_the_top() {
    assert_eq!(eval("5 dup").unwrap(), ints(&[5, 5]));
    assert_eq!(eval("5 d").unwrap(), ints(&[5, 5]));
}

#[test]
fn conditional_dup_checks_for_zero() {
    assert_eq!(eval("5 ?dup").unwrap(), ints(&[5, 5]));
    assert_eq!(eval("0 ?dup").unwrap(), ints(&[0]));
    // 0.0 counts as zero too
    assert_eq!(eval("0.0 nzdup").unwrap(), vec![Value::from(0.0)]);
}

#[test]
fn dup_two_duplicates_the_top_pair() {
    assert_eq!(eval("1 2 2dup").unwrap(), ints(&[1, 2, 1, 2]));
}

#[test]
fn swap_exchanges_the_top_pair() {
    assert_eq!(eval("1 2 swap").unwrap(), ints(&[2, 1]));
    assert_eq!(eval("1 2 s").unwrap(), ints(&[2, 1]));
}

#[test]
fn swap_two_exchanges_pairs() {
    assert_eq!(eval("1 2 3 4 2swap").unwrap(), ints(&[3, 4, 1, 2]));
}

#[test]
fn rotations() {
    assert_eq!(eval("1 2 3 rot").unwrap(), ints(&[2, 3, 1]));
    assert_eq!(eval("1 2 3 -rot").unwrap(), ints(&[3, 1, 2]));
}

#[test]
fn rot_and_minus_rot_are_inverses() {
    assert_eq!(eval("1 2 3 rot -rot").unwrap(), ints(&[1, 2, 3]));
}

#[test]
fn over_copies_from_below() {
    assert_eq!(eval("1 2 over").unwrap(), ints(&[1, 2, 1]));
    assert_eq!(eval("1 2 3 4 2over").unwrap(), ints(&[1, 2, 3, 4, 1, 2]));
}

#[test]
fn drops() {
    assert_eq!(eval("1 2 drop").unwrap(), ints(&[1]));
    assert_eq!(eval("1 2 3 2drop").unwrap(), ints(&[1]));
    assert_eq!(eval("1 2 3 dropall").unwrap(), ints(&[]));
    assert_eq!(eval("1 2 3 clear").unwrap(), ints(&[]));
}

#[test]
fn dropall_never_faults() {
    assert_eq!(eval("dropall").unwrap(), ints(&[]));
}

#[test]
fn nip_and_tuck() {
    assert_eq!(eval("1 2 nip").unwrap(), ints(&[2]));
    assert_eq!(eval("1 2 tuck").unwrap(), ints(&[2, 1, 2]));
}

#[test]
fn underflow_positions_are_reported() {
    let err = eval("1 2dup").unwrap_err();
    assert_eq!(err.to_string(), "stack underflow at argument 2 (\"2dup\")");
}
