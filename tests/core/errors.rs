//! Integration tests for error construction and display

use rpncalc::foundation::{Error, ErrorKind, StackId};

#[test]
fn parse_errors_carry_their_own_position() {
    let err = Error::parse("argument 2 (\"abc\") unparseable");
    assert_eq!(err.to_string(), "argument 2 (\"abc\") unparseable");
    assert!(err.context.is_none());
}

#[test]
fn context_appends_position_and_token() {
    let err = Error::underflow(StackId::Primary).at(3, "swap");
    assert_eq!(err.to_string(), "stack underflow at argument 3 (\"swap\")");
}

#[test]
fn out_of_range_messages_pass_through() {
    let err = Error::out_of_range("division by zero").at(4, "/");
    assert_eq!(err.to_string(), "division by zero at argument 4 (\"/\")");
    assert!(matches!(err.kind, ErrorKind::OutOfRange(_)));
}

#[test]
fn annotation_replaces_earlier_context() {
    let err = Error::underflow(StackId::Secondary).at(1, "pop").at(9, "avg");
    let ctx = err.context.unwrap();
    assert_eq!(ctx.position, 9);
    assert_eq!(ctx.token, "avg");
}
