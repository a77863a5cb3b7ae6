//! Integration tests for arithmetic and math operations

use rpncalc::eval::eval;
use rpncalc::foundation::Value;

// =============================================================================
// Operand order
// =============================================================================

#[test]
fn subtraction_takes_the_subtrahend_from_the_top() {
    assert_eq!(eval("5 3 -").unwrap(), vec![Value::from(2)]);
    assert_eq!(eval("3 5 -").unwrap(), vec![Value::from(-2)]);
}

#[test]
fn division_takes_the_divisor_from_the_top() {
    assert_eq!(eval("8 2 /").unwrap(), vec![Value::from(4)]);
    assert_eq!(eval("2 8 /").unwrap(), vec![Value::from(0)]);
}

#[test]
fn power_takes_the_exponent_from_the_top() {
    assert_eq!(eval("2 10 **").unwrap(), vec![Value::from(1024)]);
    assert_eq!(eval("10 2 pow").unwrap(), vec![Value::from(100)]);
}

#[test]
fn modulo_takes_the_divisor_from_the_top() {
    assert_eq!(eval("7 3 %").unwrap(), vec![Value::from(1)]);
    assert_eq!(eval("7 -2 mod").unwrap(), vec![Value::from(-1)]);
}

// =============================================================================
// Basic operations
// =============================================================================

#[test]
fn addition_and_multiplication() {
    assert_eq!(eval("2 3 +").unwrap(), vec![Value::from(5)]);
    assert_eq!(eval("2 3 x").unwrap(), vec![Value::from(6)]);
}

#[test]
fn increments_and_doubles() {
    assert_eq!(eval("5 1+").unwrap(), vec![Value::from(6)]);
    assert_eq!(eval("5 1-").unwrap(), vec![Value::from(4)]);
    assert_eq!(eval("5 2x").unwrap(), vec![Value::from(10)]);
}

#[test]
fn negation_and_absolute_value() {
    assert_eq!(eval("5 neg").unwrap(), vec![Value::from(-5)]);
    assert_eq!(eval("-5 abs").unwrap(), vec![Value::from(5)]);
}

#[test]
fn reciprocal_is_always_real() {
    assert_eq!(eval("2 inv").unwrap(), vec![Value::from(0.5)]);
}

#[test]
fn factorial() {
    assert_eq!(eval("5 !").unwrap(), vec![Value::from(120)]);
    assert_eq!(eval("0 fact").unwrap(), vec![Value::from(1)]);
    assert_eq!(eval("-3 !").unwrap(), vec![Value::from(1)]);
}

#[test]
fn integer_division_by_zero_is_positioned() {
    let err = eval("1 0 /").unwrap_err();
    assert_eq!(err.to_string(), "division by zero at argument 3 (\"/\")");
}

#[test]
fn real_division_by_zero_is_not_a_fault() {
    let stack = eval("1 0.0 /").unwrap();
    assert!(stack[0].as_real().is_infinite());
}

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn sum_pops_a_counted_group() {
    assert_eq!(
        eval("1 2 3 4 3 sum").unwrap(),
        vec![Value::from(1), Value::from(9)]
    );
}

#[test]
fn sum_with_a_negative_count_pops_nothing() {
    assert_eq!(
        eval("7 -5 sum").unwrap(),
        vec![Value::from(7), Value::from(0)]
    );
}

#[test]
fn sum_underflows_when_the_count_is_too_large() {
    let err = eval("1 2 5 sum").unwrap_err();
    assert_eq!(err.to_string(), "stack underflow at argument 4 (\"sum\")");
}

#[test]
fn sumall_consumes_the_whole_stack() {
    assert_eq!(eval("1 2 3 sumall").unwrap(), vec![Value::from(6)]);
    assert_eq!(eval("sumall").unwrap(), vec![Value::from(0)]);
}

#[test]
fn product_pops_a_counted_group() {
    assert_eq!(
        eval("5 2 3 2 product").unwrap(),
        vec![Value::from(5), Value::from(6)]
    );
}

#[test]
fn productall_consumes_the_whole_stack() {
    assert_eq!(eval("2 3 4 prodall").unwrap(), vec![Value::from(24)]);
    assert_eq!(eval("productall").unwrap(), vec![Value::from(1)]);
}

// =============================================================================
// Kind conversion
// =============================================================================

#[test]
fn to_i_truncates_toward_zero() {
    assert_eq!(eval("2.9 to_i").unwrap(), vec![Value::from(2)]);
    assert_eq!(eval("-2.9 to_i").unwrap(), vec![Value::from(-2)]);
}

#[test]
fn to_f_widens() {
    assert_eq!(eval("2 to_f").unwrap(), vec![Value::from(2.0)]);
}

#[test]
fn to_f_to_i_roundtrips_small_integers() {
    assert_eq!(eval("123456 to_f to_i").unwrap(), vec![Value::from(123456)]);
}

// =============================================================================
// Math
// =============================================================================

#[test]
fn square_and_square_root() {
    assert_eq!(eval("12 sqr").unwrap(), vec![Value::from(144)]);
    assert_eq!(eval("9 sqrt").unwrap(), vec![Value::from(3.0)]);
}

#[test]
fn sqrt_of_a_negative_operand_faults() {
    let err = eval("-4 sqrt").unwrap_err();
    assert_eq!(
        err.to_string(),
        "square root of negative operand at argument 2 (\"sqrt\")"
    );
}

#[test]
fn other_transcendentals_follow_ieee() {
    // log of a negative operand is NaN, not a fault
    let stack = eval("-1 log").unwrap();
    assert!(stack[0].as_real().is_nan());
}

#[test]
fn root_takes_the_index_from_the_top() {
    let stack = eval("27 3 root").unwrap();
    assert!((stack[0].as_real() - 3.0).abs() < 1e-12);
}

#[test]
fn constants_and_conversions() {
    let stack = eval("pi rtod").unwrap();
    assert!((stack[0].as_real() - 180.0).abs() < 1e-9);

    let stack = eval("180 dtor").unwrap();
    assert!((stack[0].as_real() - std::f64::consts::PI).abs() < 1e-12);

    let stack = eval("e ln").unwrap();
    assert!((stack[0].as_real() - 1.0).abs() < 1e-12);
}

#[test]
fn trigonometry_works_in_radians() {
    let stack = eval("pi 2 / sin").unwrap();
    assert!((stack[0].as_real() - 1.0).abs() < 1e-12);

    let stack = eval("1 asin").unwrap();
    assert!((stack[0].as_real() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn temperature_conversions() {
    assert_eq!(eval("212 ftoc").unwrap(), vec![Value::from(100)]);
    assert_eq!(eval("100 ctof").unwrap(), vec![Value::from(212)]);

    let stack = eval("37.0 ctof").unwrap();
    assert!((stack[0].as_real() - 98.6).abs() < 1e-12);
}

#[test]
fn big_integer_power_stays_exact() {
    let stack = eval("2 100 **").unwrap();
    assert_eq!(
        stack[0].to_string(),
        "1267650600228229401496703205376"
    );
}
