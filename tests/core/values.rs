//! Integration tests for the Value type

use rpncalc::foundation::Value;

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_integer() {
    assert_eq!("32768".parse::<Value>().unwrap(), Value::from(32768));
}

#[test]
fn parse_negative_integer() {
    assert_eq!("-17".parse::<Value>().unwrap(), Value::from(-17));
}

#[test]
fn parse_real() {
    assert_eq!("3276.8".parse::<Value>().unwrap(), Value::from(3276.8));
}

#[test]
fn parse_trailing_point_as_real() {
    assert_eq!("5.".parse::<Value>().unwrap(), Value::from(5.0));
}

#[test]
fn parse_huge_integer_exactly() {
    let v: Value = "340282366920938463463374607431768211456"
        .parse()
        .unwrap();
    assert!(v.is_int());
    assert_eq!(v.to_string(), "340282366920938463463374607431768211456");
}

#[test]
fn parse_rejects_garbage() {
    assert!("zzz".parse::<Value>().is_err());
    assert!("12abc".parse::<Value>().is_err());
    assert!("".parse::<Value>().is_err());
}

#[test]
fn parse_without_point_is_never_real() {
    // exponent notation needs a point
    assert!("1e5".parse::<Value>().is_err());
}

// =============================================================================
// Arithmetic and coercion
// =============================================================================

#[test]
fn integer_arithmetic_is_exact() {
    let p = Value::from(2).pow(&Value::from(128)).unwrap();
    assert_eq!(
        p.to_string(),
        "340282366920938463463374607431768211456"
    );
}

#[test]
fn mixed_kinds_coerce_to_real() {
    let sum = Value::from(1).add(&Value::from(0.5));
    assert_eq!(sum, Value::from(1.5));
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(
        Value::from(7).div(&Value::from(2)).unwrap(),
        Value::from(3)
    );
    assert_eq!(
        Value::from(-7).div(&Value::from(2)).unwrap(),
        Value::from(-3)
    );
}

#[test]
fn integer_division_by_zero_faults() {
    assert!(Value::from(1).div(&Value::from(0)).is_err());
}

#[test]
fn real_division_by_zero_is_ieee() {
    let q = Value::from(1).div(&Value::from(0.0)).unwrap();
    assert!(q.as_real().is_infinite());
}

#[test]
fn modulo_takes_the_divisor_sign() {
    assert_eq!(
        Value::from(-7).modulo(&Value::from(3)).unwrap(),
        Value::from(2)
    );
    assert_eq!(
        Value::from(7).modulo(&Value::from(-3)).unwrap(),
        Value::from(-2)
    );
}

#[test]
fn real_modulo_follows_the_same_law() {
    let m = Value::from(-7.5).modulo(&Value::from(3.0)).unwrap();
    assert!((m.as_real() - 1.5).abs() < 1e-12);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn whole_reals_keep_their_point() {
    assert_eq!(Value::from(2.0).to_string(), "2.0");
    assert_eq!(Value::from(2).to_string(), "2");
}

#[test]
fn kinds_never_compare_equal() {
    assert_ne!(Value::from(3), Value::from(3.0));
}
