//! Integration tests for the heap

use rpncalc::foundation::{HEAP_SIZE, Heap, Value};

#[test]
fn heap_size_is_fixed() {
    assert_eq!(HEAP_SIZE, 65536);
}

#[test]
fn unwritten_addresses_read_zero() {
    let heap = Heap::new();
    assert_eq!(heap.load(&Value::from(12345)).unwrap(), Value::from(0));
    assert!(heap.is_empty());
}

#[test]
fn store_load_roundtrip() {
    let mut heap = Heap::new();
    heap.store(&Value::from(100), Value::from(3.5)).unwrap();
    assert_eq!(heap.load(&Value::from(100)).unwrap(), Value::from(3.5));
    assert_eq!(heap.len(), 1);
}

#[test]
fn address_bounds_are_enforced() {
    let mut heap = Heap::new();
    assert!(heap.store(&Value::from(65535), Value::from(1)).is_ok());
    assert!(heap.store(&Value::from(65536), Value::from(1)).is_err());
    assert!(heap.load(&Value::from(-1)).is_err());
}

#[test]
fn real_addresses_are_rejected() {
    let heap = Heap::new();
    let err = heap.load(&Value::from(3.0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "bad heap address (must be an integer, 0 <= x < 65536)"
    );
}
