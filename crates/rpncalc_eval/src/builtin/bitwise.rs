//! Bitwise logic and shifts.
//!
//! Operands are truncated to integers before the bit operation, so real
//! inputs lose their fraction. All results are integers in two's-complement
//! semantics over arbitrary precision.

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};
use rpncalc_foundation::{Error, Result, Stack, Value};

use crate::machine::Machine;

pub(crate) fn and(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?.to_int()?;
    let lower = machine.stack.pop()?.to_int()?;
    machine.stack.push(Value::Int(lower & upper));
    Ok(())
}

/// Unlike `|all` and `^all`, there is no identity seed: the first operand
/// comes off the stack, so an empty stack underflows.
pub(crate) fn and_all(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let mut accumulated = machine.stack.pop()?.to_int()?;
    while !machine.stack.is_empty() {
        accumulated &= machine.stack.pop()?.to_int()?;
    }
    machine.stack.push(Value::Int(accumulated));
    Ok(())
}

pub(crate) fn or(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?.to_int()?;
    let lower = machine.stack.pop()?.to_int()?;
    machine.stack.push(Value::Int(lower | upper));
    Ok(())
}

pub(crate) fn or_all(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let mut accumulated = BigInt::zero();
    while !machine.stack.is_empty() {
        accumulated |= machine.stack.pop()?.to_int()?;
    }
    machine.stack.push(Value::Int(accumulated));
    Ok(())
}

pub(crate) fn xor(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?.to_int()?;
    let lower = machine.stack.pop()?.to_int()?;
    machine.stack.push(Value::Int(lower ^ upper));
    Ok(())
}

pub(crate) fn xor_all(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let mut accumulated = BigInt::zero();
    while !machine.stack.is_empty() {
        accumulated ^= machine.stack.pop()?.to_int()?;
    }
    machine.stack.push(Value::Int(accumulated));
    Ok(())
}

/// Two's-complement bitwise NOT: `~x` is `-(x + 1)` at any width.
pub(crate) fn not(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let operand = machine.stack.pop()?.to_int()?;
    machine.stack.push(Value::Int(-operand - BigInt::one()));
    Ok(())
}

pub(crate) fn shift_left(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let places = pop_shift_count(&mut machine.stack)?;
    let operand = machine.stack.pop()?.to_int()?;
    machine.stack.push(Value::Int(shift(operand, places)));
    Ok(())
}

pub(crate) fn shift_right(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let places = pop_shift_count(&mut machine.stack)?;
    let operand = machine.stack.pop()?.to_int()?;
    machine.stack.push(Value::Int(shift(operand, -places)));
    Ok(())
}

/// Left shift by `places`; a negative count shifts right instead. Right
/// shifts of negative operands round toward negative infinity.
#[allow(clippy::cast_possible_truncation)]
fn shift(operand: BigInt, places: i64) -> BigInt {
    if places >= 0 {
        operand << places.unsigned_abs() as usize
    } else {
        operand >> places.unsigned_abs() as usize
    }
}

fn pop_shift_count(stack: &mut Stack) -> Result<i64> {
    stack
        .pop()?
        .to_int()?
        .to_i64()
        .ok_or_else(|| Error::out_of_range("shift count out of range"))
}
