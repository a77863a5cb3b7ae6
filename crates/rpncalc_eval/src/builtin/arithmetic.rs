//! Arithmetic, aggregation, and kind-conversion operations.

use num_traits::{Signed, ToPrimitive};
use rpncalc_foundation::{Result, Stack, Value};

use crate::machine::Machine;

pub(crate) fn add(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    let lower = machine.stack.pop()?;
    machine.stack.push(lower.add(&upper));
    Ok(())
}

pub(crate) fn increment(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.stack.push(value.add(&Value::from(1)));
    Ok(())
}

pub(crate) fn subtract(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    let lower = machine.stack.pop()?;
    machine.stack.push(lower.sub(&upper));
    Ok(())
}

pub(crate) fn decrement(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.stack.push(value.sub(&Value::from(1)));
    Ok(())
}

pub(crate) fn multiply(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    let lower = machine.stack.pop()?;
    machine.stack.push(lower.mul(&upper));
    Ok(())
}

pub(crate) fn double(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.stack.push(value.mul(&Value::from(2)));
    Ok(())
}

pub(crate) fn divide(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let divisor = machine.stack.pop()?;
    let dividend = machine.stack.pop()?;
    machine.stack.push(dividend.div(&divisor)?);
    Ok(())
}

pub(crate) fn modulo(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let divisor = machine.stack.pop()?;
    let dividend = machine.stack.pop()?;
    machine.stack.push(dividend.modulo(&divisor)?);
    Ok(())
}

pub(crate) fn negate(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.stack.push(value.neg());
    Ok(())
}

pub(crate) fn absolute(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.stack.push(value.abs());
    Ok(())
}

pub(crate) fn reciprocal(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.stack.push(Value::Real(1.0 / value.as_real()));
    Ok(())
}

pub(crate) fn factorial(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.stack.push(recurse_factorial(&value));
    Ok(())
}

/// Anything below two is the base case, so zero, negatives, and small
/// reals all collapse to one.
fn recurse_factorial(value: &Value) -> Value {
    if value.as_real() < 2.0 {
        Value::from(1)
    } else {
        value.mul(&recurse_factorial(&value.sub(&Value::from(1))))
    }
}

pub(crate) fn sum(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let count = pop_count(&mut machine.stack)?;
    let mut total = Value::from(0);
    for _ in 0..count {
        total = total.add(&machine.stack.pop()?);
    }
    machine.stack.push(total);
    Ok(())
}

pub(crate) fn sum_all(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let mut total = Value::from(0);
    while !machine.stack.is_empty() {
        total = total.add(&machine.stack.pop()?);
    }
    machine.stack.push(total);
    Ok(())
}

pub(crate) fn product(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let count = pop_count(&mut machine.stack)?;
    let mut total = Value::from(1);
    for _ in 0..count {
        total = total.mul(&machine.stack.pop()?);
    }
    machine.stack.push(total);
    Ok(())
}

pub(crate) fn product_all(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let mut total = Value::from(1);
    while !machine.stack.is_empty() {
        total = total.mul(&machine.stack.pop()?);
    }
    machine.stack.push(total);
    Ok(())
}

pub(crate) fn to_integer(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.stack.push(Value::Int(value.to_int()?));
    Ok(())
}

pub(crate) fn to_real(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.stack.push(Value::Real(value.as_real()));
    Ok(())
}

/// Pops the operand count for `sum` and `product`. Negative counts mean
/// zero iterations; counts past `usize` saturate so the aggregation
/// underflows the stack instead of silently stopping short.
fn pop_count(stack: &mut Stack) -> Result<usize> {
    let count = stack.pop()?.to_int()?;
    if count.is_negative() {
        Ok(0)
    } else {
        Ok(count.to_usize().unwrap_or(usize::MAX))
    }
}
