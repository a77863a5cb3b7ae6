//! Stack-reordering operations.

use num_bigint::BigInt;
use rpncalc_foundation::{Result, Value};

use crate::machine::Machine;

pub(crate) fn depth(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let count = machine.stack.len();
    machine.stack.push(Value::Int(BigInt::from(count)));
    Ok(())
}

pub(crate) fn dup(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    machine.stack.push(upper.clone()).push(upper);
    Ok(())
}

/// Duplicates the top item only when it is nonzero; zero is pushed back
/// untouched.
pub(crate) fn dup_if_nonzero(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    let nonzero = !upper.is_zero();
    machine.stack.push(upper.clone());
    if nonzero {
        machine.stack.push(upper);
    }
    Ok(())
}

pub(crate) fn dup_two(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    let lower = machine.stack.pop()?;
    machine
        .stack
        .push(lower.clone())
        .push(upper.clone())
        .push(lower)
        .push(upper);
    Ok(())
}

pub(crate) fn swap(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    let lower = machine.stack.pop()?;
    machine.stack.push(upper).push(lower);
    Ok(())
}

pub(crate) fn swap_two(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper_1 = machine.stack.pop()?;
    let lower_1 = machine.stack.pop()?;
    let upper_2 = machine.stack.pop()?;
    let lower_2 = machine.stack.pop()?;
    machine
        .stack
        .push(lower_1)
        .push(upper_1)
        .push(lower_2)
        .push(upper_2);
    Ok(())
}

pub(crate) fn rotate(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    let middle = machine.stack.pop()?;
    let lower = machine.stack.pop()?;
    machine.stack.push(middle).push(upper).push(lower);
    Ok(())
}

pub(crate) fn rotate_back(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    let middle = machine.stack.pop()?;
    let lower = machine.stack.pop()?;
    machine.stack.push(upper).push(lower).push(middle);
    Ok(())
}

pub(crate) fn over(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    let lower = machine.stack.pop()?;
    machine.stack.push(lower.clone()).push(upper).push(lower);
    Ok(())
}

pub(crate) fn over_two(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper_1 = machine.stack.pop()?;
    let lower_1 = machine.stack.pop()?;
    let upper_2 = machine.stack.pop()?;
    let lower_2 = machine.stack.pop()?;
    machine
        .stack
        .push(lower_2.clone())
        .push(upper_2.clone())
        .push(lower_1)
        .push(upper_1)
        .push(lower_2)
        .push(upper_2);
    Ok(())
}

pub(crate) fn drop_top(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    machine.stack.pop()?;
    Ok(())
}

pub(crate) fn drop_two(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    machine.stack.pop()?;
    machine.stack.pop()?;
    Ok(())
}

pub(crate) fn drop_all(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    machine.stack.clear();
    Ok(())
}

pub(crate) fn nip(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    machine.stack.pop()?;
    machine.stack.push(upper);
    Ok(())
}

pub(crate) fn tuck(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let upper = machine.stack.pop()?;
    let lower = machine.stack.pop()?;
    machine.stack.push(upper.clone()).push(lower).push(upper);
    Ok(())
}
