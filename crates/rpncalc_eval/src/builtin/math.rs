//! Powers, roots, logarithms, trigonometry, and unit conversions.
//!
//! Apart from `sqr` and `**`, everything here works in the real domain:
//! integer operands are widened, and results follow IEEE 754 (so `log` of
//! a negative operand is NaN, not a fault). Only `sqrt` guards its domain
//! explicitly.

use std::f64::consts;

use rpncalc_foundation::{Error, Result, Value};

use crate::machine::Machine;

pub(crate) fn square(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.stack.push(value.mul(&value));
    Ok(())
}

pub(crate) fn power(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let exponent = machine.stack.pop()?;
    let base = machine.stack.pop()?;
    machine.stack.push(base.pow(&exponent)?);
    Ok(())
}

pub(crate) fn square_root(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let operand = machine.stack.pop()?.as_real();
    if operand < 0.0 {
        return Err(Error::out_of_range("square root of negative operand"));
    }
    machine.stack.push(Value::Real(operand.sqrt()));
    Ok(())
}

pub(crate) fn root(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let index = machine.stack.pop()?.as_real();
    let base = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(base.powf(1.0 / index)));
    Ok(())
}

pub(crate) fn common_log(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let operand = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(operand.log10()));
    Ok(())
}

pub(crate) fn natural_log(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let operand = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(operand.ln()));
    Ok(())
}

pub(crate) fn euler(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    machine.stack.push(Value::Real(consts::E));
    Ok(())
}

pub(crate) fn pi(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    machine.stack.push(Value::Real(consts::PI));
    Ok(())
}

pub(crate) fn degrees_to_radians(
    machine: &mut Machine,
    _out: &mut dyn FnMut(String),
) -> Result<()> {
    let degrees = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(degrees.to_radians()));
    Ok(())
}

pub(crate) fn radians_to_degrees(
    machine: &mut Machine,
    _out: &mut dyn FnMut(String),
) -> Result<()> {
    let radians = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(radians.to_degrees()));
    Ok(())
}

pub(crate) fn sine(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let radians = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(radians.sin()));
    Ok(())
}

pub(crate) fn arcsine(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let operand = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(operand.asin()));
    Ok(())
}

pub(crate) fn cosine(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let radians = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(radians.cos()));
    Ok(())
}

pub(crate) fn arccosine(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let operand = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(operand.acos()));
    Ok(())
}

pub(crate) fn tangent(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let radians = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(radians.tan()));
    Ok(())
}

pub(crate) fn arctangent(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let operand = machine.stack.pop()?.as_real();
    machine.stack.push(Value::Real(operand.atan()));
    Ok(())
}

pub(crate) fn fahrenheit_to_centigrade(
    machine: &mut Machine,
    _out: &mut dyn FnMut(String),
) -> Result<()> {
    let fahrenheit = machine.stack.pop()?;
    let centigrade = fahrenheit
        .sub(&Value::from(32))
        .mul(&Value::from(5))
        .div(&Value::from(9))?;
    machine.stack.push(centigrade);
    Ok(())
}

pub(crate) fn centigrade_to_fahrenheit(
    machine: &mut Machine,
    _out: &mut dyn FnMut(String),
) -> Result<()> {
    let centigrade = machine.stack.pop()?;
    let fahrenheit = centigrade
        .mul(&Value::from(9))
        .div(&Value::from(5))?
        .add(&Value::from(32));
    machine.stack.push(fahrenheit);
    Ok(())
}
