//! Formatted emission through the output sink.
//!
//! The radix printers truncate the operand to an integer first and print
//! negative values sign-first (`-0xff`, not two's complement).

use num_bigint::BigInt;
use num_traits::Signed;
use rpncalc_foundation::Result;

use crate::machine::Machine;

pub(crate) fn print(machine: &mut Machine, out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    out(value.to_string());
    Ok(())
}

pub(crate) fn print_hex(machine: &mut Machine, out: &mut dyn FnMut(String)) -> Result<()> {
    print_radix(machine, out, "0x", |n| format!("{n:x}"))
}

pub(crate) fn print_octal(machine: &mut Machine, out: &mut dyn FnMut(String)) -> Result<()> {
    print_radix(machine, out, "0", |n| format!("{n:o}"))
}

pub(crate) fn print_binary(machine: &mut Machine, out: &mut dyn FnMut(String)) -> Result<()> {
    print_radix(machine, out, "0b", |n| format!("{n:b}"))
}

/// Emits the whole stack, bottom to top, space-separated, without
/// consuming anything. An empty stack emits an empty line.
pub(crate) fn dump_stack(machine: &mut Machine, out: &mut dyn FnMut(String)) -> Result<()> {
    let line = machine
        .stack
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    out(line);
    Ok(())
}

fn print_radix(
    machine: &mut Machine,
    out: &mut dyn FnMut(String),
    prefix: &str,
    digits: impl Fn(&BigInt) -> String,
) -> Result<()> {
    let n = machine.stack.pop()?.to_int()?;
    if n.is_negative() {
        out(format!("-{prefix}{}", digits(&-n)));
    } else {
        out(format!("{prefix}{}", digits(&n)));
    }
    Ok(())
}
