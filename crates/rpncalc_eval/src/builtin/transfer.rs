//! Transfer between the primary and secondary stacks.

use rpncalc_foundation::Result;

use crate::machine::Machine;

pub(crate) fn to_secondary(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.secondary.push(value);
    Ok(())
}

pub(crate) fn from_secondary(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let value = machine.secondary.pop()?;
    machine.stack.push(value);
    Ok(())
}

/// Swaps the entire contents of the two stacks in one step. Never fails,
/// even when both stacks are empty.
pub(crate) fn exchange(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    machine.stack.swap_items(&mut machine.secondary);
    Ok(())
}
