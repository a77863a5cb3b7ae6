//! Addressed and fixed-slot heap access.
//!
//! `load` and `store` take their address from the stack and validate it;
//! the numbered variants hit slots 0 through 3 directly and cannot fail on
//! the address.

use rpncalc_foundation::Result;

use crate::machine::Machine;

pub(crate) fn load(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let address = machine.stack.pop()?;
    let value = machine.heap.load(&address)?;
    machine.stack.push(value);
    Ok(())
}

pub(crate) fn store(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    let address = machine.stack.pop()?;
    let value = machine.stack.pop()?;
    machine.heap.store(&address, value)
}

fn load_slot(machine: &mut Machine, slot: u32) -> Result<()> {
    let value = machine.heap.read_slot(slot);
    machine.stack.push(value);
    Ok(())
}

fn store_slot(machine: &mut Machine, slot: u32) -> Result<()> {
    let value = machine.stack.pop()?;
    machine.heap.write_slot(slot, value);
    Ok(())
}

pub(crate) fn load_slot_0(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    load_slot(machine, 0)
}

pub(crate) fn load_slot_1(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    load_slot(machine, 1)
}

pub(crate) fn load_slot_2(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    load_slot(machine, 2)
}

pub(crate) fn load_slot_3(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    load_slot(machine, 3)
}

pub(crate) fn store_slot_0(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    store_slot(machine, 0)
}

pub(crate) fn store_slot_1(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    store_slot(machine, 1)
}

pub(crate) fn store_slot_2(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    store_slot(machine, 2)
}

pub(crate) fn store_slot_3(machine: &mut Machine, _out: &mut dyn FnMut(String)) -> Result<()> {
    store_slot(machine, 3)
}
