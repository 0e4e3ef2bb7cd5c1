use super::{Condition, Fault, Flag, Tm};
use crate::core::{Bus, memmap};

impl Tm {
    /// Evaluate the condition nibble of a control-transfer instruction.
    /// Encodings outside the condition set never match.
    pub(crate) fn check_condition(&self, nibble: u8) -> bool {
        match Condition::from_nibble(nibble) {
            Some(Condition::N) => true,
            Some(Condition::Cs) => self.flag(Flag::C),
            Some(Condition::Cc) => !self.flag(Flag::C),
            Some(Condition::Zs) => self.flag(Flag::Z),
            Some(Condition::Zc) => !self.flag(Flag::Z),
            Some(Condition::Os) => self.flag(Flag::O),
            Some(Condition::Us) => self.flag(Flag::U),
            None => false,
        }
    }

    /// JMP moves the program counter to the address in MA when the
    /// condition in parameter #1 holds.
    pub(crate) fn op_jmp<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        if self.check_condition(self.param1) {
            self.pc = self.ma;
            return self.cycle(bus, 1);
        }
        Ok(())
    }

    /// JPB moves the program counter by the signed 16-bit offset in MD
    /// when the condition in parameter #1 holds.
    pub(crate) fn op_jpb<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        if self.check_condition(self.param1) {
            let offset = self.md as u16 as i16;
            self.pc = self.pc.wrapping_add(offset as u32);
            return self.cycle(bus, 1);
        }
        Ok(())
    }

    /// CALL pushes the post-operand return address onto the call stack
    /// and jumps to the address in MA when the condition in parameter #1
    /// holds.
    pub(crate) fn op_call<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        if self.check_condition(self.param1) {
            self.push_address(bus, self.pc)?;
            self.cycle(bus, 5)?;

            self.pc = self.ma;
            return self.cycle(bus, 1);
        }
        Ok(())
    }

    /// RST jumps to the restart vector selected by parameter #1.
    pub(crate) fn op_rst<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.pc = memmap::RST_START + 0x100 * self.param1 as u32;
        self.cycle(bus, 1)
    }

    /// RET pops the return address when the condition in parameter #1
    /// holds.
    pub(crate) fn op_ret<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        if self.check_condition(self.param1) {
            self.pc = self.pop_address(bus)?;
            return self.cycle(bus, 5);
        }
        Ok(())
    }

    /// RETI re-enables the interrupt master flag, then returns
    /// unconditionally.
    pub(crate) fn op_reti<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.ime = true;
        self.pc = self.pop_address(bus)?;
        self.cycle(bus, 5)
    }

    /// JPS resets the program counter to the start of program ROM.
    pub(crate) fn op_jps(&mut self) -> Result<(), Fault> {
        self.pc = memmap::PROGRAM_START;
        Ok(())
    }
}
