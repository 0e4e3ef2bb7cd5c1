use super::{Fault, Flag, Tm};
use crate::core::Bus;

// Single-bit tests and mutations. The bit index comes from parameter #2
// and is taken modulo the operand width, so an out-of-range index wraps
// instead of selecting a bit the view does not have.

impl Tm {
    pub(crate) fn op_bit(&mut self) -> Result<(), Fault> {
        let (value, width) = self.unary_operand();
        let bit = self.param2 as u32 % width.bits();

        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
        Ok(())
    }

    pub(crate) fn op_set<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        let (value, width) = self.unary_operand();
        let bit = self.param2 as u32 % width.bits();
        let result = value | (1 << bit);

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        self.unary_write_back(bus, result)
    }

    /// RES leaves the flags untouched.
    pub(crate) fn op_res<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        let (value, width) = self.unary_operand();
        let bit = self.param2 as u32 % width.bits();
        let result = value & !(1 << bit);

        self.unary_write_back(bus, result)
    }

    /// Swap the two halves of the operand: nibbles of a byte, bytes of a
    /// word, 16-bit halves of a long.
    pub(crate) fn op_swap<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        let (value, width) = self.unary_operand();
        let half = width.bits() / 2;
        let result = ((value << half) | (value >> half)) & width.mask();

        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, false);
        self.set_flag(Flag::O, false);
        self.set_flag(Flag::U, false);
        self.unary_write_back(bus, result)
    }
}
