use super::alu::Width;
use super::{ErrorCode, Fault, Register, Tm};
use crate::core::{Bus, memmap};

// Operand fetchers. Each one reads immediate bytes at PC (advancing it)
// and/or registers, leaving its result in MA and/or MD. Store-side
// fetchers also set the DA flag so the executor writes back to memory.

impl Tm {
    pub(crate) fn fetch_imm8<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.md = self.read_byte(bus, self.pc)?;
        self.advance(bus, 1)
    }

    pub(crate) fn fetch_imm16<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.md = self.read_word(bus, self.pc)?;
        self.advance(bus, 2)
    }

    pub(crate) fn fetch_imm32<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.md = self.read_long(bus, self.pc)?;
        self.advance(bus, 4)
    }

    /// Source register selected by parameter #2.
    pub(crate) fn fetch_reg(&mut self) {
        self.md = self.read_register(Register::from_nibble(self.param2));
    }

    /// Absolute 32-bit target address as an immediate.
    pub(crate) fn fetch_addr32<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.ma = self.read_long(bus, self.pc)?;
        self.advance(bus, 4)
    }

    /// Target address held in the long register named by parameter #2.
    pub(crate) fn fetch_regptr32<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        let pointer = self.pointer_register(self.param2)?;
        self.ma = self.read_register(pointer);
        self.check_readable(self.ma, 4)
    }

    /// Immediate source sized to the destination register's view.
    pub(crate) fn fetch_reg_imm<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        match Width::from_param(self.param1) {
            Width::Long => self.fetch_imm32(bus),
            Width::Word => self.fetch_imm16(bus),
            Width::Byte => self.fetch_imm8(bus),
        }
    }

    /// Byte pointer into the I/O ports, then a load at the destination
    /// register's width.
    pub(crate) fn fetch_reg_addr8<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.ma = self.read_byte(bus, self.pc)?;
        self.advance(bus, 1)?;
        self.ma = self.ma.wrapping_add(memmap::IO_START);

        self.load_md(bus, Width::from_param(self.param1))
    }

    /// Word pointer into quick RAM, then a load at the destination
    /// register's width.
    pub(crate) fn fetch_reg_addr16<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.ma = self.read_word(bus, self.pc)?;
        self.advance(bus, 2)?;
        self.ma = self.ma.wrapping_add(memmap::QRAM_START);

        self.load_md(bus, Width::from_param(self.param1))
    }

    /// Absolute 32-bit pointer, then a checked load at the destination
    /// register's width.
    pub(crate) fn fetch_reg_addr32<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.ma = self.read_long(bus, self.pc)?;
        self.advance(bus, 4)?;

        let width = Width::from_param(self.param1);
        self.check_readable(self.ma, width.size())?;
        self.load_md(bus, width)
    }

    /// Pointer held in the long register named by parameter #2, then a
    /// checked load at the destination register's width.
    pub(crate) fn fetch_reg_regptr32<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        let pointer = self.pointer_register(self.param2)?;
        self.ma = self.read_register(pointer);
        self.check_readable(self.ma, 4)?;

        let width = Width::from_param(self.param1);
        self.check_readable(self.ma, width.size())?;
        self.load_md(bus, width)
    }

    /// Store form: source register in parameter #2, byte pointer into the
    /// I/O ports.
    pub(crate) fn fetch_addr8_reg<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.md = self.read_register(Register::from_nibble(self.param2));
        self.ma = self.read_byte(bus, self.pc)?;
        self.advance(bus, 1)?;
        self.ma = self.ma.wrapping_add(memmap::IO_START);

        self.da = true;
        Ok(())
    }

    /// Store form: source register in parameter #2, word pointer into
    /// quick RAM.
    pub(crate) fn fetch_addr16_reg<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.md = self.read_register(Register::from_nibble(self.param2));
        self.ma = self.read_word(bus, self.pc)?;
        self.advance(bus, 2)?;
        self.ma = self.ma.wrapping_add(memmap::QRAM_START);

        self.da = true;
        Ok(())
    }

    /// Store form: source register in parameter #2, absolute 32-bit
    /// pointer checked for writability at the source width.
    pub(crate) fn fetch_addr32_reg<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        self.md = self.read_register(Register::from_nibble(self.param2));
        self.ma = self.read_long(bus, self.pc)?;
        self.advance(bus, 4)?;

        self.check_writable(self.ma, Width::from_param(self.param2).size())?;
        self.da = true;
        Ok(())
    }

    /// Store form: source register in parameter #2, pointer in the long
    /// register named by parameter #1.
    pub(crate) fn fetch_regptr32_reg<B: Bus + ?Sized>(&mut self, _bus: &mut B) -> Result<(), Fault> {
        let pointer = self.pointer_register(self.param1)?;
        self.md = self.read_register(Register::from_nibble(self.param2));
        self.ma = self.read_register(pointer);

        self.check_writable(self.ma, Width::from_param(self.param2).size())?;
        self.da = true;
        Ok(())
    }

    /// Read-modify-write form shared by the single-operand group: pointer
    /// in the long register named by parameter #1, one byte loaded into
    /// MD and written back by the executor.
    pub(crate) fn fetch_rmw_regptr32<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), Fault> {
        let pointer = self.pointer_register(self.param1)?;
        self.ma = self.read_register(pointer);
        self.check_writable(self.ma, 1)?;

        self.md = self.read_byte(bus, self.ma)?;
        self.cycle(bus, 1)?;
        self.da = true;
        Ok(())
    }

    // ---- Helpers ----

    /// Only the four long views are legal pointer registers; any other
    /// encoding faults as an invalid opcode.
    fn pointer_register(&mut self, nibble: u8) -> Result<Register, Fault> {
        let reg = Register::from_nibble(nibble);
        if !reg.is_long() {
            return self.fail(ErrorCode::InvalidOpcode);
        }
        Ok(reg)
    }

    /// Load MD through MA at `width`, charging one cycle per byte.
    fn load_md<B: Bus + ?Sized>(&mut self, bus: &mut B, width: Width) -> Result<(), Fault> {
        self.md = match width {
            Width::Long => self.read_long(bus, self.ma)?,
            Width::Word => self.read_word(bus, self.ma)?,
            Width::Byte => self.read_byte(bus, self.ma)?,
        };
        self.cycle(bus, width.size())
    }
}
