use super::{ErrorCode, Fault, Flag, Register, Tm};

// Control and flag instructions. None of them touch memory.

impl Tm {
    /// STOP sets the stop latch; the CPU refuses to step until reset.
    pub(crate) fn op_stop(&mut self) -> Result<(), Fault> {
        self.set_flag(Flag::S, true);
        Ok(())
    }

    /// HALT sets the halt latch; the CPU idles one cycle per step until
    /// an interrupt is requested.
    pub(crate) fn op_halt(&mut self) -> Result<(), Fault> {
        self.set_flag(Flag::L, true);
        Ok(())
    }

    /// SEC installs the low byte of the current instruction word as the
    /// error code. The stop latch is not touched, so the program keeps
    /// running with the code in place.
    pub(crate) fn op_sec(&mut self) -> Result<(), Fault> {
        self.ec = ErrorCode::from_code(self.ci as u8);
        Ok(())
    }

    /// CEC clears the error code register.
    pub(crate) fn op_cec(&mut self) -> Result<(), Fault> {
        self.ec = ErrorCode::Ok;
        Ok(())
    }

    pub(crate) fn op_di(&mut self) -> Result<(), Fault> {
        self.ime = false;
        Ok(())
    }

    /// EI arms the one-step deferred enable; the master flag turns on at
    /// the end of the following step.
    pub(crate) fn op_ei(&mut self) -> Result<(), Fault> {
        self.ime_pending = true;
        Ok(())
    }

    /// Decimal-adjust the byte accumulator so it reads as binary-coded
    /// decimal, steered by the N, H and C flags left by the previous
    /// arithmetic instruction.
    pub(crate) fn op_daa(&mut self) -> Result<(), Fault> {
        let al = self.read_register(Register::Al);
        let mut adjust = 0u32;

        if self.flag(Flag::H) || (al & 0x0F) > 0x09 {
            adjust += 0x06;
        }

        if self.flag(Flag::C) || (al & 0xF0) > 0x90 {
            self.set_flag(Flag::C, true);
            adjust += 0x60;
        } else {
            self.set_flag(Flag::C, false);
        }

        let result = if self.flag(Flag::N) {
            al.wrapping_sub(adjust)
        } else {
            al.wrapping_add(adjust)
        };

        self.write_register(Register::Al, result);
        self.set_flag(Flag::Z, result & 0xFF == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::O, self.flag(Flag::C) && !self.flag(Flag::N));
        self.set_flag(Flag::U, self.flag(Flag::C) && self.flag(Flag::N));
        Ok(())
    }

    /// CPL complements the long accumulator.
    pub(crate) fn op_cpl(&mut self) -> Result<(), Fault> {
        let a = self.read_register(Register::A);
        self.write_register(Register::A, !a);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        Ok(())
    }

    /// CPW complements the word accumulator.
    pub(crate) fn op_cpw(&mut self) -> Result<(), Fault> {
        let aw = self.read_register(Register::Aw);
        self.write_register(Register::Aw, !aw);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        Ok(())
    }

    /// CPB complements the byte accumulator.
    pub(crate) fn op_cpb(&mut self) -> Result<(), Fault> {
        let al = self.read_register(Register::Al);
        self.write_register(Register::Al, !al);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        Ok(())
    }

    pub(crate) fn op_scf(&mut self) -> Result<(), Fault> {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::O, false);
        self.set_flag(Flag::U, false);
        Ok(())
    }

    pub(crate) fn op_ccf(&mut self) -> Result<(), Fault> {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !self.flag(Flag::C));
        self.set_flag(Flag::O, false);
        self.set_flag(Flag::U, false);
        Ok(())
    }
}
