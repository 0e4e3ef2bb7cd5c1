use super::{ErrorCode, Fault, Tm};
use crate::core::{Bus, memmap};

// Both stacks are 64 KiB windows of 4-byte cells growing downward. The
// pointer is an offset into the window: 0x10000 means empty, 0 means full.

impl Tm {
    pub(crate) fn push_data<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        data: u32,
    ) -> Result<(), Fault> {
        if self.sp == 0 {
            return self.fail(ErrorCode::DataStackOverflow);
        }

        self.sp -= 4;
        self.write_long(bus, self.sp + memmap::STACK_START, data)
    }

    pub(crate) fn pop_data<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<u32, Fault> {
        if self.sp >= 0x10000 {
            return self.fail(ErrorCode::DataStackUnderflow);
        }

        let data = self.read_long(bus, self.sp + memmap::STACK_START)?;
        self.sp += 4;
        Ok(data)
    }

    pub(crate) fn push_address<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        address: u32,
    ) -> Result<(), Fault> {
        if self.rp == 0 {
            return self.fail(ErrorCode::CallStackOverflow);
        }

        self.rp -= 4;
        self.write_long(bus, self.rp + memmap::CALL_STACK_START, address)
    }

    pub(crate) fn pop_address<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<u32, Fault> {
        if self.rp >= 0x10000 {
            return self.fail(ErrorCode::CallStackUnderflow);
        }

        let address = self.read_long(bus, self.rp + memmap::CALL_STACK_START)?;
        self.rp += 4;
        Ok(address)
    }
}
