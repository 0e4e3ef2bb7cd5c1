/// Host-side bus interface the CPU is wired to.
///
/// The TM core performs all memory traffic one byte at a time through this
/// trait; multi-byte transfers are assembled big-endian by the CPU itself.
/// Each byte moved across the bus costs exactly one [`tick`](Bus::tick).
///
/// A host signals failure by returning `None`/`false`, which the CPU latches
/// as `BUS_READ`, `BUS_WRITE` or `HARDWARE` and stops.
pub trait Bus {
    /// Read one byte. `None` surfaces as a bus-read error.
    fn read(&mut self, addr: u32) -> Option<u8>;

    /// Write one byte. `false` surfaces as a bus-write error.
    fn write(&mut self, addr: u32, data: u8) -> bool;

    /// Advance the host clock by one cycle. `false` surfaces as a
    /// hardware error.
    fn tick(&mut self) -> bool;
}
