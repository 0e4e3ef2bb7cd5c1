use std::collections::HashMap;

use tm_core::core::Bus;

/// Minimal bus for testing: a sparse byte map over the full 4 GiB
/// address space, with switches to make any host hook fail.
pub struct TestBus {
    pub memory: HashMap<u32, u8>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub fail_ticks: bool,
    pub ticks: u64,
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            memory: HashMap::new(),
            fail_reads: false,
            fail_writes: false,
            fail_ticks: false,
            ticks: 0,
        }
    }

    pub fn load(&mut self, addr: u32, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            self.memory.insert(addr.wrapping_add(offset as u32), byte);
        }
    }

    pub fn byte(&self, addr: u32) -> u8 {
        self.memory.get(&addr).copied().unwrap_or(0)
    }

    pub fn long(&self, addr: u32) -> u32 {
        u32::from_be_bytes([
            self.byte(addr),
            self.byte(addr.wrapping_add(1)),
            self.byte(addr.wrapping_add(2)),
            self.byte(addr.wrapping_add(3)),
        ])
    }
}

impl Bus for TestBus {
    fn read(&mut self, addr: u32) -> Option<u8> {
        if self.fail_reads {
            return None;
        }
        Some(self.byte(addr))
    }

    fn write(&mut self, addr: u32, data: u8) -> bool {
        if self.fail_writes {
            return false;
        }
        self.memory.insert(addr, data);
        true
    }

    fn tick(&mut self) -> bool {
        if self.fail_ticks {
            return false;
        }
        self.ticks += 1;
        true
    }
}
