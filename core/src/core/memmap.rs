//! Fixed layout of the TM's 4 GiB address space, plus the ROM metadata
//! constants shared by the CPU, the program loader and the assembler.

// ROM half of the address space.
pub const ROM_START: u32 = 0x0000_0000;
pub const ROM_END: u32 = 0x7FFF_FFFF;
pub const ROM_SIZE: u32 = 0x8000_0000;

// Metadata header. Part of ROM, never readable by CPU instructions.
pub const METADATA_START: u32 = 0x0000_0000;
pub const METADATA_END: u32 = 0x0000_0FFF;
pub const METADATA_SIZE: u32 = 0x0000_1000;

// Restart vectors, reachable by the RST instruction.
pub const RST_START: u32 = 0x0000_1000;
pub const RST_END: u32 = 0x0000_1FFF;
pub const RST_SIZE: u32 = 0x0000_1000;

// Interrupt vectors, one 256-byte slot per interrupt line.
pub const INT_START: u32 = 0x0000_2000;
pub const INT_END: u32 = 0x0000_2FFF;
pub const INT_SIZE: u32 = 0x0000_1000;

// Program ROM. Readable and executable, never writable.
pub const PROGRAM_START: u32 = 0x0000_3000;
pub const PROGRAM_END: u32 = 0x7FFF_FFFF;
pub const PROGRAM_SIZE: u32 = 0x7FFF_D000;

// RAM. Readable and writable, not executable.
pub const RAM_START: u32 = 0x8000_0000;
pub const RAM_END: u32 = 0xFFFC_FFFF;
pub const RAM_SIZE: u32 = 0x7FFD_0000;

// Executable RAM. The only writable region code may run from.
pub const XRAM_START: u32 = 0xC000_0000;
pub const XRAM_END: u32 = 0xFFFC_FFFF;
pub const XRAM_SIZE: u32 = 0x3FFD_0000;

// Data stack window. Reachable only through PUSH/POP.
pub const STACK_START: u32 = 0xFFFD_0000;
pub const STACK_END: u32 = 0xFFFD_FFFF;
pub const STACK_SIZE: u32 = 0x0001_0000;

// Call stack window. Reachable only through CALL/RET and interrupt entry.
pub const CALL_STACK_START: u32 = 0xFFFE_0000;
pub const CALL_STACK_END: u32 = 0xFFFE_FFFF;
pub const CALL_STACK_SIZE: u32 = 0x0001_0000;

// Quick RAM, the base region of the short addressing forms.
pub const QRAM_START: u32 = 0xFFFF_0000;
pub const QRAM_END: u32 = 0xFFFF_FFFF;
pub const QRAM_SIZE: u32 = 0x0001_0000;

// I/O ports, overlaying the top of QRAM.
pub const IO_START: u32 = 0xFFFF_FF00;
pub const IO_END: u32 = 0xFFFF_FFFF;
pub const IO_SIZE: u32 = 0x0000_0100;

/// Magic bytes at the start of every TM ROM image.
pub const MAGIC: [u8; 4] = *b"TM08";
pub const MAGIC_ADDRESS: usize = 0x0000_0000;

/// Program name field: NUL-terminated, at most 123 bytes of payload.
pub const PROGRAM_NAME_ADDRESS: usize = 0x0000_0004;
pub const PROGRAM_NAME_SIZE: usize = 123;

/// Program author field: NUL-terminated, at most 127 bytes of payload.
pub const PROGRAM_AUTHOR_ADDRESS: usize = 0x0000_0080;
pub const PROGRAM_AUTHOR_SIZE: usize = 127;

/// Big-endian long advertising the program's expected total ROM size.
pub const PROGRAM_ROM_SIZE_ADDRESS: usize = 0x0000_0160;
