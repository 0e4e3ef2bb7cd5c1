//! `tm`: the TM virtual machine runner.
//!
//! Loads a program ROM, wires the CPU to a ROM-backed address decoder
//! with a sparse RAM image, and steps until the program stops or faults.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tm_core::core::{Bus, memmap};
use tm_core::cpu::tm::Tm;
use tm_core::program::Program;

#[derive(Parser)]
#[command(name = "tm", about = "TM virtual machine", version)]
struct Args {
    /// Program ROM to load and run.
    #[arg(short = 'i', long = "input-file")]
    input_file: PathBuf,

    /// Stop after this many instructions, as a brake on runaway programs.
    #[arg(long = "max-steps")]
    max_steps: Option<u64>,
}

/// Address decoder backing the CPU's bus hooks: the loaded ROM covers the
/// low half of the address space, everything above `RAM_START` is a
/// sparse byte map.
struct SystemBus {
    program: Program,
    ram: HashMap<u32, u8>,
    cycles: u64,
}

impl SystemBus {
    fn new(program: Program) -> Self {
        Self {
            program,
            ram: HashMap::new(),
            cycles: 0,
        }
    }
}

impl Bus for SystemBus {
    fn read(&mut self, addr: u32) -> Option<u8> {
        if addr < memmap::RAM_START {
            // Unmapped ROM beyond the loaded image reads as open bus.
            Some(self.program.read_byte(addr).unwrap_or(0xFF))
        } else {
            Some(self.ram.get(&addr).copied().unwrap_or(0))
        }
    }

    fn write(&mut self, addr: u32, data: u8) -> bool {
        if addr < memmap::RAM_START {
            return false;
        }
        self.ram.insert(addr, data);
        true
    }

    fn tick(&mut self) -> bool {
        self.cycles += 1;
        true
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let program = match Program::from_file(&args.input_file) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("tm: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("tm: running '{}' by '{}'", program.name(), program.author());

    let mut bus = SystemBus::new(program);
    let mut cpu = Tm::new();

    let mut steps: u64 = 0;
    while cpu.step(&mut bus) {
        steps += 1;
        if let Some(max) = args.max_steps
            && steps >= max
        {
            eprintln!("tm: stopped after {max} steps");
            return ExitCode::FAILURE;
        }
    }

    if cpu.has_error() {
        eprintln!("tm: {}", cpu.error_message());
        return ExitCode::FAILURE;
    }

    println!(
        "tm: program stopped after {} instructions, {} cycles",
        steps, bus.cycles
    );
    ExitCode::SUCCESS
}
