use tm_core::core::memmap;
use tm_core::cpu::tm::{ErrorCode, Flag, Tm};

mod common;
use common::TestBus;

fn run_one(cpu: &mut Tm, program: &[u8]) {
    let mut bus = TestBus::new();
    bus.load(cpu.pc, program);
    assert!(cpu.step(&mut bus));
}

#[test]
fn daa_adjusts_after_addition() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    cpu.a = 0x48;
    // ADD AL, #$34; DAA. BCD 48 + 34 = 82.
    bus.load(memmap::PROGRAM_START, &[0x34, 0x30, 0x34, 0x07, 0x00]);

    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.a & 0xFF, 0x7C);
    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.a & 0xFF, 0x82);
    assert!(!cpu.flag(Flag::C));
}

#[test]
fn daa_carries_out_of_the_high_nibble() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    cpu.a = 0x90;
    // ADD AL, #$15; DAA. BCD 90 + 15 = 105, carry out.
    bus.load(memmap::PROGRAM_START, &[0x34, 0x30, 0x15, 0x07, 0x00]);

    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.a & 0xFF, 0xA5);
    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.a & 0xFF, 0x05);
    assert!(cpu.flag(Flag::C));
    assert!(cpu.flag(Flag::O), "additive BCD carry reads as overflow");
    assert!(!cpu.flag(Flag::U));
}

#[test]
fn daa_adjusts_after_subtraction() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    cpu.a = 0x42;
    // SUB AL, #$09; DAA. BCD 42 - 09 = 33.
    bus.load(memmap::PROGRAM_START, &[0x3A, 0x30, 0x09, 0x07, 0x00]);

    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.a & 0xFF, 0x39);
    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.a & 0xFF, 0x33);
}

#[test]
fn cpl_complements_the_long_accumulator() {
    let mut cpu = Tm::new();
    cpu.a = 0x0F0F_0F0F;
    run_one(&mut cpu, &[0x08, 0x00]);

    assert_eq!(cpu.a, 0xF0F0_F0F0);
    assert!(cpu.flag(Flag::N));
    assert!(cpu.flag(Flag::H));
}

#[test]
fn cpw_and_cpb_complement_subviews() {
    let mut cpu = Tm::new();
    cpu.a = 0x1234_0FF0;
    run_one(&mut cpu, &[0x09, 0x00]);
    assert_eq!(cpu.a, 0x1234_F00F, "CPW leaves the upper word alone");

    let mut cpu = Tm::new();
    cpu.a = 0x1234_56F0;
    run_one(&mut cpu, &[0x0A, 0x00]);
    assert_eq!(cpu.a, 0x1234_560F, "CPB touches only the low byte");
}

#[test]
fn scf_and_ccf() {
    let mut cpu = Tm::new();
    cpu.set_flag(Flag::N, true);
    cpu.set_flag(Flag::H, true);
    run_one(&mut cpu, &[0x0B, 0x00]);
    assert!(cpu.flag(Flag::C));
    assert!(!cpu.flag(Flag::N));
    assert!(!cpu.flag(Flag::H));

    run_one(&mut cpu, &[0x0C, 0x00]);
    assert!(!cpu.flag(Flag::C));

    run_one(&mut cpu, &[0x0C, 0x00]);
    assert!(cpu.flag(Flag::C));
}

#[test]
fn sec_installs_a_code_without_stopping() {
    let mut cpu = Tm::new();
    // SEC $05
    run_one(&mut cpu, &[0x03, 0x05]);

    assert_eq!(cpu.ec, ErrorCode::ReadAccessViolation);
    assert!(!cpu.flag(Flag::S));
    assert!(!cpu.has_error(), "an installed code alone is not an error");
}

#[test]
fn sec_accepts_unknown_codes() {
    let mut cpu = Tm::new();
    run_one(&mut cpu, &[0x03, 0x7F]);

    assert_eq!(cpu.ec, ErrorCode::Unknown(0x7F));
    assert_eq!(cpu.error_message(), "unknown error code $7F");
}

#[test]
fn cec_clears_the_code() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    // SEC $05; CEC
    bus.load(memmap::PROGRAM_START, &[0x03, 0x05, 0x04, 0x00]);

    assert!(cpu.step(&mut bus));
    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.ec, ErrorCode::Ok);
}

#[test]
fn tick_failure_is_a_hardware_error() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    bus.load(memmap::PROGRAM_START, &[0x00, 0x00]);
    bus.fail_ticks = true;

    assert!(!cpu.step(&mut bus));
    assert_eq!(cpu.ec, ErrorCode::Hardware);
    assert!(cpu.has_error());
}

#[test]
fn read_failure_is_a_bus_error() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    bus.fail_reads = true;

    assert!(!cpu.step(&mut bus));
    assert_eq!(cpu.ec, ErrorCode::BusRead);
    assert_eq!(cpu.ea, memmap::PROGRAM_START);
    assert_eq!(
        cpu.error_message(),
        "bus read failed at address $00003000"
    );
}

#[test]
fn write_failure_is_a_bus_error() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    cpu.a = 0x42;
    // ST $80000000, AL
    bus.load(
        memmap::PROGRAM_START,
        &[0x17, 0x03, 0x80, 0x00, 0x00, 0x00],
    );
    bus.fail_writes = true;

    assert!(!cpu.step(&mut bus));
    assert_eq!(cpu.ec, ErrorCode::BusWrite);
    assert_eq!(cpu.ea, memmap::RAM_START);
}

#[test]
fn snapshot_reflects_flag_structure() {
    use tm_core::cpu::CpuStateTrait;

    let mut cpu = Tm::new();
    cpu.set_flag(Flag::C, true);
    cpu.set_flag(Flag::Z, true);

    let state = cpu.snapshot();
    assert!(state.flags.carry);
    assert!(state.flags.zero);
    assert!(!state.flags.negative);
    assert_eq!(state.pc, memmap::PROGRAM_START);
}
