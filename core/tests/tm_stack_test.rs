use tm_core::core::memmap;
use tm_core::cpu::tm::{ErrorCode, Tm};

mod common;
use common::TestBus;

#[test]
fn push_then_pop_round_trips() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    cpu.a = 0x1234_5678;
    // PUSH A; POP B
    bus.load(memmap::PROGRAM_START, &[0x1E, 0x00, 0x1F, 0x40]);

    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.sp, 0xFFFC);
    assert_eq!(bus.long(memmap::STACK_START + 0xFFFC), 0x1234_5678);

    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.b, 0x1234_5678);
    assert_eq!(cpu.sp, 0x10000, "POP restores the stack pointer");
}

#[test]
fn push_at_full_stack_overflows() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    cpu.sp = 0;
    // PUSH A
    bus.load(memmap::PROGRAM_START, &[0x1E, 0x00]);

    assert!(!cpu.step(&mut bus));
    assert_eq!(cpu.ec, ErrorCode::DataStackOverflow);
}

#[test]
fn pop_at_empty_stack_underflows() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    // POP A with SP at the empty mark
    bus.load(memmap::PROGRAM_START, &[0x1F, 0x00]);

    assert!(!cpu.step(&mut bus));
    assert_eq!(cpu.ec, ErrorCode::DataStackUnderflow);
}

#[test]
fn call_pushes_the_return_address() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    // CALL NC, $00004000 at $00003010
    bus.load(0x3010, &[0x23, 0x00, 0x00, 0x00, 0x40, 0x00]);
    cpu.pc = 0x3010;

    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.pc, 0x4000);
    assert_eq!(cpu.rp, 0xFFFC);
    // The saved address is the first byte after the six-byte CALL.
    assert_eq!(bus.long(memmap::CALL_STACK_START + 0xFFFC), 0x3016);
}

#[test]
fn call_then_ret_round_trips() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    // CALL NC, $00004000; target holds RET NC.
    bus.load(
        memmap::PROGRAM_START,
        &[0x23, 0x00, 0x00, 0x00, 0x40, 0x00],
    );
    bus.load(0x4000, &[0x25, 0x00]);

    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.pc, 0x4000);

    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.pc, memmap::PROGRAM_START + 6);
    assert_eq!(cpu.rp, 0x10000);
}

#[test]
fn conditional_call_falls_through() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    // CALL CS, $00004000 with the carry clear
    bus.load(
        memmap::PROGRAM_START,
        &[0x23, 0x10, 0x00, 0x00, 0x40, 0x00],
    );

    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.pc, memmap::PROGRAM_START + 6);
    assert_eq!(cpu.rp, 0x10000, "an untaken CALL pushes nothing");
}

#[test]
fn call_at_full_stack_overflows() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    cpu.rp = 0;
    bus.load(
        memmap::PROGRAM_START,
        &[0x23, 0x00, 0x00, 0x00, 0x40, 0x00],
    );

    assert!(!cpu.step(&mut bus));
    assert_eq!(cpu.ec, ErrorCode::CallStackOverflow);
}

#[test]
fn ret_at_empty_stack_underflows() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    // RET NC with RP at the empty mark
    bus.load(memmap::PROGRAM_START, &[0x25, 0x00]);

    assert!(!cpu.step(&mut bus));
    assert_eq!(cpu.ec, ErrorCode::CallStackUnderflow);
}

#[test]
fn conditional_ret_falls_through() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    // RET ZS with the zero flag clear; the empty stack must not fault.
    bus.load(memmap::PROGRAM_START, &[0x25, 0x30]);

    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.pc, memmap::PROGRAM_START + 2);
}

#[test]
fn stacks_are_independent() {
    let mut cpu = Tm::new();
    let mut bus = TestBus::new();
    cpu.a = 0xAAAA_AAAA;
    // PUSH A; CALL NC, $00004000
    bus.load(
        memmap::PROGRAM_START,
        &[0x1E, 0x00, 0x23, 0x00, 0x00, 0x00, 0x40, 0x00],
    );

    assert!(cpu.step(&mut bus));
    assert!(cpu.step(&mut bus));
    assert_eq!(cpu.sp, 0xFFFC);
    assert_eq!(cpu.rp, 0xFFFC);
    assert_eq!(bus.long(memmap::STACK_START + 0xFFFC), 0xAAAA_AAAA);
    assert_eq!(bus.long(memmap::CALL_STACK_START + 0xFFFC), 0x3008);
}
