//! # Simulator Tests
//!
//! Run-loop exits, step budgets, decode errors, and reset.

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;
use hvsim_core::common::{DecodeError, SimError};
use hvsim_core::config::Config;
use hvsim_core::core::CpuState;
use hvsim_core::sim::ExitReason;

#[test]
fn test_run_until_halt() {
    let mut ctx = TestContext::new().with_program(ProgramBuilder::new().li(0, b'!').wr(0).halt());
    assert_eq!(ctx.run(), ExitReason::Halted);
    assert_eq!(ctx.output(), b"!".to_vec());
    assert_eq!(ctx.sim.stats().steps, 4);
}

#[test]
fn test_run_on_halted_cpu_returns_immediately() {
    let mut ctx = TestContext::new().with_program(ProgramBuilder::new().halt());
    assert_eq!(ctx.run(), ExitReason::Halted);
    assert_eq!(ctx.run(), ExitReason::Halted);
    assert_eq!(ctx.sim.stats().steps, 2);
}

#[test]
fn test_step_limit_on_infinite_loop() {
    let mut config = Config::default();
    config.general.max_steps = Some(100);
    let mut ctx = TestContext::with_config(&config).with_program(ProgramBuilder::new().jmp(0));
    assert_eq!(ctx.run(), ExitReason::StepLimit);
    assert_eq!(ctx.sim.stats().steps, 100);
    assert_eq!(ctx.state(), CpuState::Running);

    // The budget applies per call.
    assert_eq!(ctx.run(), ExitReason::StepLimit);
    assert_eq!(ctx.sim.stats().steps, 200);
}

#[test]
fn test_zero_step_budget() {
    let mut config = Config::default();
    config.general.max_steps = Some(0);
    let mut ctx = TestContext::with_config(&config);
    assert_eq!(ctx.run(), ExitReason::StepLimit);
    assert_eq!(ctx.pc(), 0);
}

#[test]
fn test_decode_error_reports_pc_and_word() {
    let mut ctx = TestContext::new().with_words(&[0x0000, 0x003F]);
    let err = ctx.sim.run().unwrap_err();
    match err {
        SimError::Decode { pc, word, source } => {
            assert_eq!(pc, 1);
            assert_eq!(word, 0x003F);
            assert_eq!(source, DecodeError::UnknownOpcode { opcode: 0o77 });
        }
        other => panic!("expected decode error, got {other:?}"),
    }
    assert_eq!(ctx.pc(), 1);
    assert_eq!(ctx.sim.stats().steps, 1);
    assert!(ctx.sim.step().is_err());
}

#[test]
fn test_decode_error_message() {
    let mut ctx = TestContext::new().with_words(&[0x0007]);
    let err = ctx.sim.step().unwrap_err();
    assert_eq!(
        err.to_string(),
        "decode error at pc 0x00 (word 0x0007): unknown opcode 0o007"
    );
}

#[test]
fn test_reset_keeps_memories() {
    let mut ctx = TestContext::new()
        .with_program(ProgramBuilder::new().li(1, 0x42).st(1, 0x10).call(0x20))
        .with_input(b"z");
    ctx.step_n(3);
    assert_eq!(ctx.pc(), 0x20);

    ctx.sim.reset();
    assert_eq!(ctx.pc(), 0);
    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.flags().bits(), 0);
    assert!(ctx.cpu().call_stack.is_empty());
    assert_eq!(ctx.sim.stats().steps, 0);
    assert_eq!(ctx.data(0x10), 0x42);
    assert_eq!(ctx.console.pending_input(), 1);

    ctx.step_n(3);
    assert_eq!(ctx.reg(1), 0x42);
}

#[test]
fn test_reset_clears_halt() {
    let mut ctx = TestContext::new().with_program(ProgramBuilder::new().halt());
    assert_eq!(ctx.run(), ExitReason::Halted);
    ctx.sim.reset();
    assert_eq!(ctx.state(), CpuState::Running);
    assert_eq!(ctx.run(), ExitReason::Halted);
}

#[test]
fn test_trace_flag_follows_config() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    config.general.max_steps = Some(10);
    let mut ctx = TestContext::with_config(&config);
    assert!(ctx.cpu().trace);
    assert_eq!(ctx.run(), ExitReason::StepLimit);
}
