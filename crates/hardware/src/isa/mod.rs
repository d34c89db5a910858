//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the instruction word layout, the decoder, and the
//! disassembler for the 8-bit Harvard CPU.
//!
//! # Operand shapes
//!
//! * `None`: no operands (`NOOP`, `CLC`, `CLI`, `CLN`, `RET`).
//! * `Short`: one register (`NOT`, `SHL`, `SHR`, `LDPR`, `LDFL`, `STFL`, `RD`, `WR`).
//! * `Dual`: two registers (`STR`, `LDR`, `CP`, `SUB`, `ADD`, `AND`, `OR`, `XOR`).
//! * `Long`: register plus 8-bit data (`ST`, `LD`, `LI`, `SUBI`, `ADDI`, `ANDI`,
//!   `ORI`, `XORI`, `JIZ`, `JNZ`).
//! * `Data`: 8-bit data only (`JMP`, `JIC`, `JNC`, `JII`, `JNI`, `CALL`).

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode values, shapes, and mnemonics.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Instruction, InstructionBits, Operand, OperandShape};
pub use opcodes::Opcode;
