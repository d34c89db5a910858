//! Instruction Disassembler.
//!
//! Converts a program-memory word into a human-readable mnemonic string for
//! debug tracing, the CLI `disasm` command, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use hvsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2A45), "LI r1, 0x2a");
//! assert_eq!(disassemble(0x003F), ".word 0x003f");
//! ```

use crate::isa::decode::decode;
use crate::soc::memory::ProgramMemory;

/// Disassembles one instruction word.
///
/// Returns the assembler form (e.g. `"ADD r0, r1"`), or `.word 0xNNNN` when
/// the opcode field is undefined.
pub fn disassemble(word: u16) -> String {
    decode(word).map_or_else(|_| format!(".word {word:#06x}"), |inst| inst.to_string())
}

/// Disassembles a whole program memory into `(address, word, text)` rows.
///
/// Trailing all-zero (`NOOP`) cells after the last nonzero word are omitted so
/// that short programs print compactly; an empty memory yields no rows.
pub fn disassemble_program(program: &ProgramMemory) -> Vec<(u8, u16, String)> {
    let words = program.words();
    let end = words.iter().rposition(|&w| w != 0).map_or(0, |last| last + 1);
    words[..end]
        .iter()
        .enumerate()
        .map(|(addr, &word)| (addr as u8, word, disassemble(word)))
        .collect()
}
