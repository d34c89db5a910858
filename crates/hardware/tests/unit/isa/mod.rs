/// Decoder unit tests.
pub mod decode;


/// Disassembler tests.
pub mod disasm;
