//! Opcode Table.
//!
//! Defines the 6-bit opcodes (header bits 0-5) and the operand shape each one
//! uses. Values are grouped by octal family: `00x` moves, `01x` arithmetic and
//! flag clears, `02x`/`03x` logic, `04x` control flow, `05x` machine state,
//! `07x` console I/O.

use crate::isa::instruction::OperandShape;

/// No operation.
pub const OP_NOOP: u8 = 0o00;
/// Store register to data memory at an immediate address.
pub const OP_ST: u8 = 0o01;
/// Store `reg2` to data memory at the address held in `reg1`.
pub const OP_STR: u8 = 0o02;
/// Load register from data memory at an immediate address.
pub const OP_LD: u8 = 0o03;
/// Load `reg1` from data memory at the address held in `reg2`.
pub const OP_LDR: u8 = 0o04;
/// Load immediate.
pub const OP_LI: u8 = 0o05;
/// Copy register.
pub const OP_CP: u8 = 0o06;

/// Register-register subtract (sign-magnitude result).
pub const OP_SUB: u8 = 0o10;
/// Register-register add.
pub const OP_ADD: u8 = 0o11;
/// Register-immediate subtract (sign-magnitude result).
pub const OP_SUBI: u8 = 0o12;
/// Register-immediate add.
pub const OP_ADDI: u8 = 0o13;
/// Clear carry flag.
pub const OP_CLC: u8 = 0o14;
/// Clear interrupt flag.
pub const OP_CLI: u8 = 0o15;
/// Clear negative flag.
pub const OP_CLN: u8 = 0o16;

/// Register-register AND.
pub const OP_AND: u8 = 0o20;
/// Register-register OR.
pub const OP_OR: u8 = 0o21;
/// Register-register XOR.
pub const OP_XOR: u8 = 0o22;
/// Bitwise complement.
pub const OP_NOT: u8 = 0o23;
/// Logical shift left by one.
pub const OP_SHL: u8 = 0o24;
/// Logical shift right by one.
pub const OP_SHR: u8 = 0o25;

/// Register-immediate AND.
pub const OP_ANDI: u8 = 0o30;
/// Register-immediate OR.
pub const OP_ORI: u8 = 0o31;
/// Register-immediate XOR.
pub const OP_XORI: u8 = 0o32;

/// Unconditional jump.
pub const OP_JMP: u8 = 0o40;
/// Jump if register is zero.
pub const OP_JIZ: u8 = 0o41;
/// Jump if register is nonzero.
pub const OP_JNZ: u8 = 0o42;
/// Jump if carry set.
pub const OP_JIC: u8 = 0o43;
/// Jump if carry clear.
pub const OP_JNC: u8 = 0o44;
/// Jump if interrupt flag set.
pub const OP_JII: u8 = 0o45;
/// Jump if interrupt flag clear.
pub const OP_JNI: u8 = 0o46;
/// Push the address of this instruction and jump.
pub const OP_CALL: u8 = 0o47;

/// Load the program pointer into a register.
pub const OP_LDPR: u8 = 0o50;
/// Load the packed flags byte into a register.
pub const OP_LDFL: u8 = 0o51;
/// Store a register into the packed flags byte.
pub const OP_STFL: u8 = 0o52;
/// Pop the call stack and jump to the popped address.
pub const OP_RET: u8 = 0o53;

/// Read one console byte into a register.
pub const OP_RD: u8 = 0o71;
/// Write a register to the console.
pub const OP_WR: u8 = 0o72;

/// Closed enumeration of every defined opcode.
///
/// Discriminants equal the encoded 6-bit field, so `op as u8` is the encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    Noop = OP_NOOP,
    St = OP_ST,
    Str = OP_STR,
    Ld = OP_LD,
    Ldr = OP_LDR,
    Li = OP_LI,
    Cp = OP_CP,
    Sub = OP_SUB,
    Add = OP_ADD,
    Subi = OP_SUBI,
    Addi = OP_ADDI,
    Clc = OP_CLC,
    Cli = OP_CLI,
    Cln = OP_CLN,
    And = OP_AND,
    Or = OP_OR,
    Xor = OP_XOR,
    Not = OP_NOT,
    Shl = OP_SHL,
    Shr = OP_SHR,
    Andi = OP_ANDI,
    Ori = OP_ORI,
    Xori = OP_XORI,
    Jmp = OP_JMP,
    Jiz = OP_JIZ,
    Jnz = OP_JNZ,
    Jic = OP_JIC,
    Jnc = OP_JNC,
    Jii = OP_JII,
    Jni = OP_JNI,
    Call = OP_CALL,
    Ldpr = OP_LDPR,
    Ldfl = OP_LDFL,
    Stfl = OP_STFL,
    Ret = OP_RET,
    Rd = OP_RD,
    Wr = OP_WR,
}

impl Opcode {
    /// Every defined opcode in ascending encoding order.
    pub const ALL: [Self; 37] = [
        Self::Noop,
        Self::St,
        Self::Str,
        Self::Ld,
        Self::Ldr,
        Self::Li,
        Self::Cp,
        Self::Sub,
        Self::Add,
        Self::Subi,
        Self::Addi,
        Self::Clc,
        Self::Cli,
        Self::Cln,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::Shl,
        Self::Shr,
        Self::Andi,
        Self::Ori,
        Self::Xori,
        Self::Jmp,
        Self::Jiz,
        Self::Jnz,
        Self::Jic,
        Self::Jnc,
        Self::Jii,
        Self::Jni,
        Self::Call,
        Self::Ldpr,
        Self::Ldfl,
        Self::Stfl,
        Self::Ret,
        Self::Rd,
        Self::Wr,
    ];

    /// Maps a raw 6-bit opcode field to its opcode.
    ///
    /// Returns `None` for values with no defined instruction.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        let op = match bits {
            OP_NOOP => Self::Noop,
            OP_ST => Self::St,
            OP_STR => Self::Str,
            OP_LD => Self::Ld,
            OP_LDR => Self::Ldr,
            OP_LI => Self::Li,
            OP_CP => Self::Cp,
            OP_SUB => Self::Sub,
            OP_ADD => Self::Add,
            OP_SUBI => Self::Subi,
            OP_ADDI => Self::Addi,
            OP_CLC => Self::Clc,
            OP_CLI => Self::Cli,
            OP_CLN => Self::Cln,
            OP_AND => Self::And,
            OP_OR => Self::Or,
            OP_XOR => Self::Xor,
            OP_NOT => Self::Not,
            OP_SHL => Self::Shl,
            OP_SHR => Self::Shr,
            OP_ANDI => Self::Andi,
            OP_ORI => Self::Ori,
            OP_XORI => Self::Xori,
            OP_JMP => Self::Jmp,
            OP_JIZ => Self::Jiz,
            OP_JNZ => Self::Jnz,
            OP_JIC => Self::Jic,
            OP_JNC => Self::Jnc,
            OP_JII => Self::Jii,
            OP_JNI => Self::Jni,
            OP_CALL => Self::Call,
            OP_LDPR => Self::Ldpr,
            OP_LDFL => Self::Ldfl,
            OP_STFL => Self::Stfl,
            OP_RET => Self::Ret,
            OP_RD => Self::Rd,
            OP_WR => Self::Wr,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the encoded 6-bit opcode field.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns how the operand byte is interpreted for this opcode.
    pub const fn shape(self) -> OperandShape {
        match self {
            Self::Noop | Self::Clc | Self::Cli | Self::Cln | Self::Ret => OperandShape::None,
            Self::Not
            | Self::Shl
            | Self::Shr
            | Self::Ldpr
            | Self::Ldfl
            | Self::Stfl
            | Self::Rd
            | Self::Wr => OperandShape::Short,
            Self::Str
            | Self::Ldr
            | Self::Cp
            | Self::Sub
            | Self::Add
            | Self::And
            | Self::Or
            | Self::Xor => OperandShape::Dual,
            Self::St
            | Self::Ld
            | Self::Li
            | Self::Subi
            | Self::Addi
            | Self::Andi
            | Self::Ori
            | Self::Xori
            | Self::Jiz
            | Self::Jnz => OperandShape::Long,
            Self::Jmp
            | Self::Jic
            | Self::Jnc
            | Self::Jii
            | Self::Jni
            | Self::Call => OperandShape::Data,
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Noop => "NOOP",
            Self::St => "ST",
            Self::Str => "STR",
            Self::Ld => "LD",
            Self::Ldr => "LDR",
            Self::Li => "LI",
            Self::Cp => "CP",
            Self::Sub => "SUB",
            Self::Add => "ADD",
            Self::Subi => "SUBI",
            Self::Addi => "ADDI",
            Self::Clc => "CLC",
            Self::Cli => "CLI",
            Self::Cln => "CLN",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
            Self::Andi => "ANDI",
            Self::Ori => "ORI",
            Self::Xori => "XORI",
            Self::Jmp => "JMP",
            Self::Jiz => "JIZ",
            Self::Jnz => "JNZ",
            Self::Jic => "JIC",
            Self::Jnc => "JNC",
            Self::Jii => "JII",
            Self::Jni => "JNI",
            Self::Call => "CALL",
            Self::Ldpr => "LDPR",
            Self::Ldfl => "LDFL",
            Self::Stfl => "STFL",
            Self::Ret => "RET",
            Self::Rd => "RD",
            Self::Wr => "WR",
        }
    }
}
