/// Script opcodes used when building the fixed scripts of the chain parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Op0,
    OpPushdata1,
    OpPushdata2,
    OpPushdata4,
    Op1Negate,
    Op1,
    OpChecksig,
}

impl Opcode {
    pub fn to_u8(&self) -> u8 {
        match self {
            Opcode::Op0 => 0x00,
            Opcode::OpPushdata1 => 0x4c,
            Opcode::OpPushdata2 => 0x4d,
            Opcode::OpPushdata4 => 0x4e,
            Opcode::Op1Negate => 0x4f,
            Opcode::Op1 => 0x51,
            Opcode::OpChecksig => 0xac,
        }
    }

    /// The `OP_1`..`OP_16` opcode for a small integer, `None` outside 1..=16.
    pub fn small_int(n: i64) -> Option<u8> {
        if (1..=16).contains(&n) {
            Some(Opcode::Op1.to_u8() + (n as u8 - 1))
        } else {
            None
        }
    }
}
