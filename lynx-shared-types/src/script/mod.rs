//! Minimal script construction.
//!
//! Only what the chain parameters need: integer and script-number pushes,
//! data pushes with the smallest push opcode, and plain opcodes.

pub mod opcode;

use serde::{Deserialize, Serialize};

pub use opcode::Opcode;

/// A serialized script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pushes an integer, using `OP_0`, `OP_1NEGATE` or `OP_1`..`OP_16`
    /// where possible and a minimal script number otherwise.
    pub fn push_int(mut self, n: i64) -> Self {
        if n == 0 {
            self.0.push(Opcode::Op0.to_u8());
        } else if n == -1 {
            self.0.push(Opcode::Op1Negate.to_u8());
        } else if let Some(op) = Opcode::small_int(n) {
            self.0.push(op);
        } else {
            return self.push_slice(&encode_script_num(n));
        }
        self
    }

    /// Pushes the script-number encoding of `n` as data, never as a small-int opcode.
    pub fn push_num(self, n: i64) -> Self {
        self.push_slice(&encode_script_num(n))
    }

    /// Pushes raw data with the shortest push opcode for its length.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < Opcode::OpPushdata1.to_u8() as usize {
            self.0.push(len as u8);
        } else if len <= u8::MAX as usize {
            self.0.push(Opcode::OpPushdata1.to_u8());
            self.0.push(len as u8);
        } else if len <= u16::MAX as usize {
            self.0.push(Opcode::OpPushdata2.to_u8());
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(Opcode::OpPushdata4.to_u8());
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn push_opcode(mut self, op: Opcode) -> Self {
        self.0.push(op.to_u8());
        self
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
pub fn encode_script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The sign lives in the top bit of the last byte.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_num_encoding() {
        assert_eq!(encode_script_num(0), Vec::<u8>::new());
        assert_eq!(encode_script_num(4), vec![0x04]);
        assert_eq!(encode_script_num(-1), vec![0x81]);
        assert_eq!(encode_script_num(0x80), vec![0x80, 0x00]);
        assert_eq!(encode_script_num(-0x80), vec![0x80, 0x80]);
        assert_eq!(encode_script_num(486604799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_push_int_uses_small_int_opcodes() {
        assert_eq!(Script::new().push_int(0).as_bytes(), &[0x00]);
        assert_eq!(Script::new().push_int(-1).as_bytes(), &[0x4f]);
        assert_eq!(Script::new().push_int(4).as_bytes(), &[0x54]);
        assert_eq!(Script::new().push_int(16).as_bytes(), &[0x60]);
        assert_eq!(Script::new().push_int(17).as_bytes(), &[0x01, 0x11]);
    }

    #[test]
    fn test_push_num_is_always_data() {
        assert_eq!(Script::new().push_num(4).as_bytes(), &[0x01, 0x04]);
    }

    #[test]
    fn test_push_slice_length_prefixes() {
        let short = Script::new().push_slice(&[0xaa; 75]);
        assert_eq!(short.as_bytes()[0], 75);
        assert_eq!(short.len(), 76);

        let pushdata1 = Script::new().push_slice(&[0xaa; 76]);
        assert_eq!(&pushdata1.as_bytes()[..2], &[0x4c, 76]);

        let pushdata2 = Script::new().push_slice(&[0xaa; 256]);
        assert_eq!(&pushdata2.as_bytes()[..3], &[0x4d, 0x00, 0x01]);
    }

    #[test]
    fn test_pay_to_pubkey_layout() {
        let script = Script::new()
            .push_slice(&[0x04; 65])
            .push_opcode(Opcode::OpChecksig);
        assert_eq!(script.len(), 67);
        assert_eq!(script.as_bytes()[0], 65);
        assert_eq!(script.as_bytes()[66], 0xac);
    }
}
