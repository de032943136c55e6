//! Instruction decoder for the 6510 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// None if the slice is empty or too short to hold the whole instruction.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand_len = (metadata.size_bytes - 1) as usize;

    let operand_bytes = rest.get(..operand_len)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic.as_str(),
        legal: metadata.legal,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes,
        base_cycles: metadata.base_cycles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;

    #[test]
    fn test_decode_lda_immediate() {
        let bytes = &[0xA9, 0x42];
        let instr = decode_instruction(bytes, 0x8000).unwrap();

        assert_eq!(instr.address, 0x8000);
        assert_eq!(instr.opcode, 0xA9);
        assert_eq!(instr.mnemonic, "LDA");
        assert!(instr.legal);
        assert_eq!(instr.addressing_mode, AddressingMode::Immediate);
        assert_eq!(instr.operand_bytes, vec![0x42]);
        assert_eq!(instr.size_bytes, 2);
    }

    #[test]
    fn test_decode_sta_absolute() {
        let bytes = &[0x8D, 0x00, 0x80];
        let instr = decode_instruction(bytes, 0x0000).unwrap();

        assert_eq!(instr.mnemonic, "STA");
        assert_eq!(instr.addressing_mode, AddressingMode::Absolute);
        assert_eq!(instr.operand_bytes, vec![0x00, 0x80]);
        assert_eq!(instr.size_bytes, 3);
        assert_eq!(instr.base_cycles, 4);
    }

    #[test]
    fn test_decode_undocumented() {
        let instr = decode_instruction(&[0xA7, 0x10], 0x1000).unwrap();

        assert_eq!(instr.mnemonic, "LAX");
        assert!(!instr.legal);
        assert_eq!(instr.addressing_mode, AddressingMode::ZeroPage);
    }

    #[test]
    fn test_every_opcode_decodes() {
        for opcode in 0..=255u8 {
            let bytes = [opcode, 0x00, 0x00];
            assert!(decode_instruction(&bytes, 0).is_some(), "${:02X}", opcode);
        }
    }

    #[test]
    fn test_short_slice() {
        assert!(decode_instruction(&[], 0).is_none());
        assert!(decode_instruction(&[0xAD, 0x00], 0).is_none());
    }
}
