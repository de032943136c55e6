//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as assembly text
///
/// Undocumented opcodes get a `*` prefix. `.byte` records print their value.
pub fn format_instruction(instr: &Instruction) -> String {
    if instr.is_data() {
        return format!(".byte ${:02X}", instr.opcode);
    }

    let marker = if instr.legal { "" } else { "*" };
    let operand = operand_syntax(instr.addressing_mode, &instr.operand_bytes, instr.address);

    if operand.is_empty() {
        format!("{}{}", marker, instr.mnemonic)
    } else {
        format!("{}{} {}", marker, instr.mnemonic, operand)
    }
}

/// Renders the operand field for `mode` from its raw operand bytes.
///
/// `address` is where the instruction starts; relative branches are shown as
/// their absolute target. Missing bytes are shown as `?`.
pub(crate) fn operand_syntax(mode: AddressingMode, operand: &[u8], address: u16) -> String {
    use AddressingMode::*;

    let byte = operand.first().map(|b| format!("{:02X}", b));
    let word = match operand {
        [lo, hi, ..] => Some(format!("{:04X}", u16::from_le_bytes([*lo, *hi]))),
        _ => None,
    };
    let byte = byte.as_deref().unwrap_or("??");
    let word = word.as_deref().unwrap_or("????");

    match mode {
        Implied => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${}", byte),
        ZeroPage => format!("${}", byte),
        ZeroPageX => format!("${},X", byte),
        ZeroPageY => format!("${},Y", byte),
        Absolute => format!("${}", word),
        AbsoluteX => format!("${},X", word),
        AbsoluteY => format!("${},Y", word),
        Indirect => format!("(${})", word),
        IndexedIndirect => format!("(${},X)", byte),
        IndirectIndexed => format!("(${}),Y", byte),
        Relative => match operand.first() {
            Some(&offset) => {
                let target = address.wrapping_add(2).wrapping_add_signed(offset as i8 as i16);
                format!("${:04X}", target)
            }
            None => "$????".to_string(),
        },
    }
}
