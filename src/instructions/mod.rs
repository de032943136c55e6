//! # 6510 Instruction Implementations
//!
//! This module contains the implementations of all 6510 instructions, organized by category.
//! Each instruction is implemented as a standalone function that takes a mutable reference
//! to the CPU and the addressing mode from the opcode's descriptor.
//!
//! Handlers run with PC still pointing at the opcode byte, so operand
//! resolution sees the instruction as it sits in memory. PC is advanced by the
//! descriptor size afterwards, except for control-flow instructions, which set
//! PC themselves.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **illegal**: Undocumented opcodes (SLO, RLA, LAX, DCP, JAM, ...)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod illegal;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::AddressingMode;
use crate::opcodes::{Mnemonic, OpcodeMetadata};
use crate::{MemoryBus, CPU};

/// Executes the instruction described by `metadata` at the current PC.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) {
    let mode = metadata.addressing_mode;

    match metadata.mnemonic {
        Mnemonic::LDA => load_store::execute_lda(cpu, mode),
        Mnemonic::LDX => load_store::execute_ldx(cpu, mode),
        Mnemonic::LDY => load_store::execute_ldy(cpu, mode),
        Mnemonic::STA => load_store::execute_sta(cpu, mode),
        Mnemonic::STX => load_store::execute_stx(cpu, mode),
        Mnemonic::STY => load_store::execute_sty(cpu, mode),

        Mnemonic::TAX => transfer::execute_tax(cpu),
        Mnemonic::TAY => transfer::execute_tay(cpu),
        Mnemonic::TXA => transfer::execute_txa(cpu),
        Mnemonic::TYA => transfer::execute_tya(cpu),
        Mnemonic::TSX => transfer::execute_tsx(cpu),
        Mnemonic::TXS => transfer::execute_txs(cpu),

        Mnemonic::PHA => stack::execute_pha(cpu),
        Mnemonic::PHP => stack::execute_php(cpu),
        Mnemonic::PLA => stack::execute_pla(cpu),
        Mnemonic::PLP => stack::execute_plp(cpu),

        Mnemonic::ADC => alu::execute_adc(cpu, mode),
        Mnemonic::SBC => alu::execute_sbc(cpu, mode),
        Mnemonic::AND => alu::execute_and(cpu, mode),
        Mnemonic::ORA => alu::execute_ora(cpu, mode),
        Mnemonic::EOR => alu::execute_eor(cpu, mode),
        Mnemonic::CMP => alu::execute_cmp(cpu, mode),
        Mnemonic::CPX => alu::execute_cpx(cpu, mode),
        Mnemonic::CPY => alu::execute_cpy(cpu, mode),
        Mnemonic::BIT => alu::execute_bit(cpu, mode),

        Mnemonic::INC => inc_dec::execute_inc(cpu, mode),
        Mnemonic::DEC => inc_dec::execute_dec(cpu, mode),
        Mnemonic::INX => inc_dec::execute_inx(cpu),
        Mnemonic::INY => inc_dec::execute_iny(cpu),
        Mnemonic::DEX => inc_dec::execute_dex(cpu),
        Mnemonic::DEY => inc_dec::execute_dey(cpu),

        Mnemonic::ASL => shifts::execute_asl(cpu, mode),
        Mnemonic::LSR => shifts::execute_lsr(cpu, mode),
        Mnemonic::ROL => shifts::execute_rol(cpu, mode),
        Mnemonic::ROR => shifts::execute_ror(cpu, mode),

        Mnemonic::JMP => control::execute_jmp(cpu, mode),
        Mnemonic::JSR => control::execute_jsr(cpu, mode),
        Mnemonic::RTS => control::execute_rts(cpu),
        Mnemonic::RTI => control::execute_rti(cpu),
        Mnemonic::BRK => control::execute_brk(cpu),
        Mnemonic::NOP => control::execute_nop(cpu, mode),

        Mnemonic::BCC => branches::execute_branch(cpu, |cpu| !cpu.flag_c),
        Mnemonic::BCS => branches::execute_branch(cpu, |cpu| cpu.flag_c),
        Mnemonic::BEQ => branches::execute_branch(cpu, |cpu| cpu.flag_z),
        Mnemonic::BNE => branches::execute_branch(cpu, |cpu| !cpu.flag_z),
        Mnemonic::BMI => branches::execute_branch(cpu, |cpu| cpu.flag_n),
        Mnemonic::BPL => branches::execute_branch(cpu, |cpu| !cpu.flag_n),
        Mnemonic::BVC => branches::execute_branch(cpu, |cpu| !cpu.flag_v),
        Mnemonic::BVS => branches::execute_branch(cpu, |cpu| cpu.flag_v),

        Mnemonic::CLC => flags::execute_clc(cpu),
        Mnemonic::SEC => flags::execute_sec(cpu),
        Mnemonic::CLI => flags::execute_cli(cpu),
        Mnemonic::SEI => flags::execute_sei(cpu),
        Mnemonic::CLD => flags::execute_cld(cpu),
        Mnemonic::SED => flags::execute_sed(cpu),
        Mnemonic::CLV => flags::execute_clv(cpu),

        Mnemonic::ANC => illegal::execute_anc(cpu, mode),
        Mnemonic::ALR => illegal::execute_alr(cpu, mode),
        Mnemonic::ARR => illegal::execute_arr(cpu, mode),
        Mnemonic::SBX => illegal::execute_sbx(cpu, mode),
        Mnemonic::LAX => illegal::execute_lax(cpu, mode),
        Mnemonic::SAX => illegal::execute_sax(cpu, mode),
        Mnemonic::DCP => illegal::execute_dcp(cpu, mode),
        Mnemonic::ISC => illegal::execute_isc(cpu, mode),
        Mnemonic::SLO => illegal::execute_slo(cpu, mode),
        Mnemonic::SRE => illegal::execute_sre(cpu, mode),
        Mnemonic::RLA => illegal::execute_rla(cpu, mode),
        Mnemonic::RRA => illegal::execute_rra(cpu, mode),
        Mnemonic::LAS => illegal::execute_las(cpu, mode),
        Mnemonic::TAS => illegal::execute_tas(cpu, mode),
        Mnemonic::XAA => illegal::execute_xaa(cpu, mode),
        Mnemonic::LXA => illegal::execute_lxa(cpu, mode),
        Mnemonic::SHA => illegal::execute_sha(cpu, mode),
        Mnemonic::SHX => illegal::execute_shx(cpu, mode),
        Mnemonic::SHY => illegal::execute_shy(cpu, mode),
        Mnemonic::JAM => illegal::execute_jam(cpu, metadata.opcode),
    }

    if !metadata.mnemonic.is_control_flow() {
        cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    }
}

/// Read-modify-write on the operand of the current instruction.
///
/// The address is resolved once, before the write, so an instruction that
/// modifies its own operand bytes still targets the original location.
/// Accumulator mode operates on A. Returns the value written.
pub(crate) fn modify<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: impl FnOnce(&mut CPU<M>, u8) -> u8,
) -> u8 {
    if mode == AddressingMode::Accumulator {
        let value = cpu.a;
        let result = op(cpu, value);
        cpu.a = result;
        return result;
    }

    let addr = cpu.effective_address(mode);
    let value = cpu.memory.read(addr);
    let result = op(cpu, value);
    cpu.memory.write(addr, result);
    result
}
