//! Static instruction decode tables.
//!
//! Every one of the 256 base and 256 CB-prefixed opcode slots has an entry;
//! totality is enforced by the array types at compile time. The holes in
//! the base map keep a placeholder entry whose microcode logs a warning.
//! CB cycle counts include the prefix fetch, so the engine charges nothing
//! extra for the `0xCB` byte itself.

use crate::cpu::{MicroFn, micro};

/// Decode-table entry for a base-page opcode.
pub struct Opcode {
    /// Disassembly template, operand placeholders in pandocs style.
    pub mnemonic: &'static str,
    /// Immediate operand bytes following the opcode.
    pub operands: u8,
    /// Machine cycles, counting the fetch; conditional instructions list
    /// the not-taken count and extend themselves when taken.
    pub cycles: u8,
    pub(crate) exec: MicroFn,
}

impl Opcode {
    const fn new(mnemonic: &'static str, operands: u8, cycles: u8, exec: MicroFn) -> Self {
        Self {
            mnemonic,
            operands,
            cycles,
            exec,
        }
    }
}

/// Decode-table entry for a CB-prefixed opcode. These never carry
/// immediate operands.
pub struct CbOpcode {
    pub mnemonic: &'static str,
    pub cycles: u8,
    pub(crate) exec: MicroFn,
}

impl CbOpcode {
    const fn new(mnemonic: &'static str, cycles: u8, exec: MicroFn) -> Self {
        Self {
            mnemonic,
            cycles,
            exec,
        }
    }
}

pub static OPCODES: [Opcode; 256] = [
    // 0x00
    Opcode::new("NOP", 0, 1, micro::nop),
    Opcode::new("LD BC, d16", 2, 3, micro::ld_rr_nn),
    Opcode::new("LD (BC), A", 0, 2, micro::ld_rrp_a),
    Opcode::new("INC BC", 0, 2, micro::inc_rr),
    Opcode::new("INC B", 0, 1, micro::inc_r),
    Opcode::new("DEC B", 0, 1, micro::dec_r),
    Opcode::new("LD B, d8", 1, 2, micro::ld_r_n),
    Opcode::new("RLCA", 0, 1, micro::rlca),
    Opcode::new("LD (a16), SP", 2, 5, micro::ld_nnp_sp),
    Opcode::new("ADD HL, BC", 0, 2, micro::add_hl_rr),
    Opcode::new("LD A, (BC)", 0, 2, micro::ld_a_rrp),
    Opcode::new("DEC BC", 0, 2, micro::dec_rr),
    Opcode::new("INC C", 0, 1, micro::inc_r),
    Opcode::new("DEC C", 0, 1, micro::dec_r),
    Opcode::new("LD C, d8", 1, 2, micro::ld_r_n),
    Opcode::new("RRCA", 0, 1, micro::rrca),
    // 0x10
    Opcode::new("STOP", 0, 1, micro::stop),
    Opcode::new("LD DE, d16", 2, 3, micro::ld_rr_nn),
    Opcode::new("LD (DE), A", 0, 2, micro::ld_rrp_a),
    Opcode::new("INC DE", 0, 2, micro::inc_rr),
    Opcode::new("INC D", 0, 1, micro::inc_r),
    Opcode::new("DEC D", 0, 1, micro::dec_r),
    Opcode::new("LD D, d8", 1, 2, micro::ld_r_n),
    Opcode::new("RLA", 0, 1, micro::rla),
    Opcode::new("JR r8", 1, 3, micro::jr_n),
    Opcode::new("ADD HL, DE", 0, 2, micro::add_hl_rr),
    Opcode::new("LD A, (DE)", 0, 2, micro::ld_a_rrp),
    Opcode::new("DEC DE", 0, 2, micro::dec_rr),
    Opcode::new("INC E", 0, 1, micro::inc_r),
    Opcode::new("DEC E", 0, 1, micro::dec_r),
    Opcode::new("LD E, d8", 1, 2, micro::ld_r_n),
    Opcode::new("RRA", 0, 1, micro::rra),
    // 0x20
    Opcode::new("JR NZ, r8", 1, 2, micro::jr_cc_n),
    Opcode::new("LD HL, d16", 2, 3, micro::ld_rr_nn),
    Opcode::new("LD (HL+), A", 0, 2, micro::ld_rrp_a),
    Opcode::new("INC HL", 0, 2, micro::inc_rr),
    Opcode::new("INC H", 0, 1, micro::inc_r),
    Opcode::new("DEC H", 0, 1, micro::dec_r),
    Opcode::new("LD H, d8", 1, 2, micro::ld_r_n),
    Opcode::new("DAA", 0, 1, micro::daa),
    Opcode::new("JR Z, r8", 1, 2, micro::jr_cc_n),
    Opcode::new("ADD HL, HL", 0, 2, micro::add_hl_rr),
    Opcode::new("LD A, (HL+)", 0, 2, micro::ld_a_rrp),
    Opcode::new("DEC HL", 0, 2, micro::dec_rr),
    Opcode::new("INC L", 0, 1, micro::inc_r),
    Opcode::new("DEC L", 0, 1, micro::dec_r),
    Opcode::new("LD L, d8", 1, 2, micro::ld_r_n),
    Opcode::new("CPL", 0, 1, micro::cpl),
    // 0x30
    Opcode::new("JR NC, r8", 1, 2, micro::jr_cc_n),
    Opcode::new("LD SP, d16", 2, 3, micro::ld_rr_nn),
    Opcode::new("LD (HL-), A", 0, 2, micro::ld_rrp_a),
    Opcode::new("INC SP", 0, 2, micro::inc_rr),
    Opcode::new("INC (HL)", 0, 3, micro::inc_r),
    Opcode::new("DEC (HL)", 0, 3, micro::dec_r),
    Opcode::new("LD (HL), d8", 1, 3, micro::ld_r_n),
    Opcode::new("SCF", 0, 1, micro::scf),
    Opcode::new("JR C, r8", 1, 2, micro::jr_cc_n),
    Opcode::new("ADD HL, SP", 0, 2, micro::add_hl_rr),
    Opcode::new("LD A, (HL-)", 0, 2, micro::ld_a_rrp),
    Opcode::new("DEC SP", 0, 2, micro::dec_rr),
    Opcode::new("INC A", 0, 1, micro::inc_r),
    Opcode::new("DEC A", 0, 1, micro::dec_r),
    Opcode::new("LD A, d8", 1, 2, micro::ld_r_n),
    Opcode::new("CCF", 0, 1, micro::ccf),
    // 0x40
    Opcode::new("LD B, B", 0, 1, micro::ld_r_r),
    Opcode::new("LD B, C", 0, 1, micro::ld_r_r),
    Opcode::new("LD B, D", 0, 1, micro::ld_r_r),
    Opcode::new("LD B, E", 0, 1, micro::ld_r_r),
    Opcode::new("LD B, H", 0, 1, micro::ld_r_r),
    Opcode::new("LD B, L", 0, 1, micro::ld_r_r),
    Opcode::new("LD B, (HL)", 0, 2, micro::ld_r_r),
    Opcode::new("LD B, A", 0, 1, micro::ld_r_r),
    Opcode::new("LD C, B", 0, 1, micro::ld_r_r),
    Opcode::new("LD C, C", 0, 1, micro::ld_r_r),
    Opcode::new("LD C, D", 0, 1, micro::ld_r_r),
    Opcode::new("LD C, E", 0, 1, micro::ld_r_r),
    Opcode::new("LD C, H", 0, 1, micro::ld_r_r),
    Opcode::new("LD C, L", 0, 1, micro::ld_r_r),
    Opcode::new("LD C, (HL)", 0, 2, micro::ld_r_r),
    Opcode::new("LD C, A", 0, 1, micro::ld_r_r),
    // 0x50
    Opcode::new("LD D, B", 0, 1, micro::ld_r_r),
    Opcode::new("LD D, C", 0, 1, micro::ld_r_r),
    Opcode::new("LD D, D", 0, 1, micro::ld_r_r),
    Opcode::new("LD D, E", 0, 1, micro::ld_r_r),
    Opcode::new("LD D, H", 0, 1, micro::ld_r_r),
    Opcode::new("LD D, L", 0, 1, micro::ld_r_r),
    Opcode::new("LD D, (HL)", 0, 2, micro::ld_r_r),
    Opcode::new("LD D, A", 0, 1, micro::ld_r_r),
    Opcode::new("LD E, B", 0, 1, micro::ld_r_r),
    Opcode::new("LD E, C", 0, 1, micro::ld_r_r),
    Opcode::new("LD E, D", 0, 1, micro::ld_r_r),
    Opcode::new("LD E, E", 0, 1, micro::ld_r_r),
    Opcode::new("LD E, H", 0, 1, micro::ld_r_r),
    Opcode::new("LD E, L", 0, 1, micro::ld_r_r),
    Opcode::new("LD E, (HL)", 0, 2, micro::ld_r_r),
    Opcode::new("LD E, A", 0, 1, micro::ld_r_r),
    // 0x60
    Opcode::new("LD H, B", 0, 1, micro::ld_r_r),
    Opcode::new("LD H, C", 0, 1, micro::ld_r_r),
    Opcode::new("LD H, D", 0, 1, micro::ld_r_r),
    Opcode::new("LD H, E", 0, 1, micro::ld_r_r),
    Opcode::new("LD H, H", 0, 1, micro::ld_r_r),
    Opcode::new("LD H, L", 0, 1, micro::ld_r_r),
    Opcode::new("LD H, (HL)", 0, 2, micro::ld_r_r),
    Opcode::new("LD H, A", 0, 1, micro::ld_r_r),
    Opcode::new("LD L, B", 0, 1, micro::ld_r_r),
    Opcode::new("LD L, C", 0, 1, micro::ld_r_r),
    Opcode::new("LD L, D", 0, 1, micro::ld_r_r),
    Opcode::new("LD L, E", 0, 1, micro::ld_r_r),
    Opcode::new("LD L, H", 0, 1, micro::ld_r_r),
    Opcode::new("LD L, L", 0, 1, micro::ld_r_r),
    Opcode::new("LD L, (HL)", 0, 2, micro::ld_r_r),
    Opcode::new("LD L, A", 0, 1, micro::ld_r_r),
    // 0x70
    Opcode::new("LD (HL), B", 0, 2, micro::ld_r_r),
    Opcode::new("LD (HL), C", 0, 2, micro::ld_r_r),
    Opcode::new("LD (HL), D", 0, 2, micro::ld_r_r),
    Opcode::new("LD (HL), E", 0, 2, micro::ld_r_r),
    Opcode::new("LD (HL), H", 0, 2, micro::ld_r_r),
    Opcode::new("LD (HL), L", 0, 2, micro::ld_r_r),
    Opcode::new("HALT", 0, 1, micro::halt),
    Opcode::new("LD (HL), A", 0, 2, micro::ld_r_r),
    Opcode::new("LD A, B", 0, 1, micro::ld_r_r),
    Opcode::new("LD A, C", 0, 1, micro::ld_r_r),
    Opcode::new("LD A, D", 0, 1, micro::ld_r_r),
    Opcode::new("LD A, E", 0, 1, micro::ld_r_r),
    Opcode::new("LD A, H", 0, 1, micro::ld_r_r),
    Opcode::new("LD A, L", 0, 1, micro::ld_r_r),
    Opcode::new("LD A, (HL)", 0, 2, micro::ld_r_r),
    Opcode::new("LD A, A", 0, 1, micro::ld_r_r),
    // 0x80
    Opcode::new("ADD A, B", 0, 1, micro::alu_a_r),
    Opcode::new("ADD A, C", 0, 1, micro::alu_a_r),
    Opcode::new("ADD A, D", 0, 1, micro::alu_a_r),
    Opcode::new("ADD A, E", 0, 1, micro::alu_a_r),
    Opcode::new("ADD A, H", 0, 1, micro::alu_a_r),
    Opcode::new("ADD A, L", 0, 1, micro::alu_a_r),
    Opcode::new("ADD A, (HL)", 0, 2, micro::alu_a_r),
    Opcode::new("ADD A, A", 0, 1, micro::alu_a_r),
    Opcode::new("ADC A, B", 0, 1, micro::alu_a_r),
    Opcode::new("ADC A, C", 0, 1, micro::alu_a_r),
    Opcode::new("ADC A, D", 0, 1, micro::alu_a_r),
    Opcode::new("ADC A, E", 0, 1, micro::alu_a_r),
    Opcode::new("ADC A, H", 0, 1, micro::alu_a_r),
    Opcode::new("ADC A, L", 0, 1, micro::alu_a_r),
    Opcode::new("ADC A, (HL)", 0, 2, micro::alu_a_r),
    Opcode::new("ADC A, A", 0, 1, micro::alu_a_r),
    // 0x90
    Opcode::new("SUB B", 0, 1, micro::alu_a_r),
    Opcode::new("SUB C", 0, 1, micro::alu_a_r),
    Opcode::new("SUB D", 0, 1, micro::alu_a_r),
    Opcode::new("SUB E", 0, 1, micro::alu_a_r),
    Opcode::new("SUB H", 0, 1, micro::alu_a_r),
    Opcode::new("SUB L", 0, 1, micro::alu_a_r),
    Opcode::new("SUB (HL)", 0, 2, micro::alu_a_r),
    Opcode::new("SUB A", 0, 1, micro::alu_a_r),
    Opcode::new("SBC A, B", 0, 1, micro::alu_a_r),
    Opcode::new("SBC A, C", 0, 1, micro::alu_a_r),
    Opcode::new("SBC A, D", 0, 1, micro::alu_a_r),
    Opcode::new("SBC A, E", 0, 1, micro::alu_a_r),
    Opcode::new("SBC A, H", 0, 1, micro::alu_a_r),
    Opcode::new("SBC A, L", 0, 1, micro::alu_a_r),
    Opcode::new("SBC A, (HL)", 0, 2, micro::alu_a_r),
    Opcode::new("SBC A, A", 0, 1, micro::alu_a_r),
    // 0xA0
    Opcode::new("AND B", 0, 1, micro::alu_a_r),
    Opcode::new("AND C", 0, 1, micro::alu_a_r),
    Opcode::new("AND D", 0, 1, micro::alu_a_r),
    Opcode::new("AND E", 0, 1, micro::alu_a_r),
    Opcode::new("AND H", 0, 1, micro::alu_a_r),
    Opcode::new("AND L", 0, 1, micro::alu_a_r),
    Opcode::new("AND (HL)", 0, 2, micro::alu_a_r),
    Opcode::new("AND A", 0, 1, micro::alu_a_r),
    Opcode::new("XOR B", 0, 1, micro::alu_a_r),
    Opcode::new("XOR C", 0, 1, micro::alu_a_r),
    Opcode::new("XOR D", 0, 1, micro::alu_a_r),
    Opcode::new("XOR E", 0, 1, micro::alu_a_r),
    Opcode::new("XOR H", 0, 1, micro::alu_a_r),
    Opcode::new("XOR L", 0, 1, micro::alu_a_r),
    Opcode::new("XOR (HL)", 0, 2, micro::alu_a_r),
    Opcode::new("XOR A", 0, 1, micro::alu_a_r),
    // 0xB0
    Opcode::new("OR B", 0, 1, micro::alu_a_r),
    Opcode::new("OR C", 0, 1, micro::alu_a_r),
    Opcode::new("OR D", 0, 1, micro::alu_a_r),
    Opcode::new("OR E", 0, 1, micro::alu_a_r),
    Opcode::new("OR H", 0, 1, micro::alu_a_r),
    Opcode::new("OR L", 0, 1, micro::alu_a_r),
    Opcode::new("OR (HL)", 0, 2, micro::alu_a_r),
    Opcode::new("OR A", 0, 1, micro::alu_a_r),
    Opcode::new("CP B", 0, 1, micro::alu_a_r),
    Opcode::new("CP C", 0, 1, micro::alu_a_r),
    Opcode::new("CP D", 0, 1, micro::alu_a_r),
    Opcode::new("CP E", 0, 1, micro::alu_a_r),
    Opcode::new("CP H", 0, 1, micro::alu_a_r),
    Opcode::new("CP L", 0, 1, micro::alu_a_r),
    Opcode::new("CP (HL)", 0, 2, micro::alu_a_r),
    Opcode::new("CP A", 0, 1, micro::alu_a_r),
    // 0xC0
    Opcode::new("RET NZ", 0, 2, micro::ret_cc),
    Opcode::new("POP BC", 0, 3, micro::pop_rr),
    Opcode::new("JP NZ, a16", 2, 3, micro::jp_cc_nn),
    Opcode::new("JP a16", 2, 4, micro::jp_nn),
    Opcode::new("CALL NZ, a16", 2, 3, micro::call_cc_nn),
    Opcode::new("PUSH BC", 0, 4, micro::push_rr),
    Opcode::new("ADD A, d8", 1, 2, micro::alu_a_n),
    Opcode::new("RST 00H", 0, 4, micro::rst),
    Opcode::new("RET Z", 0, 2, micro::ret_cc),
    Opcode::new("RET", 0, 4, micro::ret),
    Opcode::new("JP Z, a16", 2, 3, micro::jp_cc_nn),
    Opcode::new("PREFIX CB", 0, 1, micro::undefined),
    Opcode::new("CALL Z, a16", 2, 3, micro::call_cc_nn),
    Opcode::new("CALL a16", 2, 6, micro::call_nn),
    Opcode::new("ADC A, d8", 1, 2, micro::alu_a_n),
    Opcode::new("RST 08H", 0, 4, micro::rst),
    // 0xD0
    Opcode::new("RET NC", 0, 2, micro::ret_cc),
    Opcode::new("POP DE", 0, 3, micro::pop_rr),
    Opcode::new("JP NC, a16", 2, 3, micro::jp_cc_nn),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("CALL NC, a16", 2, 3, micro::call_cc_nn),
    Opcode::new("PUSH DE", 0, 4, micro::push_rr),
    Opcode::new("SUB d8", 1, 2, micro::alu_a_n),
    Opcode::new("RST 10H", 0, 4, micro::rst),
    Opcode::new("RET C", 0, 2, micro::ret_cc),
    Opcode::new("RETI", 0, 4, micro::reti),
    Opcode::new("JP C, a16", 2, 3, micro::jp_cc_nn),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("CALL C, a16", 2, 3, micro::call_cc_nn),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("SBC A, d8", 1, 2, micro::alu_a_n),
    Opcode::new("RST 18H", 0, 4, micro::rst),
    // 0xE0
    Opcode::new("LDH (a8), A", 1, 3, micro::ldh_np_a),
    Opcode::new("POP HL", 0, 3, micro::pop_rr),
    Opcode::new("LD (C), A", 0, 2, micro::ld_cp_a),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("PUSH HL", 0, 4, micro::push_rr),
    Opcode::new("AND d8", 1, 2, micro::alu_a_n),
    Opcode::new("RST 20H", 0, 4, micro::rst),
    Opcode::new("ADD SP, r8", 1, 4, micro::add_sp_n),
    Opcode::new("JP (HL)", 0, 1, micro::jp_hlp),
    Opcode::new("LD (a16), A", 2, 4, micro::ld_nnp_a),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("XOR d8", 1, 2, micro::alu_a_n),
    Opcode::new("RST 28H", 0, 4, micro::rst),
    // 0xF0
    Opcode::new("LDH A, (a8)", 1, 3, micro::ldh_a_np),
    Opcode::new("POP AF", 0, 3, micro::pop_rr),
    Opcode::new("LD A, (C)", 0, 2, micro::ld_a_cp),
    Opcode::new("DI", 0, 1, micro::di),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("PUSH AF", 0, 4, micro::push_rr),
    Opcode::new("OR d8", 1, 2, micro::alu_a_n),
    Opcode::new("RST 30H", 0, 4, micro::rst),
    Opcode::new("LD HL, SP+r8", 1, 3, micro::ld_hl_sp_n),
    Opcode::new("LD SP, HL", 0, 2, micro::ld_sp_hl),
    Opcode::new("LD A, (a16)", 2, 4, micro::ld_a_nnp),
    Opcode::new("EI", 0, 1, micro::ei),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("???", 0, 1, micro::undefined),
    Opcode::new("CP d8", 1, 2, micro::alu_a_n),
    Opcode::new("RST 38H", 0, 4, micro::rst),
];

pub static CB_OPCODES: [CbOpcode; 256] = [
    // 0x00
    CbOpcode::new("RLC B", 2, micro::cb_rot_r),
    CbOpcode::new("RLC C", 2, micro::cb_rot_r),
    CbOpcode::new("RLC D", 2, micro::cb_rot_r),
    CbOpcode::new("RLC E", 2, micro::cb_rot_r),
    CbOpcode::new("RLC H", 2, micro::cb_rot_r),
    CbOpcode::new("RLC L", 2, micro::cb_rot_r),
    CbOpcode::new("RLC (HL)", 4, micro::cb_rot_r),
    CbOpcode::new("RLC A", 2, micro::cb_rot_r),
    CbOpcode::new("RRC B", 2, micro::cb_rot_r),
    CbOpcode::new("RRC C", 2, micro::cb_rot_r),
    CbOpcode::new("RRC D", 2, micro::cb_rot_r),
    CbOpcode::new("RRC E", 2, micro::cb_rot_r),
    CbOpcode::new("RRC H", 2, micro::cb_rot_r),
    CbOpcode::new("RRC L", 2, micro::cb_rot_r),
    CbOpcode::new("RRC (HL)", 4, micro::cb_rot_r),
    CbOpcode::new("RRC A", 2, micro::cb_rot_r),
    // 0x10
    CbOpcode::new("RL B", 2, micro::cb_rot_r),
    CbOpcode::new("RL C", 2, micro::cb_rot_r),
    CbOpcode::new("RL D", 2, micro::cb_rot_r),
    CbOpcode::new("RL E", 2, micro::cb_rot_r),
    CbOpcode::new("RL H", 2, micro::cb_rot_r),
    CbOpcode::new("RL L", 2, micro::cb_rot_r),
    CbOpcode::new("RL (HL)", 4, micro::cb_rot_r),
    CbOpcode::new("RL A", 2, micro::cb_rot_r),
    CbOpcode::new("RR B", 2, micro::cb_rot_r),
    CbOpcode::new("RR C", 2, micro::cb_rot_r),
    CbOpcode::new("RR D", 2, micro::cb_rot_r),
    CbOpcode::new("RR E", 2, micro::cb_rot_r),
    CbOpcode::new("RR H", 2, micro::cb_rot_r),
    CbOpcode::new("RR L", 2, micro::cb_rot_r),
    CbOpcode::new("RR (HL)", 4, micro::cb_rot_r),
    CbOpcode::new("RR A", 2, micro::cb_rot_r),
    // 0x20
    CbOpcode::new("SLA B", 2, micro::cb_rot_r),
    CbOpcode::new("SLA C", 2, micro::cb_rot_r),
    CbOpcode::new("SLA D", 2, micro::cb_rot_r),
    CbOpcode::new("SLA E", 2, micro::cb_rot_r),
    CbOpcode::new("SLA H", 2, micro::cb_rot_r),
    CbOpcode::new("SLA L", 2, micro::cb_rot_r),
    CbOpcode::new("SLA (HL)", 4, micro::cb_rot_r),
    CbOpcode::new("SLA A", 2, micro::cb_rot_r),
    CbOpcode::new("SRA B", 2, micro::cb_rot_r),
    CbOpcode::new("SRA C", 2, micro::cb_rot_r),
    CbOpcode::new("SRA D", 2, micro::cb_rot_r),
    CbOpcode::new("SRA E", 2, micro::cb_rot_r),
    CbOpcode::new("SRA H", 2, micro::cb_rot_r),
    CbOpcode::new("SRA L", 2, micro::cb_rot_r),
    CbOpcode::new("SRA (HL)", 4, micro::cb_rot_r),
    CbOpcode::new("SRA A", 2, micro::cb_rot_r),
    // 0x30
    CbOpcode::new("SWAP B", 2, micro::cb_rot_r),
    CbOpcode::new("SWAP C", 2, micro::cb_rot_r),
    CbOpcode::new("SWAP D", 2, micro::cb_rot_r),
    CbOpcode::new("SWAP E", 2, micro::cb_rot_r),
    CbOpcode::new("SWAP H", 2, micro::cb_rot_r),
    CbOpcode::new("SWAP L", 2, micro::cb_rot_r),
    CbOpcode::new("SWAP (HL)", 4, micro::cb_rot_r),
    CbOpcode::new("SWAP A", 2, micro::cb_rot_r),
    CbOpcode::new("SRL B", 2, micro::cb_rot_r),
    CbOpcode::new("SRL C", 2, micro::cb_rot_r),
    CbOpcode::new("SRL D", 2, micro::cb_rot_r),
    CbOpcode::new("SRL E", 2, micro::cb_rot_r),
    CbOpcode::new("SRL H", 2, micro::cb_rot_r),
    CbOpcode::new("SRL L", 2, micro::cb_rot_r),
    CbOpcode::new("SRL (HL)", 4, micro::cb_rot_r),
    CbOpcode::new("SRL A", 2, micro::cb_rot_r),
    // 0x40
    CbOpcode::new("BIT 0, B", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 0, C", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 0, D", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 0, E", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 0, H", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 0, L", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 0, (HL)", 3, micro::cb_bit_r),
    CbOpcode::new("BIT 0, A", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 1, B", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 1, C", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 1, D", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 1, E", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 1, H", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 1, L", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 1, (HL)", 3, micro::cb_bit_r),
    CbOpcode::new("BIT 1, A", 2, micro::cb_bit_r),
    // 0x50
    CbOpcode::new("BIT 2, B", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 2, C", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 2, D", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 2, E", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 2, H", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 2, L", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 2, (HL)", 3, micro::cb_bit_r),
    CbOpcode::new("BIT 2, A", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 3, B", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 3, C", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 3, D", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 3, E", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 3, H", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 3, L", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 3, (HL)", 3, micro::cb_bit_r),
    CbOpcode::new("BIT 3, A", 2, micro::cb_bit_r),
    // 0x60
    CbOpcode::new("BIT 4, B", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 4, C", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 4, D", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 4, E", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 4, H", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 4, L", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 4, (HL)", 3, micro::cb_bit_r),
    CbOpcode::new("BIT 4, A", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 5, B", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 5, C", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 5, D", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 5, E", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 5, H", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 5, L", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 5, (HL)", 3, micro::cb_bit_r),
    CbOpcode::new("BIT 5, A", 2, micro::cb_bit_r),
    // 0x70
    CbOpcode::new("BIT 6, B", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 6, C", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 6, D", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 6, E", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 6, H", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 6, L", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 6, (HL)", 3, micro::cb_bit_r),
    CbOpcode::new("BIT 6, A", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 7, B", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 7, C", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 7, D", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 7, E", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 7, H", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 7, L", 2, micro::cb_bit_r),
    CbOpcode::new("BIT 7, (HL)", 3, micro::cb_bit_r),
    CbOpcode::new("BIT 7, A", 2, micro::cb_bit_r),
    // 0x80
    CbOpcode::new("RES 0, B", 2, micro::cb_res_r),
    CbOpcode::new("RES 0, C", 2, micro::cb_res_r),
    CbOpcode::new("RES 0, D", 2, micro::cb_res_r),
    CbOpcode::new("RES 0, E", 2, micro::cb_res_r),
    CbOpcode::new("RES 0, H", 2, micro::cb_res_r),
    CbOpcode::new("RES 0, L", 2, micro::cb_res_r),
    CbOpcode::new("RES 0, (HL)", 4, micro::cb_res_r),
    CbOpcode::new("RES 0, A", 2, micro::cb_res_r),
    CbOpcode::new("RES 1, B", 2, micro::cb_res_r),
    CbOpcode::new("RES 1, C", 2, micro::cb_res_r),
    CbOpcode::new("RES 1, D", 2, micro::cb_res_r),
    CbOpcode::new("RES 1, E", 2, micro::cb_res_r),
    CbOpcode::new("RES 1, H", 2, micro::cb_res_r),
    CbOpcode::new("RES 1, L", 2, micro::cb_res_r),
    CbOpcode::new("RES 1, (HL)", 4, micro::cb_res_r),
    CbOpcode::new("RES 1, A", 2, micro::cb_res_r),
    // 0x90
    CbOpcode::new("RES 2, B", 2, micro::cb_res_r),
    CbOpcode::new("RES 2, C", 2, micro::cb_res_r),
    CbOpcode::new("RES 2, D", 2, micro::cb_res_r),
    CbOpcode::new("RES 2, E", 2, micro::cb_res_r),
    CbOpcode::new("RES 2, H", 2, micro::cb_res_r),
    CbOpcode::new("RES 2, L", 2, micro::cb_res_r),
    CbOpcode::new("RES 2, (HL)", 4, micro::cb_res_r),
    CbOpcode::new("RES 2, A", 2, micro::cb_res_r),
    CbOpcode::new("RES 3, B", 2, micro::cb_res_r),
    CbOpcode::new("RES 3, C", 2, micro::cb_res_r),
    CbOpcode::new("RES 3, D", 2, micro::cb_res_r),
    CbOpcode::new("RES 3, E", 2, micro::cb_res_r),
    CbOpcode::new("RES 3, H", 2, micro::cb_res_r),
    CbOpcode::new("RES 3, L", 2, micro::cb_res_r),
    CbOpcode::new("RES 3, (HL)", 4, micro::cb_res_r),
    CbOpcode::new("RES 3, A", 2, micro::cb_res_r),
    // 0xA0
    CbOpcode::new("RES 4, B", 2, micro::cb_res_r),
    CbOpcode::new("RES 4, C", 2, micro::cb_res_r),
    CbOpcode::new("RES 4, D", 2, micro::cb_res_r),
    CbOpcode::new("RES 4, E", 2, micro::cb_res_r),
    CbOpcode::new("RES 4, H", 2, micro::cb_res_r),
    CbOpcode::new("RES 4, L", 2, micro::cb_res_r),
    CbOpcode::new("RES 4, (HL)", 4, micro::cb_res_r),
    CbOpcode::new("RES 4, A", 2, micro::cb_res_r),
    CbOpcode::new("RES 5, B", 2, micro::cb_res_r),
    CbOpcode::new("RES 5, C", 2, micro::cb_res_r),
    CbOpcode::new("RES 5, D", 2, micro::cb_res_r),
    CbOpcode::new("RES 5, E", 2, micro::cb_res_r),
    CbOpcode::new("RES 5, H", 2, micro::cb_res_r),
    CbOpcode::new("RES 5, L", 2, micro::cb_res_r),
    CbOpcode::new("RES 5, (HL)", 4, micro::cb_res_r),
    CbOpcode::new("RES 5, A", 2, micro::cb_res_r),
    // 0xB0
    CbOpcode::new("RES 6, B", 2, micro::cb_res_r),
    CbOpcode::new("RES 6, C", 2, micro::cb_res_r),
    CbOpcode::new("RES 6, D", 2, micro::cb_res_r),
    CbOpcode::new("RES 6, E", 2, micro::cb_res_r),
    CbOpcode::new("RES 6, H", 2, micro::cb_res_r),
    CbOpcode::new("RES 6, L", 2, micro::cb_res_r),
    CbOpcode::new("RES 6, (HL)", 4, micro::cb_res_r),
    CbOpcode::new("RES 6, A", 2, micro::cb_res_r),
    CbOpcode::new("RES 7, B", 2, micro::cb_res_r),
    CbOpcode::new("RES 7, C", 2, micro::cb_res_r),
    CbOpcode::new("RES 7, D", 2, micro::cb_res_r),
    CbOpcode::new("RES 7, E", 2, micro::cb_res_r),
    CbOpcode::new("RES 7, H", 2, micro::cb_res_r),
    CbOpcode::new("RES 7, L", 2, micro::cb_res_r),
    CbOpcode::new("RES 7, (HL)", 4, micro::cb_res_r),
    CbOpcode::new("RES 7, A", 2, micro::cb_res_r),
    // 0xC0
    CbOpcode::new("SET 0, B", 2, micro::cb_set_r),
    CbOpcode::new("SET 0, C", 2, micro::cb_set_r),
    CbOpcode::new("SET 0, D", 2, micro::cb_set_r),
    CbOpcode::new("SET 0, E", 2, micro::cb_set_r),
    CbOpcode::new("SET 0, H", 2, micro::cb_set_r),
    CbOpcode::new("SET 0, L", 2, micro::cb_set_r),
    CbOpcode::new("SET 0, (HL)", 4, micro::cb_set_r),
    CbOpcode::new("SET 0, A", 2, micro::cb_set_r),
    CbOpcode::new("SET 1, B", 2, micro::cb_set_r),
    CbOpcode::new("SET 1, C", 2, micro::cb_set_r),
    CbOpcode::new("SET 1, D", 2, micro::cb_set_r),
    CbOpcode::new("SET 1, E", 2, micro::cb_set_r),
    CbOpcode::new("SET 1, H", 2, micro::cb_set_r),
    CbOpcode::new("SET 1, L", 2, micro::cb_set_r),
    CbOpcode::new("SET 1, (HL)", 4, micro::cb_set_r),
    CbOpcode::new("SET 1, A", 2, micro::cb_set_r),
    // 0xD0
    CbOpcode::new("SET 2, B", 2, micro::cb_set_r),
    CbOpcode::new("SET 2, C", 2, micro::cb_set_r),
    CbOpcode::new("SET 2, D", 2, micro::cb_set_r),
    CbOpcode::new("SET 2, E", 2, micro::cb_set_r),
    CbOpcode::new("SET 2, H", 2, micro::cb_set_r),
    CbOpcode::new("SET 2, L", 2, micro::cb_set_r),
    CbOpcode::new("SET 2, (HL)", 4, micro::cb_set_r),
    CbOpcode::new("SET 2, A", 2, micro::cb_set_r),
    CbOpcode::new("SET 3, B", 2, micro::cb_set_r),
    CbOpcode::new("SET 3, C", 2, micro::cb_set_r),
    CbOpcode::new("SET 3, D", 2, micro::cb_set_r),
    CbOpcode::new("SET 3, E", 2, micro::cb_set_r),
    CbOpcode::new("SET 3, H", 2, micro::cb_set_r),
    CbOpcode::new("SET 3, L", 2, micro::cb_set_r),
    CbOpcode::new("SET 3, (HL)", 4, micro::cb_set_r),
    CbOpcode::new("SET 3, A", 2, micro::cb_set_r),
    // 0xE0
    CbOpcode::new("SET 4, B", 2, micro::cb_set_r),
    CbOpcode::new("SET 4, C", 2, micro::cb_set_r),
    CbOpcode::new("SET 4, D", 2, micro::cb_set_r),
    CbOpcode::new("SET 4, E", 2, micro::cb_set_r),
    CbOpcode::new("SET 4, H", 2, micro::cb_set_r),
    CbOpcode::new("SET 4, L", 2, micro::cb_set_r),
    CbOpcode::new("SET 4, (HL)", 4, micro::cb_set_r),
    CbOpcode::new("SET 4, A", 2, micro::cb_set_r),
    CbOpcode::new("SET 5, B", 2, micro::cb_set_r),
    CbOpcode::new("SET 5, C", 2, micro::cb_set_r),
    CbOpcode::new("SET 5, D", 2, micro::cb_set_r),
    CbOpcode::new("SET 5, E", 2, micro::cb_set_r),
    CbOpcode::new("SET 5, H", 2, micro::cb_set_r),
    CbOpcode::new("SET 5, L", 2, micro::cb_set_r),
    CbOpcode::new("SET 5, (HL)", 4, micro::cb_set_r),
    CbOpcode::new("SET 5, A", 2, micro::cb_set_r),
    // 0xF0
    CbOpcode::new("SET 6, B", 2, micro::cb_set_r),
    CbOpcode::new("SET 6, C", 2, micro::cb_set_r),
    CbOpcode::new("SET 6, D", 2, micro::cb_set_r),
    CbOpcode::new("SET 6, E", 2, micro::cb_set_r),
    CbOpcode::new("SET 6, H", 2, micro::cb_set_r),
    CbOpcode::new("SET 6, L", 2, micro::cb_set_r),
    CbOpcode::new("SET 6, (HL)", 4, micro::cb_set_r),
    CbOpcode::new("SET 6, A", 2, micro::cb_set_r),
    CbOpcode::new("SET 7, B", 2, micro::cb_set_r),
    CbOpcode::new("SET 7, C", 2, micro::cb_set_r),
    CbOpcode::new("SET 7, D", 2, micro::cb_set_r),
    CbOpcode::new("SET 7, E", 2, micro::cb_set_r),
    CbOpcode::new("SET 7, H", 2, micro::cb_set_r),
    CbOpcode::new("SET 7, L", 2, micro::cb_set_r),
    CbOpcode::new("SET 7, (HL)", 4, micro::cb_set_r),
    CbOpcode::new("SET 7, A", 2, micro::cb_set_r),
];
