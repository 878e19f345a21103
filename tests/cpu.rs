mod common;

use common::machine_with_program;
use dmg_core::registers::{FLAG_C, FLAG_H, FLAG_N, FLAG_Z};

#[test]
fn nop_takes_one_cycle() {
    let mut machine = machine_with_program(&[0x00]);
    assert_eq!(machine.step_instruction(), 1);
    assert_eq!(machine.cpu.regs.pc, 0x0101);
}

#[test]
fn ld_a_d8_takes_two_cycles() {
    let mut machine = machine_with_program(&[0x3E, 0x42]);
    assert_eq!(machine.step_instruction(), 2);
    assert_eq!(machine.cpu.regs.a, 0x42);
    assert_eq!(machine.cpu.regs.pc, 0x0102);
}

#[test]
fn ld_rr_d16_loads_little_endian() {
    let mut machine = machine_with_program(&[0x01, 0x34, 0x12, 0x31, 0xFE, 0xCA]);
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.cpu.regs.bc(), 0x1234);
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.cpu.regs.sp, 0xCAFE);
}

#[test]
fn register_moves_and_hl_forms() {
    // LD B, A; LD (HL), B; LD C, (HL)
    let mut machine = machine_with_program(&[0x47, 0x70, 0x4E]);
    machine.cpu.regs.a = 0x5A;
    machine.cpu.regs.set_hl(0xC000);
    assert_eq!(machine.step_instruction(), 1);
    assert_eq!(machine.cpu.regs.b, 0x5A);
    assert_eq!(machine.step_instruction(), 2);
    assert_eq!(machine.bus.read(0xC000), 0x5A);
    assert_eq!(machine.step_instruction(), 2);
    assert_eq!(machine.cpu.regs.c, 0x5A);
}

#[test]
fn ld_hli_and_hld_move_the_pointer() {
    // LD (HL+), A; LD A, (HL-)
    let mut machine = machine_with_program(&[0x22, 0x3A]);
    machine.cpu.regs.a = 0x77;
    machine.cpu.regs.set_hl(0xC010);
    machine.step_instruction();
    assert_eq!(machine.bus.read(0xC010), 0x77);
    assert_eq!(machine.cpu.regs.hl(), 0xC011);
    machine.bus.write(0xC011, 0x99);
    machine.step_instruction();
    assert_eq!(machine.cpu.regs.a, 0x99);
    assert_eq!(machine.cpu.regs.hl(), 0xC010);
}

#[test]
fn jr_timing_depends_on_condition() {
    // JR NZ, +2 with Z clear: taken, 3 cycles.
    let mut machine = machine_with_program(&[0x20, 0x02]);
    machine.cpu.regs.f = 0;
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.cpu.regs.pc, 0x0104);

    // Same encoding with Z set: not taken, 2 cycles, falls through.
    let mut machine = machine_with_program(&[0x20, 0x02]);
    machine.cpu.regs.f = FLAG_Z;
    assert_eq!(machine.step_instruction(), 2);
    assert_eq!(machine.cpu.regs.pc, 0x0102);
}

#[test]
fn jr_backwards_wraps_through_the_operand() {
    // JR -2 loops onto the JR itself.
    let mut machine = machine_with_program(&[0x18, 0xFE]);
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.cpu.regs.pc, 0x0100);
}

#[test]
fn jp_unconditional_takes_four_cycles() {
    let mut machine = machine_with_program(&[0xC3, 0x00, 0xC0]);
    assert_eq!(machine.step_instruction(), 4);
    assert_eq!(machine.cpu.regs.pc, 0xC000);
}

#[test]
fn jp_conditional_timing() {
    let mut machine = machine_with_program(&[0xD2, 0x00, 0xC0]); // JP NC, a16
    machine.cpu.regs.f = 0;
    assert_eq!(machine.step_instruction(), 4);
    assert_eq!(machine.cpu.regs.pc, 0xC000);

    let mut machine = machine_with_program(&[0xD2, 0x00, 0xC0]);
    machine.cpu.regs.f = FLAG_C;
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.cpu.regs.pc, 0x0103);
}

#[test]
fn call_pushes_return_address_big_endian() {
    let mut machine = machine_with_program(&[0xCD, 0x00, 0xC0]);
    machine.cpu.regs.sp = 0xFFFE;
    assert_eq!(machine.step_instruction(), 6);
    assert_eq!(machine.cpu.regs.pc, 0xC000);
    assert_eq!(machine.cpu.regs.sp, 0xFFFC);
    // Return address 0x0103: high byte at the higher address.
    assert_eq!(machine.bus.read(0xFFFD), 0x01);
    assert_eq!(machine.bus.read(0xFFFC), 0x03);
}

#[test]
fn call_and_ret_round_trip() {
    let mut machine = machine_with_program(&[0xCD, 0x00, 0xC0]);
    machine.bus.write(0xC000, 0xC9); // RET
    assert_eq!(machine.step_instruction(), 6);
    assert_eq!(machine.step_instruction(), 4);
    assert_eq!(machine.cpu.regs.pc, 0x0103);
    assert_eq!(machine.cpu.regs.sp, 0xFFFE);
}

#[test]
fn conditional_call_and_ret_timing() {
    let mut machine = machine_with_program(&[0xC4, 0x00, 0xC0]); // CALL NZ
    machine.cpu.regs.f = FLAG_Z;
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.cpu.regs.pc, 0x0103);

    let mut machine = machine_with_program(&[0xC8]); // RET Z
    machine.cpu.regs.f = 0;
    assert_eq!(machine.step_instruction(), 2);
    assert_eq!(machine.cpu.regs.pc, 0x0101);

    let mut machine = machine_with_program(&[0xC8]);
    machine.cpu.regs.f = FLAG_Z;
    machine.cpu.regs.sp = 0xFFFC;
    machine.bus.write(0xFFFC, 0x00);
    machine.bus.write(0xFFFD, 0xC0);
    assert_eq!(machine.step_instruction(), 5);
    assert_eq!(machine.cpu.regs.pc, 0xC000);
}

#[test]
fn push_pop_round_trip_masks_f_low_nibble() {
    // PUSH BC; POP AF
    let mut machine = machine_with_program(&[0xC5, 0xF1]);
    machine.cpu.regs.set_bc(0x12FF);
    assert_eq!(machine.step_instruction(), 4);
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.cpu.regs.a, 0x12);
    assert_eq!(machine.cpu.regs.f, 0xF0);
    assert_eq!(machine.cpu.regs.sp, 0xFFFE);
}

#[test]
fn rst_jumps_to_fixed_vector() {
    let mut machine = machine_with_program(&[0xEF]); // RST 28H
    assert_eq!(machine.step_instruction(), 4);
    assert_eq!(machine.cpu.regs.pc, 0x0028);
    assert_eq!(machine.bus.read(0xFFFD), 0x01);
    assert_eq!(machine.bus.read(0xFFFC), 0x01);
}

#[test]
fn jp_hl_is_one_cycle() {
    let mut machine = machine_with_program(&[0xE9]);
    machine.cpu.regs.set_hl(0xBEEF);
    assert_eq!(machine.step_instruction(), 1);
    assert_eq!(machine.cpu.regs.pc, 0xBEEF);
}

#[test]
fn ldh_addresses_high_page() {
    // LDH (a8), A; LDH A, (a8); LD (C), A
    let mut machine = machine_with_program(&[0xE0, 0x80, 0xF0, 0x81, 0xE2]);
    machine.cpu.regs.a = 0x33;
    machine.bus.write(0xFF81, 0x44);
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.bus.read(0xFF80), 0x33);
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.cpu.regs.a, 0x44);
    machine.cpu.regs.c = 0x82;
    assert_eq!(machine.step_instruction(), 2);
    assert_eq!(machine.bus.read(0xFF82), 0x44);
}

#[test]
fn ld_a16_sp_stores_both_bytes() {
    let mut machine = machine_with_program(&[0x08, 0x00, 0xC1]);
    machine.cpu.regs.sp = 0xBEEF;
    assert_eq!(machine.step_instruction(), 5);
    assert_eq!(machine.bus.read(0xC100), 0xEF);
    assert_eq!(machine.bus.read(0xC101), 0xBE);
}

#[test]
fn inc_dec_hl_read_modify_write() {
    // INC (HL); DEC (HL); DEC (HL)
    let mut machine = machine_with_program(&[0x34, 0x35, 0x35]);
    machine.cpu.regs.set_hl(0xC000);
    machine.bus.write(0xC000, 0x0F);
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.bus.read(0xC000), 0x10);
    assert_eq!(machine.cpu.regs.f & FLAG_H, FLAG_H);
    machine.step_instruction();
    machine.step_instruction();
    assert_eq!(machine.bus.read(0xC000), 0x0E);
    assert_eq!(machine.cpu.regs.f & FLAG_N, FLAG_N);
}

#[test]
fn halt_bug_executes_next_opcode_twice() {
    // IME off with an enabled interrupt already pending: the byte after
    // HALT is fetched without advancing PC, so INC A runs twice.
    let mut machine = machine_with_program(&[0x76, 0x3C, 0x00]);
    machine.bus.irq.ie_reg = 0x04;
    machine.bus.irq.request(0x04);
    machine.cpu.regs.a = 0;
    assert_eq!(machine.step_instruction(), 1); // HALT
    machine.step_instruction(); // INC A, PC stuck
    machine.step_instruction(); // INC A again
    assert_eq!(machine.cpu.regs.a, 2);
    assert_eq!(machine.cpu.regs.pc, 0x0102);
}

#[test]
fn halt_without_pending_waits_for_a_request() {
    let mut machine = machine_with_program(&[0x76, 0x3C]);
    machine.bus.irq.ie_reg = 0x04;
    machine.cpu.regs.a = 0;
    assert_eq!(machine.step_instruction(), 1);
    assert!(machine.cpu.halted);
    // No pending interrupt: the CPU makes no progress.
    assert_eq!(machine.step_instruction(), 0);
    assert_eq!(machine.step_instruction(), 0);
    // A request wakes it; with IME off execution just continues.
    machine.bus.irq.request(0x04);
    assert_eq!(machine.step_instruction(), 1);
    assert_eq!(machine.cpu.regs.a, 1);
    assert_eq!(machine.bus.irq.if_reg & 0x04, 0x04);
}

#[test]
fn stop_freezes_the_core() {
    let mut machine = machine_with_program(&[0x10, 0x00]);
    assert_eq!(machine.step_instruction(), 1);
    assert!(machine.cpu.stopped);
    assert_eq!(machine.step_instruction(), 0);
    assert_eq!(machine.cpu.regs.pc, 0x0101);
}

#[test]
fn undefined_opcode_burns_one_cycle() {
    let mut machine = machine_with_program(&[0xD3, 0x00]);
    assert_eq!(machine.step_instruction(), 1);
    assert_eq!(machine.cpu.regs.pc, 0x0101);
    // Execution continues normally afterwards.
    assert_eq!(machine.step_instruction(), 1);
}

#[test]
fn cb_bit_checks_and_timing() {
    // BIT 7, H
    let mut machine = machine_with_program(&[0xCB, 0x7C]);
    machine.cpu.regs.h = 0x80;
    machine.cpu.regs.f = FLAG_C;
    assert_eq!(machine.step_instruction(), 2);
    assert_eq!(machine.cpu.regs.f, FLAG_H | FLAG_C);

    let mut machine = machine_with_program(&[0xCB, 0x7C]);
    machine.cpu.regs.h = 0x00;
    assert_eq!(machine.step_instruction(), 2);
    assert_eq!(machine.cpu.regs.f & FLAG_Z, FLAG_Z);

    // BIT through (HL) costs an extra read cycle.
    let mut machine = machine_with_program(&[0xCB, 0x46]);
    machine.cpu.regs.set_hl(0xC000);
    machine.bus.write(0xC000, 0x01);
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.cpu.regs.f & FLAG_Z, 0);
}

#[test]
fn cb_res_set_on_memory() {
    // SET 3, (HL); RES 3, (HL)
    let mut machine = machine_with_program(&[0xCB, 0xDE, 0xCB, 0x9E]);
    machine.cpu.regs.set_hl(0xC000);
    assert_eq!(machine.step_instruction(), 4);
    assert_eq!(machine.bus.read(0xC000), 0x08);
    assert_eq!(machine.step_instruction(), 4);
    assert_eq!(machine.bus.read(0xC000), 0x00);
}

#[test]
fn ld_sp_hl_and_add_sp() {
    // LD SP, HL; ADD SP, -2
    let mut machine = machine_with_program(&[0xF9, 0xE8, 0xFE]);
    machine.cpu.regs.set_hl(0xD000);
    assert_eq!(machine.step_instruction(), 2);
    assert_eq!(machine.cpu.regs.sp, 0xD000);
    assert_eq!(machine.step_instruction(), 4);
    assert_eq!(machine.cpu.regs.sp, 0xCFFE);
}

#[test]
fn ld_hl_sp_plus_offset_sets_carry_from_low_byte() {
    let mut machine = machine_with_program(&[0xF8, 0x02]); // LD HL, SP+2
    machine.cpu.regs.sp = 0x00FF;
    assert_eq!(machine.step_instruction(), 3);
    assert_eq!(machine.cpu.regs.hl(), 0x0101);
    assert_eq!(machine.cpu.regs.f & FLAG_C, FLAG_C);
    assert_eq!(machine.cpu.regs.f & FLAG_Z, 0);
}

#[test]
fn absolute_accumulator_loads() {
    // LD (a16), A; LD A, (a16)
    let mut machine = machine_with_program(&[0xEA, 0x00, 0xC0, 0xFA, 0x01, 0xC0]);
    machine.cpu.regs.a = 0x12;
    machine.bus.write(0xC001, 0x34);
    assert_eq!(machine.step_instruction(), 4);
    assert_eq!(machine.bus.read(0xC000), 0x12);
    assert_eq!(machine.step_instruction(), 4);
    assert_eq!(machine.cpu.regs.a, 0x34);
}
