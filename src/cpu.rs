//! Per-M-cycle CPU execution engine.
//!
//! One [`Cpu::step`] call advances exactly one machine cycle. At an
//! instruction boundary (`cycles_left == 0`) the engine polls the interrupt
//! controller, handles halt/stop, and fetches; otherwise it resumes the
//! in-flight instruction's microcode at its next suspension point. The
//! microcode for an opcode is an ordinary function indexed by a micro-step
//! counter plus a small continuation struct for locals that survive across
//! suspension points (an address being assembled, a temporary byte).

use crate::bus::Bus;
use crate::opcodes::{CB_OPCODES, OPCODES};
use crate::registers::{FLAG_C, FLAG_H, FLAG_N, FLAG_Z, Registers};

/// Microcode routine: called once per machine cycle of its instruction with
/// the zero-based index of the cycle being executed.
pub(crate) type MicroFn = fn(&mut Cpu, &mut Bus, u8);

/// Machine cycles consumed by the interrupt-acceptance sequence.
const SERVICE_CYCLES: u8 = 5;

/// Resumable state of a partially-executed instruction.
///
/// Holds the routine, how far into it we are, and the locals that must
/// survive across suspension points.
struct Continuation {
    micro: MicroFn,
    /// Opcode byte that launched this instruction; parametrizes shared
    /// routine bodies (register selectors, bit indices, branch conditions).
    op: u8,
    step: u8,
    /// Operand address assembled across fetch cycles.
    addr: u16,
    /// Temporary byte carried between cycles.
    temp: u8,
}

impl Continuation {
    fn new(micro: MicroFn, op: u8) -> Self {
        Self {
            micro,
            op,
            step: 0,
            addr: 0,
            temp: 0,
        }
    }
}

pub struct Cpu {
    pub regs: Registers,
    /// Machine cycles remaining in the current instruction.
    pub cycles_left: u8,
    /// Total machine cycles consumed since reset.
    pub cycles: u64,
    pub halted: bool,
    pub stopped: bool,
    /// HALT executed with IME off and an interrupt already pending: the
    /// next fetch reads its byte without advancing PC.
    pub halt_bug: bool,
    cont: Continuation,
}

impl Cpu {
    /// CPU in the post-boot state, idle at an instruction boundary.
    pub fn new() -> Self {
        Self {
            regs: Registers::new_post_boot(),
            cycles_left: 0,
            cycles: 0,
            halted: false,
            stopped: false,
            halt_bug: false,
            cont: Continuation::new(micro::nop, 0x00),
        }
    }

    /// Advance one machine cycle.
    pub fn step(&mut self, bus: &mut Bus) {
        if self.cycles_left == 0 {
            if self.stopped {
                return;
            }
            let pending = bus.irq.pending();
            if bus.irq.ime {
                if self.halted {
                    if pending == 0 {
                        return;
                    }
                    self.halted = false;
                }
                if pending != 0 {
                    // Interrupt acceptance replaces the fetch entirely.
                    self.cycles_left = SERVICE_CYCLES;
                    bus.irq.arm(pending);
                    self.cont = Continuation::new(micro::service_interrupt, 0x00);
                } else {
                    self.fetch(bus);
                    self.commit_ei_delay(bus);
                }
            } else {
                if self.halted {
                    if pending == 0 {
                        return;
                    }
                    self.halted = false;
                }
                self.fetch(bus);
                self.commit_ei_delay(bus);
            }
        }

        self.cycles_left -= 1;
        self.cycles += 1;
        let micro = self.cont.micro;
        let step = self.cont.step;
        self.cont.step += 1;
        micro(self, bus, step);
    }

    /// EI takes effect one fetch late. The one-shot commits on any normal
    /// fetch, including with IME already on; a stale delay must never
    /// survive to re-enable IME after a later DI.
    fn commit_ei_delay(&mut self, bus: &mut Bus) {
        if bus.irq.delay {
            bus.irq.delay = false;
            bus.irq.ime = true;
        }
    }

    /// Read the opcode at PC and install its continuation. The CB prefix
    /// consumes its second fetch here too; the CB table's cycle counts
    /// already include it.
    fn fetch(&mut self, bus: &mut Bus) {
        #[cfg(feature = "cpu-trace")]
        let fetch_pc = self.regs.pc;

        let op = bus.read(self.regs.pc);
        if self.halt_bug {
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }

        if op == 0xCB {
            let sub = bus.read(self.regs.pc);
            self.regs.pc = self.regs.pc.wrapping_add(1);
            let entry = &CB_OPCODES[sub as usize];
            #[cfg(feature = "cpu-trace")]
            log::trace!(target: "cpu", "{fetch_pc:04X}: CB {sub:02X}  {}", entry.mnemonic);
            self.cycles_left = entry.cycles;
            self.cont = Continuation::new(entry.exec, sub);
        } else {
            let entry = &OPCODES[op as usize];
            #[cfg(feature = "cpu-trace")]
            log::trace!(target: "cpu", "{fetch_pc:04X}: {op:02X}  {}", entry.mnemonic);
            self.cycles_left = entry.cycles;
            self.cont = Continuation::new(entry.exec, op);
        }
    }

    // Register/condition selectors shared by the microcode.

    /// 8-bit register by decode index (B C D E H L _ A). Index 6 is the
    /// (HL) slot; the microcode handles that case itself before calling.
    fn reg8(&self, idx: u8) -> u8 {
        match idx {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            7 => self.regs.a,
            _ => unreachable!(),
        }
    }

    fn set_reg8(&mut self, idx: u8, val: u8) {
        match idx {
            0 => self.regs.b = val,
            1 => self.regs.c = val,
            2 => self.regs.d = val,
            3 => self.regs.e = val,
            4 => self.regs.h = val,
            5 => self.regs.l = val,
            7 => self.regs.a = val,
            _ => unreachable!(),
        }
    }

    /// 16-bit pair by decode index (BC DE HL SP).
    fn pair(&self, idx: u8) -> u16 {
        match idx & 3 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    fn set_pair(&mut self, idx: u8, val: u16) {
        match idx & 3 {
            0 => self.regs.set_bc(val),
            1 => self.regs.set_de(val),
            2 => self.regs.set_hl(val),
            _ => self.regs.sp = val,
        }
    }

    /// Branch condition by decode index (NZ Z NC C).
    fn cond(&self, idx: u8) -> bool {
        match idx & 3 {
            0 => self.regs.f & FLAG_Z == 0,
            1 => self.regs.f & FLAG_Z != 0,
            2 => self.regs.f & FLAG_C == 0,
            _ => self.regs.f & FLAG_C != 0,
        }
    }

    // ALU helpers.
    //
    // Add/sub flags come from XORing the operands against the raw result:
    // in `info = sum ^ (a ^ x)`, bit 4 is the carry out of bit 3 and bit 8
    // the carry out of bit 7, for both directions.

    fn add_a(&mut self, x: u8, carry_in: u8) {
        let a = self.regs.a as u32;
        let x = x as u32;
        let sum = a + x + carry_in as u32;
        let info = sum ^ (a ^ x);
        self.regs.a = sum as u8;
        self.regs.f = if self.regs.a == 0 { FLAG_Z } else { 0 }
            | ((info & 0x100) >> 4) as u8
            | ((info & 0x10) << 1) as u8;
    }

    fn sub_a(&mut self, x: u8, carry_in: u8) {
        let a = self.regs.a as u32;
        let x = x as u32;
        let res = a.wrapping_sub(x + carry_in as u32);
        let info = res ^ (a ^ x);
        self.regs.a = res as u8;
        self.regs.f = if self.regs.a == 0 { FLAG_Z } else { 0 }
            | ((info & 0x100) >> 4) as u8
            | ((info & 0x10) << 1) as u8
            | FLAG_N;
    }

    fn cp_a(&mut self, x: u8) {
        let a = self.regs.a;
        self.regs.f = FLAG_N
            | if a == x { FLAG_Z } else { 0 }
            | if x > a { FLAG_C } else { 0 }
            | if (x & 0x0F) > (a & 0x0F) { FLAG_H } else { 0 };
    }

    /// Shared body for the eight accumulator operations, selected by the
    /// opcode's bits 3-5 (ADD ADC SUB SBC AND XOR OR CP).
    fn alu_a(&mut self, kind: u8, x: u8) {
        let carry = (self.regs.f & FLAG_C) >> 4;
        match kind & 7 {
            0 => self.add_a(x, 0),
            1 => self.add_a(x, carry),
            2 => self.sub_a(x, 0),
            3 => self.sub_a(x, carry),
            4 => {
                self.regs.a &= x;
                self.regs.f = if self.regs.a == 0 { FLAG_Z } else { 0 } | FLAG_H;
            }
            5 => {
                self.regs.a ^= x;
                self.regs.f = if self.regs.a == 0 { FLAG_Z } else { 0 };
            }
            6 => {
                self.regs.a |= x;
                self.regs.f = if self.regs.a == 0 { FLAG_Z } else { 0 };
            }
            _ => self.cp_a(x),
        }
    }

    /// 16-bit add into HL; Z survives from before the operation.
    fn add_hl(&mut self, x: u16) {
        let hl = self.regs.hl() as u32;
        let x = x as u32;
        let sum = hl + x;
        let info = sum ^ (hl ^ x);
        self.regs.set_hl(sum as u16);
        self.regs.f =
            (self.regs.f & FLAG_Z) | ((info & 0x10000) >> 12) as u8 | ((info & 0x1000) >> 7) as u8;
    }

    /// SP plus signed immediate (ADD SP,r8 / LD HL,SP+r8). Carries come
    /// from the low byte of the addition; Z and N end up clear.
    fn add_signed(&mut self, base: u16, n: u8) -> u16 {
        let n = n as i8 as i32;
        let base = base as i32;
        let sum = base.wrapping_add(n);
        let info = (sum ^ (base ^ n)) as u32;
        self.regs.f = ((info & 0x100) >> 4) as u8 | ((info & 0x10) << 1) as u8;
        sum as u16
    }

    fn inc8(&mut self, x: u8) -> u8 {
        let res = x.wrapping_add(1);
        self.regs.f = (self.regs.f & FLAG_C)
            | if res == 0 { FLAG_Z } else { 0 }
            | if (x & 0x0F) + 1 > 0x0F { FLAG_H } else { 0 };
        res
    }

    fn dec8(&mut self, x: u8) -> u8 {
        let res = x.wrapping_sub(1);
        self.regs.f = (self.regs.f & FLAG_C)
            | FLAG_N
            | if res == 0 { FLAG_Z } else { 0 }
            | if x & 0x0F == 0 { FLAG_H } else { 0 };
        res
    }

    /// BCD correction of A after an add or subtract.
    fn daa(&mut self) {
        let mut s = self.regs.a as i32;
        if self.regs.f & FLAG_N != 0 {
            if self.regs.f & FLAG_H != 0 {
                s = (s - 0x06) & 0xFF;
            }
            if self.regs.f & FLAG_C != 0 {
                s -= 0x60;
            }
        } else {
            if self.regs.f & FLAG_H != 0 || (s & 0x0F) > 0x09 {
                s += 0x06;
            }
            if self.regs.f & FLAG_C != 0 || s > 0x9F {
                s += 0x60;
            }
        }
        self.regs.f &= !(FLAG_Z | FLAG_H);
        if s & 0x100 != 0 {
            self.regs.f |= FLAG_C;
        }
        self.regs.a = s as u8;
        if self.regs.a == 0 {
            self.regs.f |= FLAG_Z;
        }
    }

    /// CB rotate/shift/swap bodies. These set Z, unlike the A-only forms.
    fn rot8(&mut self, kind: u8, x: u8) -> u8 {
        let carry_in = (self.regs.f & FLAG_C) >> 4;
        let (res, carry) = match kind & 7 {
            0 => (x.rotate_left(1), x >> 7),
            1 => (x.rotate_right(1), x & 1),
            2 => ((x << 1) | carry_in, x >> 7),
            3 => ((x >> 1) | (carry_in << 7), x & 1),
            4 => (x << 1, x >> 7),
            5 => ((x & 0x80) | (x >> 1), x & 1),
            6 => (x.rotate_left(4), 0),
            _ => (x >> 1, x & 1),
        };
        self.regs.f = if res == 0 { FLAG_Z } else { 0 } | (carry << 4);
        res
    }

    fn bit8(&mut self, bit: u8, x: u8) {
        self.regs.f = (self.regs.f & FLAG_C)
            | FLAG_H
            | if x & (1 << bit) == 0 { FLAG_Z } else { 0 };
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

/// Microcode routines referenced by the decode tables.
///
/// Each routine runs once per machine cycle of its instruction with the
/// zero-based index of that cycle; the table's declared count decides how
/// many times it runs, and conditional instructions extend `cycles_left`
/// mid-flight when taken. Cycle 0 overlaps the opcode fetch, so one-cycle
/// instructions do all their work there and multi-cycle ones idle until
/// their memory cycles come up.
pub(crate) mod micro {
    use super::*;

    #[inline]
    fn fetch_operand(cpu: &mut Cpu, bus: &mut Bus) -> u8 {
        let val = bus.read(cpu.regs.pc);
        cpu.regs.pc = cpu.regs.pc.wrapping_add(1);
        val
    }

    #[inline]
    fn push_byte(cpu: &mut Cpu, bus: &mut Bus, val: u8) {
        cpu.regs.sp = cpu.regs.sp.wrapping_sub(1);
        bus.write(cpu.regs.sp, val);
    }

    #[inline]
    fn pop_byte(cpu: &mut Cpu, bus: &mut Bus) -> u8 {
        let val = bus.read(cpu.regs.sp);
        cpu.regs.sp = cpu.regs.sp.wrapping_add(1);
        val
    }

    pub(crate) fn nop(_cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {}

    /// Hole in the opcode map: report it and burn the cycle.
    pub(crate) fn undefined(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        log::warn!(
            target: "cpu",
            "undefined opcode {:02X} at {:04X}",
            cpu.cont.op,
            cpu.regs.pc.wrapping_sub(1)
        );
    }

    // LD rr, d16
    pub(crate) fn ld_rr_nn(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let sel = cpu.cont.op >> 4;
        match step {
            1 => {
                let lo = fetch_operand(cpu, bus) as u16;
                cpu.set_pair(sel, lo);
            }
            2 => {
                let hi = fetch_operand(cpu, bus) as u16;
                let lo = cpu.pair(sel) & 0x00FF;
                cpu.set_pair(sel, (hi << 8) | lo);
            }
            _ => {}
        }
    }

    // LD (BC)/(DE)/(HL+)/(HL-), A
    pub(crate) fn ld_rrp_a(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        if step != 1 {
            return;
        }
        let a = cpu.regs.a;
        match cpu.cont.op >> 4 {
            0 => bus.write(cpu.regs.bc(), a),
            1 => bus.write(cpu.regs.de(), a),
            2 => {
                let hl = cpu.regs.hl();
                bus.write(hl, a);
                cpu.regs.set_hl(hl.wrapping_add(1));
            }
            _ => {
                let hl = cpu.regs.hl();
                bus.write(hl, a);
                cpu.regs.set_hl(hl.wrapping_sub(1));
            }
        }
    }

    // LD A, (BC)/(DE)/(HL+)/(HL-)
    pub(crate) fn ld_a_rrp(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        if step != 1 {
            return;
        }
        match cpu.cont.op >> 4 {
            0 => cpu.regs.a = bus.read(cpu.regs.bc()),
            1 => cpu.regs.a = bus.read(cpu.regs.de()),
            2 => {
                let hl = cpu.regs.hl();
                cpu.regs.a = bus.read(hl);
                cpu.regs.set_hl(hl.wrapping_add(1));
            }
            _ => {
                let hl = cpu.regs.hl();
                cpu.regs.a = bus.read(hl);
                cpu.regs.set_hl(hl.wrapping_sub(1));
            }
        }
    }

    // INC rr / DEC rr: the 16-bit unit ticks on the second cycle.
    pub(crate) fn inc_rr(cpu: &mut Cpu, _bus: &mut Bus, step: u8) {
        if step == 1 {
            let sel = cpu.cont.op >> 4;
            cpu.set_pair(sel, cpu.pair(sel).wrapping_add(1));
        }
    }

    pub(crate) fn dec_rr(cpu: &mut Cpu, _bus: &mut Bus, step: u8) {
        if step == 1 {
            let sel = cpu.cont.op >> 4;
            cpu.set_pair(sel, cpu.pair(sel).wrapping_sub(1));
        }
    }

    // INC r / INC (HL)
    pub(crate) fn inc_r(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let r = (cpu.cont.op >> 3) & 7;
        if r == 6 {
            match step {
                1 => cpu.cont.temp = bus.read(cpu.regs.hl()),
                2 => {
                    let res = cpu.inc8(cpu.cont.temp);
                    bus.write(cpu.regs.hl(), res);
                }
                _ => {}
            }
        } else {
            let res = cpu.inc8(cpu.reg8(r));
            cpu.set_reg8(r, res);
        }
    }

    // DEC r / DEC (HL)
    pub(crate) fn dec_r(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let r = (cpu.cont.op >> 3) & 7;
        if r == 6 {
            match step {
                1 => cpu.cont.temp = bus.read(cpu.regs.hl()),
                2 => {
                    let res = cpu.dec8(cpu.cont.temp);
                    bus.write(cpu.regs.hl(), res);
                }
                _ => {}
            }
        } else {
            let res = cpu.dec8(cpu.reg8(r));
            cpu.set_reg8(r, res);
        }
    }

    // LD r, d8 / LD (HL), d8
    pub(crate) fn ld_r_n(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let r = (cpu.cont.op >> 3) & 7;
        if r == 6 {
            match step {
                1 => cpu.cont.temp = fetch_operand(cpu, bus),
                2 => bus.write(cpu.regs.hl(), cpu.cont.temp),
                _ => {}
            }
        } else if step == 1 {
            let val = fetch_operand(cpu, bus);
            cpu.set_reg8(r, val);
        }
    }

    // The accumulator rotates clear Z along with N and H.
    pub(crate) fn rlca(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        let carry = cpu.regs.a >> 7;
        cpu.regs.a = cpu.regs.a.rotate_left(1);
        cpu.regs.f = carry << 4;
    }

    pub(crate) fn rrca(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        let carry = cpu.regs.a & 1;
        cpu.regs.a = cpu.regs.a.rotate_right(1);
        cpu.regs.f = carry << 4;
    }

    pub(crate) fn rla(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        let carry_in = (cpu.regs.f & FLAG_C) >> 4;
        let carry = cpu.regs.a >> 7;
        cpu.regs.a = (cpu.regs.a << 1) | carry_in;
        cpu.regs.f = carry << 4;
    }

    pub(crate) fn rra(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        let carry_in = (cpu.regs.f & FLAG_C) >> 4;
        let carry = cpu.regs.a & 1;
        cpu.regs.a = (cpu.regs.a >> 1) | (carry_in << 7);
        cpu.regs.f = carry << 4;
    }

    // LD (a16), SP
    pub(crate) fn ld_nnp_sp(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.addr = fetch_operand(cpu, bus) as u16,
            2 => cpu.cont.addr |= (fetch_operand(cpu, bus) as u16) << 8,
            3 => bus.write(cpu.cont.addr, cpu.regs.sp as u8),
            4 => bus.write(cpu.cont.addr.wrapping_add(1), (cpu.regs.sp >> 8) as u8),
            _ => {}
        }
    }

    pub(crate) fn add_hl_rr(cpu: &mut Cpu, _bus: &mut Bus, step: u8) {
        if step == 1 {
            cpu.add_hl(cpu.pair(cpu.cont.op >> 4));
        }
    }

    pub(crate) fn stop(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        cpu.stopped = true;
    }

    // JR r8: the displacement is consumed on the final cycle.
    pub(crate) fn jr_n(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        if step == 2 {
            let off = fetch_operand(cpu, bus) as i8;
            cpu.regs.pc = cpu.regs.pc.wrapping_add(off as u16);
        }
    }

    // JR cc, r8: the extra cycle exists only when the branch is taken.
    pub(crate) fn jr_cc_n(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        if step == 1 {
            if cpu.cond(cpu.cont.op >> 3) {
                cpu.cycles_left += 1;
                let off = fetch_operand(cpu, bus) as i8;
                cpu.regs.pc = cpu.regs.pc.wrapping_add(off as u16);
            } else {
                cpu.regs.pc = cpu.regs.pc.wrapping_add(1);
            }
        }
    }

    pub(crate) fn daa(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        cpu.daa();
    }

    pub(crate) fn cpl(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        cpu.regs.a = !cpu.regs.a;
        cpu.regs.f |= FLAG_N | FLAG_H;
    }

    pub(crate) fn scf(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        cpu.regs.f = (cpu.regs.f & FLAG_Z) | FLAG_C;
    }

    pub(crate) fn ccf(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        cpu.regs.f ^= FLAG_C;
        cpu.regs.f &= FLAG_Z | FLAG_C;
    }

    // LD r, r' and its (HL) forms.
    pub(crate) fn ld_r_r(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let dest = (cpu.cont.op >> 3) & 7;
        let src = cpu.cont.op & 7;
        if src == 6 {
            if step == 1 {
                let val = bus.read(cpu.regs.hl());
                cpu.set_reg8(dest, val);
            }
        } else if dest == 6 {
            if step == 1 {
                bus.write(cpu.regs.hl(), cpu.reg8(src));
            }
        } else if step == 0 {
            let val = cpu.reg8(src);
            cpu.set_reg8(dest, val);
        }
    }

    pub(crate) fn halt(cpu: &mut Cpu, bus: &mut Bus, _step: u8) {
        if bus.irq.ime || bus.irq.pending() == 0 {
            cpu.halted = true;
        } else {
            cpu.halt_bug = true;
        }
    }

    // The 0x80-0xBF block: all eight operations against a register or (HL).
    pub(crate) fn alu_a_r(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let r = cpu.cont.op & 7;
        let x = if r == 6 {
            if step == 0 {
                return;
            }
            bus.read(cpu.regs.hl())
        } else {
            cpu.reg8(r)
        };
        cpu.alu_a(cpu.cont.op >> 3, x);
    }

    // Immediate forms of the same eight operations.
    pub(crate) fn alu_a_n(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        if step == 1 {
            let x = fetch_operand(cpu, bus);
            cpu.alu_a(cpu.cont.op >> 3, x);
        }
    }

    // RET cc: two cycles to decide, three more when taken.
    pub(crate) fn ret_cc(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => {
                if cpu.cond(cpu.cont.op >> 3) {
                    cpu.cycles_left += 3;
                }
            }
            2 => cpu.cont.temp = pop_byte(cpu, bus),
            3 => {
                let hi = pop_byte(cpu, bus) as u16;
                cpu.regs.pc = (hi << 8) | cpu.cont.temp as u16;
            }
            _ => {}
        }
    }

    pub(crate) fn pop_rr(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.temp = pop_byte(cpu, bus),
            2 => {
                let hi = pop_byte(cpu, bus) as u16;
                let val = (hi << 8) | cpu.cont.temp as u16;
                match (cpu.cont.op >> 4) & 3 {
                    0 => cpu.regs.set_bc(val),
                    1 => cpu.regs.set_de(val),
                    2 => cpu.regs.set_hl(val),
                    _ => cpu.regs.set_af(val),
                }
            }
            _ => {}
        }
    }

    pub(crate) fn jp_cc_nn(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.addr = fetch_operand(cpu, bus) as u16,
            2 => {
                cpu.cont.addr |= (fetch_operand(cpu, bus) as u16) << 8;
                if cpu.cond(cpu.cont.op >> 3) {
                    cpu.cycles_left += 1;
                    cpu.regs.pc = cpu.cont.addr;
                }
            }
            _ => {}
        }
    }

    pub(crate) fn jp_nn(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.addr = fetch_operand(cpu, bus) as u16,
            2 => {
                cpu.cont.addr |= (fetch_operand(cpu, bus) as u16) << 8;
                cpu.regs.pc = cpu.cont.addr;
            }
            _ => {}
        }
    }

    pub(crate) fn call_cc_nn(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.addr = fetch_operand(cpu, bus) as u16,
            2 => {
                cpu.cont.addr |= (fetch_operand(cpu, bus) as u16) << 8;
                if cpu.cond(cpu.cont.op >> 3) {
                    cpu.cycles_left += 3;
                }
            }
            4 => push_byte(cpu, bus, (cpu.regs.pc >> 8) as u8),
            5 => {
                push_byte(cpu, bus, cpu.regs.pc as u8);
                cpu.regs.pc = cpu.cont.addr;
            }
            _ => {}
        }
    }

    pub(crate) fn call_nn(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.addr = fetch_operand(cpu, bus) as u16,
            2 => cpu.cont.addr |= (fetch_operand(cpu, bus) as u16) << 8,
            4 => push_byte(cpu, bus, (cpu.regs.pc >> 8) as u8),
            5 => {
                push_byte(cpu, bus, cpu.regs.pc as u8);
                cpu.regs.pc = cpu.cont.addr;
            }
            _ => {}
        }
    }

    pub(crate) fn push_rr(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let val = match (cpu.cont.op >> 4) & 3 {
            0 => cpu.regs.bc(),
            1 => cpu.regs.de(),
            2 => cpu.regs.hl(),
            _ => cpu.regs.af(),
        };
        match step {
            2 => push_byte(cpu, bus, (val >> 8) as u8),
            3 => push_byte(cpu, bus, val as u8),
            _ => {}
        }
    }

    // RST: the target address is encoded in opcode bits 3-5.
    pub(crate) fn rst(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            2 => push_byte(cpu, bus, (cpu.regs.pc >> 8) as u8),
            3 => {
                push_byte(cpu, bus, cpu.regs.pc as u8);
                cpu.regs.pc = (cpu.cont.op & 0x38) as u16;
            }
            _ => {}
        }
    }

    pub(crate) fn ret(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.temp = pop_byte(cpu, bus),
            2 => {
                let hi = pop_byte(cpu, bus) as u16;
                cpu.regs.pc = (hi << 8) | cpu.cont.temp as u16;
            }
            _ => {}
        }
    }

    // RETI re-enables IME immediately, with no EI-style delay.
    pub(crate) fn reti(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            0 => bus.irq.ime = true,
            1 => cpu.cont.temp = pop_byte(cpu, bus),
            2 => {
                let hi = pop_byte(cpu, bus) as u16;
                cpu.regs.pc = (hi << 8) | cpu.cont.temp as u16;
            }
            _ => {}
        }
    }

    // LDH (a8), A
    pub(crate) fn ldh_np_a(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.temp = fetch_operand(cpu, bus),
            2 => bus.write(0xFF00 | cpu.cont.temp as u16, cpu.regs.a),
            _ => {}
        }
    }

    // LDH A, (a8)
    pub(crate) fn ldh_a_np(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.temp = fetch_operand(cpu, bus),
            2 => cpu.regs.a = bus.read(0xFF00 | cpu.cont.temp as u16),
            _ => {}
        }
    }

    pub(crate) fn ld_cp_a(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        if step == 1 {
            bus.write(0xFF00 | cpu.regs.c as u16, cpu.regs.a);
        }
    }

    pub(crate) fn ld_a_cp(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        if step == 1 {
            cpu.regs.a = bus.read(0xFF00 | cpu.regs.c as u16);
        }
    }

    pub(crate) fn add_sp_n(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        if step == 1 {
            let n = fetch_operand(cpu, bus);
            cpu.regs.sp = cpu.add_signed(cpu.regs.sp, n);
        }
    }

    pub(crate) fn jp_hlp(cpu: &mut Cpu, _bus: &mut Bus, _step: u8) {
        cpu.regs.pc = cpu.regs.hl();
    }

    pub(crate) fn ld_nnp_a(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.addr = fetch_operand(cpu, bus) as u16,
            2 => cpu.cont.addr |= (fetch_operand(cpu, bus) as u16) << 8,
            3 => bus.write(cpu.cont.addr, cpu.regs.a),
            _ => {}
        }
    }

    pub(crate) fn ld_a_nnp(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            1 => cpu.cont.addr = fetch_operand(cpu, bus) as u16,
            2 => cpu.cont.addr |= (fetch_operand(cpu, bus) as u16) << 8,
            3 => cpu.regs.a = bus.read(cpu.cont.addr),
            _ => {}
        }
    }

    pub(crate) fn di(_cpu: &mut Cpu, bus: &mut Bus, _step: u8) {
        bus.irq.ime = false;
    }

    // EI only arms the one-shot delay; IME turns on after the next fetch.
    pub(crate) fn ei(_cpu: &mut Cpu, bus: &mut Bus, _step: u8) {
        bus.irq.delay = true;
    }

    pub(crate) fn ld_hl_sp_n(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        if step == 1 {
            let n = fetch_operand(cpu, bus);
            let res = cpu.add_signed(cpu.regs.sp, n);
            cpu.regs.set_hl(res);
        }
    }

    pub(crate) fn ld_sp_hl(cpu: &mut Cpu, _bus: &mut Bus, step: u8) {
        if step == 1 {
            cpu.regs.sp = cpu.regs.hl();
        }
    }

    /// The 5-cycle interrupt-acceptance sequence. IME drops first, two
    /// cycles of internal delay pass, then the return address is pushed
    /// big-endian and PC jumps to the latched vector. The high-byte push
    /// is flagged so an IE write landing on it re-arms the vector.
    pub(crate) fn service_interrupt(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        match step {
            0 => bus.irq.ime = false,
            3 => {
                bus.irq.servicing_push = true;
                push_byte(cpu, bus, (cpu.regs.pc >> 8) as u8);
                bus.irq.servicing_push = false;
            }
            4 => {
                push_byte(cpu, bus, cpu.regs.pc as u8);
                cpu.regs.pc = bus.irq.take_vector();
            }
            _ => {}
        }
    }

    // CB-prefixed families.

    // Rotates/shifts/SWAP over a register or (HL).
    pub(crate) fn cb_rot_r(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let r = cpu.cont.op & 7;
        let kind = cpu.cont.op >> 3;
        if r == 6 {
            match step {
                2 => cpu.cont.temp = bus.read(cpu.regs.hl()),
                3 => {
                    let res = cpu.rot8(kind, cpu.cont.temp);
                    bus.write(cpu.regs.hl(), res);
                }
                _ => {}
            }
        } else if step == 1 {
            let res = cpu.rot8(kind, cpu.reg8(r));
            cpu.set_reg8(r, res);
        }
    }

    // BIT b, r only reads its operand, so the (HL) form stays at 3 cycles.
    pub(crate) fn cb_bit_r(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let r = cpu.cont.op & 7;
        let bit = (cpu.cont.op >> 3) & 7;
        if r == 6 {
            if step == 2 {
                let val = bus.read(cpu.regs.hl());
                cpu.bit8(bit, val);
            }
        } else if step == 1 {
            let val = cpu.reg8(r);
            cpu.bit8(bit, val);
        }
    }

    pub(crate) fn cb_res_r(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let r = cpu.cont.op & 7;
        let bit = (cpu.cont.op >> 3) & 7;
        if r == 6 {
            match step {
                2 => cpu.cont.temp = bus.read(cpu.regs.hl()),
                3 => bus.write(cpu.regs.hl(), cpu.cont.temp & !(1 << bit)),
                _ => {}
            }
        } else if step == 1 {
            let val = cpu.reg8(r) & !(1 << bit);
            cpu.set_reg8(r, val);
        }
    }

    pub(crate) fn cb_set_r(cpu: &mut Cpu, bus: &mut Bus, step: u8) {
        let r = cpu.cont.op & 7;
        let bit = (cpu.cont.op >> 3) & 7;
        if r == 6 {
            match step {
                2 => cpu.cont.temp = bus.read(cpu.regs.hl()),
                3 => bus.write(cpu.regs.hl(), cpu.cont.temp | (1 << bit)),
                _ => {}
            }
        } else if step == 1 {
            let val = cpu.reg8(r) | (1 << bit);
            cpu.set_reg8(r, val);
        }
    }
}
