use dmg_core::devices::Ram;
use dmg_core::machine::Machine;

/// Post-boot machine with 64 KiB of flat RAM and `program` placed at the
/// entry point (0x0100), where PC starts.
pub fn machine_with_program(program: &[u8]) -> Machine {
    let mut machine = Machine::new();
    machine.attach(Box::new(Ram::new(0x0000, 0x10000)));
    for (i, byte) in program.iter().enumerate() {
        machine.bus.write(0x0100 + i as u16, *byte);
    }
    // Power-on leaves VBlank flagged; tests arm interrupts explicitly.
    machine.bus.irq.if_reg &= !0x01;
    machine
}
