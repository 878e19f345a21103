//! Facade wiring the CPU core and bus into a runnable machine.

use crate::bus::{Bus, BusDevice};
use crate::cpu::Cpu;
use crate::interrupts::Interrupts;

pub struct Machine {
    pub cpu: Cpu,
    pub bus: Bus,
}

impl Machine {
    /// A machine in the post-boot state with an empty bus.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: Bus::new(),
        }
    }

    pub fn attach(&mut self, device: Box<dyn BusDevice>) {
        self.bus.attach(device);
    }

    /// Advance one machine cycle.
    pub fn step(&mut self) {
        self.cpu.step(&mut self.bus);
    }

    /// Run to the next instruction boundary and return the machine cycles
    /// consumed. An idle CPU (halted with nothing pending, or stopped)
    /// makes no progress and returns 0.
    pub fn step_instruction(&mut self) -> u64 {
        let start = self.cpu.cycles;
        self.step();
        while self.cpu.cycles_left > 0 {
            self.step();
        }
        self.cpu.cycles - start
    }

    /// Return the CPU and interrupt controller to the post-boot state,
    /// keeping the attached devices as they are.
    pub fn reset(&mut self) {
        self.cpu = Cpu::new();
        self.bus.irq = Interrupts::new();
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
