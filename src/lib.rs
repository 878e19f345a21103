//! Cycle-accurate LR35902-class CPU emulation core.
//!
//! This crate contains the instruction execution engine, interrupt
//! controller and memory-bus abstraction. Peripherals (PPU/APU/timer) and
//! frontends are out of scope; they attach to the bus as devices and drive
//! the core through the [`machine`] facade.

/// Memory bus and the device capability trait.
pub mod bus;

/// LR35902 CPU core: the per-M-cycle execution engine.
pub mod cpu;

/// Simple memory-mapped devices (RAM, ROM window, boot overlay).
pub mod devices;

/// Interrupt controller: IME/IE/IF and vector priority encoding.
pub mod interrupts;

/// High-level facade that wires the CPU and bus into a single machine.
pub mod machine;

/// Static 256+256 entry instruction decode tables.
pub mod opcodes;

/// Register file and flag accessors.
pub mod registers;
