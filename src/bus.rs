//! Memory bus: ordered address-range dispatch over attached devices.
//!
//! The CPU issues single atomic byte transactions against a 16-bit address
//! space. The first device whose range accepts an address serves it; the
//! interrupt controller's registers take precedence over everything else.
//! Unmapped reads float to `0xFF` (open bus) and unmapped writes are
//! silently discarded.

use crate::interrupts::Interrupts;

/// Capability interface for a memory-mapped device.
pub trait BusDevice {
    /// Whether this device serves `addr`.
    fn accepts(&self, addr: u16) -> bool;
    fn read(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);
}

pub struct Bus {
    /// Interrupt controller, mapped at 0xFF0F/0xFFFF ahead of the device list.
    pub irq: Interrupts,
    devices: Vec<Box<dyn BusDevice>>,
}

impl Bus {
    pub fn new() -> Self {
        Self {
            irq: Interrupts::new(),
            devices: Vec::new(),
        }
    }

    /// Attach a device. Dispatch order is attachment order.
    pub fn attach(&mut self, device: Box<dyn BusDevice>) {
        self.devices.push(device);
    }

    pub fn read(&self, addr: u16) -> u8 {
        if self.irq.accepts(addr) {
            return self.irq.read(addr);
        }
        for device in &self.devices {
            if device.accepts(addr) {
                return device.read(addr);
            }
        }
        0xFF
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        if self.irq.accepts(addr) {
            self.irq.write(addr, value);
            return;
        }
        for device in &mut self.devices {
            if device.accepts(addr) {
                device.write(addr, value);
                return;
            }
        }
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
