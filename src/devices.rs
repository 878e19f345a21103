//! Basic memory-mapped devices for populating a [`crate::bus::Bus`].

use crate::bus::BusDevice;

/// Boot-unmap register. A nonzero write disables the boot overlay for good.
pub const BOOT_OFF_ADDR: u16 = 0xFF50;

/// Flat RAM over a base/length window.
pub struct Ram {
    base: u16,
    data: Vec<u8>,
}

impl Ram {
    pub fn new(base: u16, len: usize) -> Self {
        Self {
            base,
            data: vec![0; len],
        }
    }
}

impl BusDevice for Ram {
    fn accepts(&self, addr: u16) -> bool {
        (addr as usize) >= (self.base as usize)
            && (addr as usize) < (self.base as usize) + self.data.len()
    }

    fn read(&self, addr: u16) -> u8 {
        self.data[(addr - self.base) as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[(addr - self.base) as usize] = value;
    }
}

/// ROM-only cartridge window: `0x0000-0x7FFF` plus the external-RAM range
/// `0xA000-0xBFFF`. Reads beyond the image float high; writes are ignored
/// (there is no banking hardware to latch them).
pub struct Rom {
    data: Vec<u8>,
}

impl Rom {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl BusDevice for Rom {
    fn accepts(&self, addr: u16) -> bool {
        addr < 0x8000 || (0xA000..0xC000).contains(&addr)
    }

    fn read(&self, addr: u16) -> u8 {
        self.data.get(addr as usize).copied().unwrap_or(0xFF)
    }

    fn write(&mut self, _addr: u16, _value: u8) {}
}

/// Boot image overlaid on the low address space until boot hands off.
///
/// Serves reads below `0x0900` while mapped. Writing a nonzero value to
/// `0xFF50` unmaps it permanently; there is no way to map it back.
pub struct BootOverlay {
    data: Vec<u8>,
    done: bool,
}

impl BootOverlay {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, done: false }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl BusDevice for BootOverlay {
    fn accepts(&self, addr: u16) -> bool {
        (!self.done && addr < 0x0900) || addr == BOOT_OFF_ADDR
    }

    fn read(&self, addr: u16) -> u8 {
        if addr == BOOT_OFF_ADDR {
            return if self.done { 0xFF } else { 0xFE };
        }
        self.data.get(addr as usize).copied().unwrap_or(0xFF)
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr == BOOT_OFF_ADDR && value != 0 {
            self.done = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;

    #[test]
    fn ram_round_trip_and_window() {
        let mut bus = Bus::new();
        bus.attach(Box::new(Ram::new(0xC000, 0x2000)));
        bus.write(0xC123, 0xAB);
        assert_eq!(bus.read(0xC123), 0xAB);
        // Outside the window: open bus.
        assert_eq!(bus.read(0x8000), 0xFF);
        bus.write(0x8000, 0x55);
        assert_eq!(bus.read(0x8000), 0xFF);
    }

    #[test]
    fn rom_ignores_writes() {
        let mut bus = Bus::new();
        bus.attach(Box::new(Rom::new(vec![0x11, 0x22, 0x33])));
        assert_eq!(bus.read(0x0001), 0x22);
        bus.write(0x0001, 0x99);
        assert_eq!(bus.read(0x0001), 0x22);
        // Past the image the bus floats high.
        assert_eq!(bus.read(0x0100), 0xFF);
    }

    #[test]
    fn first_accepting_device_wins() {
        let mut bus = Bus::new();
        bus.attach(Box::new(BootOverlay::new(vec![0xAA; 0x900])));
        bus.attach(Box::new(Rom::new(vec![0xBB; 0x1000])));
        assert_eq!(bus.read(0x0000), 0xAA);
        bus.write(BOOT_OFF_ADDR, 1);
        assert_eq!(bus.read(0x0000), 0xBB);
        // Unmapping is permanent.
        bus.write(BOOT_OFF_ADDR, 0);
        assert_eq!(bus.read(0x0000), 0xBB);
    }

    #[test]
    fn interrupt_registers_shadow_devices() {
        let mut bus = Bus::new();
        bus.attach(Box::new(Ram::new(0xFF00, 0x100)));
        bus.write(0xFFFF, 0x1F);
        assert_eq!(bus.irq.ie_reg, 0x1F);
        assert_eq!(bus.read(0xFFFF), 0x1F);
        bus.write(0xFF0F, 0x00);
        assert_eq!(bus.read(0xFF0F), 0xE0);
    }
}
