//! Interrupt controller state and priority encoding.
//!
//! Owns IME, the IE/IF registers and the latched service vector. The CPU
//! polls this once per instruction boundary; bus writes to `0xFF0F`/`0xFFFF`
//! land here as well.

/// IF register address.
pub const IF_ADDR: u16 = 0xFF0F;
/// IE register address.
pub const IE_ADDR: u16 = 0xFFFF;

/// Five interrupt sources, one bit each in IE/IF.
pub const IRQ_MASK: u8 = 0x1F;

// Service vectors, highest priority first (gbdev.io/pandocs/Interrupts.html).
const VECTOR_VBLANK: u16 = 0x0040;
const VECTOR_STAT: u16 = 0x0048;
const VECTOR_TIMER: u16 = 0x0050;
const VECTOR_SERIAL: u16 = 0x0058;
const VECTOR_JOYPAD: u16 = 0x0060;

/// The upper three IF bits are not backed by hardware and always read 1.
const IF_UNUSED: u8 = 0xE0;

pub struct Interrupts {
    /// Interrupt master enable.
    pub ime: bool,
    /// One-shot: EI executed, IME turns on after the next fetch.
    pub delay: bool,
    /// Pending flags (bits 5-7 forced high).
    pub if_reg: u8,
    /// Enable mask.
    pub ie_reg: u8,
    /// Vector latched at the start of the acceptance sequence; `None` when
    /// a mid-sequence IE rewrite left no serviceable interrupt.
    vector: Option<u16>,
    /// Set by the CPU around the high-byte push of the acceptance sequence
    /// so an IE write landing there re-arms the vector.
    pub(crate) servicing_push: bool,
}

impl Interrupts {
    pub fn new() -> Self {
        Self {
            ime: false,
            delay: false,
            // VBlank is flagged at power-on.
            if_reg: IF_UNUSED | 0x01,
            ie_reg: 0,
            vector: None,
            servicing_push: false,
        }
    }

    /// Enabled-and-pending bits.
    #[inline]
    pub fn pending(&self) -> u8 {
        self.if_reg & self.ie_reg & IRQ_MASK
    }

    /// Latch the service vector for the highest-priority bit in `flags`.
    /// Bit 0 (VBlank) wins; an empty set parks the vector.
    pub(crate) fn arm(&mut self, flags: u8) {
        self.vector = Self::priority_vector(flags);
    }

    /// Address of the highest-priority set bit, if any.
    pub fn priority_vector(flags: u8) -> Option<u16> {
        match (flags & IRQ_MASK).trailing_zeros() {
            0 => Some(VECTOR_VBLANK),
            1 => Some(VECTOR_STAT),
            2 => Some(VECTOR_TIMER),
            3 => Some(VECTOR_SERIAL),
            4 => Some(VECTOR_JOYPAD),
            _ => None,
        }
    }

    /// Consume the latched vector, clearing the serviced IF bit. A parked
    /// vector (cancelled dispatch) clears nothing and sends PC to 0x0000.
    pub(crate) fn take_vector(&mut self) -> u16 {
        let vector = self.vector.take();
        match vector {
            Some(VECTOR_VBLANK) => self.if_reg &= !0x01,
            Some(VECTOR_STAT) => self.if_reg &= !0x02,
            Some(VECTOR_TIMER) => self.if_reg &= !0x04,
            Some(VECTOR_SERIAL) => self.if_reg &= !0x08,
            Some(VECTOR_JOYPAD) => self.if_reg &= !0x10,
            _ => {}
        }
        vector.unwrap_or(0x0000)
    }

    /// Raise a pending interrupt bit (peripheral-facing helper).
    #[inline]
    pub fn request(&mut self, bit: u8) {
        self.if_reg |= bit & IRQ_MASK;
    }

    pub fn accepts(&self, addr: u16) -> bool {
        addr == IF_ADDR || addr == IE_ADDR
    }

    pub fn read(&self, addr: u16) -> u8 {
        if addr == IF_ADDR { self.if_reg } else { self.ie_reg }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        if addr == IF_ADDR {
            self.if_reg = IF_UNUSED | (value & IRQ_MASK);
        } else {
            // An IE write delivered by the acceptance sequence's own
            // high-byte push (SP crossing 0xFFFF) changes which interrupt
            // gets dispatched, or cancels the dispatch entirely.
            if self.servicing_push {
                self.arm(self.if_reg & value & IRQ_MASK);
            }
            self.ie_reg = value;
        }
    }
}

impl Default for Interrupts {
    fn default() -> Self {
        Self::new()
    }
}
