use bitfield_struct::bitfield;

use crate::{CrcLength, DataRate, Irq, PaLevel, StatusFlags};

/// The CONFIG register.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Set bits hide the matching event from the IRQ pin.
    #[bits(3, access = None)]
    irq_mask: u8,

    #[bits(2, access = None, default = 3)]
    crc: u8,

    pub pwr_up: bool,

    pub prim_rx: bool,
}

impl Config {
    pub const fn crc_length(&self) -> CrcLength {
        CrcLength::from_bits(self.into_bits())
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        Self::from_bits(self.into_bits() & !CrcLength::MASK | length.into_bits())
    }

    /// The events that reach the IRQ pin.
    pub const fn irq_events(&self) -> Irq {
        Irq::from_bits_truncate(!self.into_bits())
    }

    pub fn with_irq_events(self, events: Irq) -> Self {
        let masked = !events.bits() & StatusFlags::IRQ_MASK;
        Self::from_bits(self.into_bits() & !StatusFlags::IRQ_MASK | masked)
    }
}

#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    /// The auto-retry feature's `delay`.
    #[bits(4, default = 5)]
    pub ard: u8,

    /// The auto-retry feature's `count`.
    #[bits(4, default = 15)]
    pub arc: u8,
}

/// The RF_SETUP register.
///
/// The data rate is split across 2 non-adjacent bits.
#[bitfield(u8, order = Msb)]
pub(crate) struct RfSetup {
    /// CONT_WAVE and a reserved bit.
    #[bits(2)]
    _test_modes: u8,

    #[bits(1, access = None)]
    rf_dr_low: bool,

    #[bits(1)]
    _pll_lock: u8,

    #[bits(1, access = None)]
    rf_dr_high: bool,

    #[bits(2, access = None, default = 3)]
    rf_pwr: u8,

    /// Only honored by older nRF24L01 and Si24R1 chips.
    #[bits(1, default = true)]
    pub lna_enable: bool,
}

impl RfSetup {
    pub const fn data_rate(&self) -> DataRate {
        DataRate::from_bits(self.into_bits())
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self::from_bits(self.into_bits() & !DataRate::MASK | data_rate.into_bits())
    }

    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.into_bits())
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self::from_bits(self.into_bits() & !PaLevel::MASK | level.into_bits())
    }
}

/// The FEATURE register.
#[bitfield(u8, order = Msb)]
pub(crate) struct Feature {
    #[bits(5)]
    _padding: u8,

    /// EN_DPL
    #[bits(1, access = RO)]
    pub dynamic_payloads: bool,

    /// EN_ACK_PAY
    #[bits(1, access = RO)]
    pub ack_payloads: bool,

    /// EN_DYN_ACK
    pub ask_no_ack: bool,
}

impl Feature {
    /// Disabling dynamic payloads also disables ACK payloads.
    pub fn with_dynamic_payloads(self, enable: bool) -> Self {
        let mut new_val = self.into_bits() & !(1u8 << Self::DYNAMIC_PAYLOADS_OFFSET);
        if enable {
            new_val |= 1u8 << Self::DYNAMIC_PAYLOADS_OFFSET;
        } else {
            new_val &= !(1u8 << Self::ACK_PAYLOADS_OFFSET);
        }
        Self::from_bits(new_val)
    }

    /// Enabling ACK payloads also enables dynamic payloads.
    pub fn with_ack_payloads(self, enable: bool) -> Self {
        let mut new_val = self.into_bits() & !(1u8 << Self::ACK_PAYLOADS_OFFSET);
        if enable {
            new_val |= (1u8 << Self::ACK_PAYLOADS_OFFSET) | (1u8 << Self::DYNAMIC_PAYLOADS_OFFSET);
        }
        Self::from_bits(new_val)
    }
}
