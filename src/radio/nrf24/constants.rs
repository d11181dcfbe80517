use crate::Pipe;

/// The largest payload the FIFOs hold.
pub const MAX_PAYLOAD_SIZE: usize = 32;

/// The highest RF channel (2400 MHz + 125 MHz).
pub const MAX_CHANNEL: u8 = 125;

/// How long CE is held high to start an over-the-air transmission.
///
/// The datasheet requires at least 10 microseconds.
pub const CE_PULSE_WIDTH_US: u32 = 15;

/// The oscillator start-up time after setting PWR_UP.
pub const POWER_UP_DELAY_MS: u32 = 5;

/// The radio's register map.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    Config = 0x00,
    EnAa = 0x01,
    EnRxAddr = 0x02,
    SetupAw = 0x03,
    SetupRetr = 0x04,
    RfCh = 0x05,
    RfSetup = 0x06,
    Status = 0x07,
    ObserveTx = 0x08,
    Rpd = 0x09,
    RxAddrP0 = 0x0A,
    RxAddrP1 = 0x0B,
    RxAddrP2 = 0x0C,
    RxAddrP3 = 0x0D,
    RxAddrP4 = 0x0E,
    RxAddrP5 = 0x0F,
    TxAddr = 0x10,
    RxPwP0 = 0x11,
    RxPwP1 = 0x12,
    RxPwP2 = 0x13,
    RxPwP3 = 0x14,
    RxPwP4 = 0x15,
    RxPwP5 = 0x16,
    FifoStatus = 0x17,
    Dynpd = 0x1C,
    Feature = 0x1D,
}

impl Register {
    /// The 5-bit register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// The RX address register of a `pipe`.
    pub const fn rx_addr(pipe: Pipe) -> Self {
        match pipe {
            Pipe::P0 => Register::RxAddrP0,
            Pipe::P1 => Register::RxAddrP1,
            Pipe::P2 => Register::RxAddrP2,
            Pipe::P3 => Register::RxAddrP3,
            Pipe::P4 => Register::RxAddrP4,
            Pipe::P5 => Register::RxAddrP5,
        }
    }

    /// The static payload width register of a `pipe`.
    pub const fn rx_pw(pipe: Pipe) -> Self {
        match pipe {
            Pipe::P0 => Register::RxPwP0,
            Pipe::P1 => Register::RxPwP1,
            Pipe::P2 => Register::RxPwP2,
            Pipe::P3 => Register::RxPwP3,
            Pipe::P4 => Register::RxPwP4,
            Pipe::P5 => Register::RxPwP5,
        }
    }
}

/// SPI command opcodes for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const REGISTER_MASK: u8 = 0x1F;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const W_ACK_PAYLOAD: u8 = 0xA8;
    pub const W_TX_PAYLOAD_NO_ACK: u8 = 0xB0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const REUSE_TX_PL: u8 = 0xE3;
    pub const NOP: u8 = 0xFF;
}

/// Bit positions (plain names) and masks (`MASK_*`) within registers.
pub mod mnemonics {
    // CONFIG
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;
    pub const PWR_UP: u8 = 1;
    pub const PRIM_RX: u8 = 0;

    // FIFO_STATUS
    pub const TX_FULL: u8 = 5;
    pub const RX_EMPTY: u8 = 0;

    // RPD
    pub const RPD: u8 = 0;

    // FEATURE
    pub const EN_DPL: u8 = 2;
    pub const EN_ACK_PAY: u8 = 1;
    pub const EN_DYN_ACK: u8 = 0;

    // OBSERVE_TX
    pub const MASK_ARC_CNT: u8 = 0x0F;
    pub const PLOS_CNT: u8 = 4;
}
