//! Value types shared by the radio traits.
//!
//! Register encodings live next to each type (`MASK`, `into_bits()`, `from_bits()`),
//! so the traits never deal with raw bit positions for these settings.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;
use bitflags::bitflags;

/// Transmitter output power, as written to RF_SETUP.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

impl PaLevel {
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            PaLevel::Min => "Min",
            PaLevel::Low => "Low",
            PaLevel::High => "High",
            PaLevel::Max => "Max",
        }
    }
}

/// The over-the-air bit rate.
///
/// The two RF_SETUP bits are not adjacent; RF_DR_LOW wins when both are set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    Mbps1,
    Mbps2,
    /// Not supported by the original (non-plus) nRF24L01.
    Kbps250,
}

impl DataRate {
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        if value & 0x20 != 0 {
            DataRate::Kbps250
        } else if value & 0x8 != 0 {
            DataRate::Mbps2
        } else {
            DataRate::Mbps1
        }
    }

    const fn label(self) -> &'static str {
        match self {
            DataRate::Mbps1 => "1 Mbps",
            DataRate::Mbps2 => "2 Mbps",
            DataRate::Kbps250 => "250 Kbps",
        }
    }
}

/// Packet checksum length, stored in the EN_CRC and CRCO bits of CONFIG.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrcLength {
    Disabled,
    Bit8,
    Bit16,
}

impl CrcLength {
    pub(crate) const MASK: u8 = 0b1100;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcLength::Disabled => 0,
            CrcLength::Bit8 => 8,
            CrcLength::Bit16 => 12,
        }
    }

    /// The CRCO bit is meaningless while EN_CRC is clear.
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 | 4 => CrcLength::Disabled,
            8 => CrcLength::Bit8,
            _ => CrcLength::Bit16,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            CrcLength::Disabled => "disabled",
            CrcLength::Bit8 => "8 bit",
            CrcLength::Bit16 => "16 bit",
        }
    }
}

/// Fill level of the 3-slot TX or RX FIFO.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FifoState {
    Full,
    Empty,
    /// Holds 1 or 2 payloads.
    Occupied,
}

impl FifoState {
    const fn label(self) -> &'static str {
        match self {
            FifoState::Full => "Full",
            FifoState::Empty => "Empty",
            FifoState::Occupied => "Occupied",
        }
    }
}

macro_rules! impl_label_fmt {
    ($($t:ty),+) => {
        $(
            impl Display for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    f.write_str(self.label())
                }
            }

            #[cfg(feature = "defmt")]
            #[cfg(target_os = "none")]
            impl defmt::Format for $t {
                fn format(&self, fmt: defmt::Formatter) {
                    defmt::write!(fmt, "{=str}", self.label())
                }
            }
        )+
    };
}

impl_label_fmt!(PaLevel, DataRate, CrcLength, FifoState);

/// One of the six logical data pipes.
///
/// Each pipe has its own RX address, static payload size, auto-ack bit and
/// dynamic payload bit.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pipe {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
    P4 = 4,
    P5 = 5,
}

impl Pipe {
    /// All pipes in ascending order.
    pub const ALL: [Pipe; 6] = [Pipe::P0, Pipe::P1, Pipe::P2, Pipe::P3, Pipe::P4, Pipe::P5];

    /// The pipe number, which is also its bit position in the per-pipe registers.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pipes 2 - 5 only own the first byte of their address.
    pub const fn has_full_address(self) -> bool {
        matches!(self, Pipe::P0 | Pipe::P1)
    }
}

impl TryFrom<u8> for Pipe {
    /// The rejected pipe number.
    type Error = u8;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Pipe::P0),
            1 => Ok(Pipe::P1),
            2 => Ok(Pipe::P2),
            3 => Ok(Pipe::P3),
            4 => Ok(Pipe::P4),
            5 => Ok(Pipe::P5),
            _ => Err(value),
        }
    }
}

impl Display for Pipe {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "pipe {}", self.index())
    }
}

/// The address width shared by all pipes.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressWidth {
    /// 3 byte addresses
    Bytes3 = 1,
    /// 4 byte addresses
    Bytes4 = 2,
    /// 5 byte addresses
    Bytes5 = 3,
}

impl AddressWidth {
    /// The number of address bytes.
    pub const fn bytes(self) -> usize {
        self as usize + 2
    }

    pub(crate) const fn into_bits(self) -> u8 {
        self as u8
    }

    /// A SETUP_AW value of 0 is illegal on this chip.
    pub(crate) const fn from_bits(value: u8) -> Option<Self> {
        match value & 3 {
            1 => Some(AddressWidth::Bytes3),
            2 => Some(AddressWidth::Bytes4),
            3 => Some(AddressWidth::Bytes5),
            _ => None,
        }
    }
}

impl Display for AddressWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} bytes", self.bytes())
    }
}

/// The primary role of the radio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Primary receiver (PRIM_RX set).
    Rx,
    /// Primary transmitter (PRIM_RX clear).
    Tx,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Mode::Rx => write!(f, "RX"),
            Mode::Tx => write!(f, "TX"),
        }
    }
}

bitflags! {
    /// The interrupt events reported in the STATUS register.
    ///
    /// The same bit positions are used in the CONFIG register to mask events
    /// from the IRQ pin.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Irq: u8 {
        /// RX Data Ready.
        const RX_DR = 1 << 6;
        /// TX Data Sent.
        const TX_DS = 1 << 5;
        /// Maximum number of retransmits reached (TX Data Failed).
        const MAX_RT = 1 << 4;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Irq {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Irq rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.contains(Irq::RX_DR),
            self.contains(Irq::TX_DS),
            self.contains(Irq::MAX_RT)
        )
    }
}

/// The STATUS byte that the radio shifts out as the first byte of every transaction.
#[bitfield(u8, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// RX_DR: a payload arrived.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// TX_DS: a payload was sent (and acknowledged, if auto-ack is on).
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// MAX_RT: the auto-retry count ran out.
    #[bits(1, access = RO)]
    pub tx_df: bool,

    /// The pipe that the payload at the top of the RX FIFO belongs to.
    ///
    /// `0b111` means the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "STATUS rx_dr: {=bool}, tx_ds: {=bool}, tx_df: {=bool}, rx_pipe: {=u8}, tx_full: {=bool}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df(),
            self.rx_pipe(),
            self.tx_full()
        )
    }
}

impl StatusFlags {
    /// The event bits, at the same positions in STATUS and CONFIG.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// Only the interrupt event bits of this status byte.
    pub const fn irq(&self) -> Irq {
        Irq::from_bits_truncate(self.into_bits())
    }

    /// The pipe with a payload waiting in the RX FIFO, if any.
    pub fn pipe_with_payload(&self) -> Option<Pipe> {
        Pipe::try_from(self.rx_pipe()).ok()
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "STATUS rx_dr: {}, tx_ds: {}, tx_df: {}, rx_pipe: {}, tx_full: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df(),
            self.rx_pipe(),
            self.tx_full()
        )
    }
}

/// The FIFO_STATUS register.
#[bitfield(u8, order = Msb)]
pub struct FifoStatus {
    #[bits(1)]
    _padding: u8,

    /// The last TX payload is being reused (REUSE_TX_PL).
    #[bits(1, access = RO)]
    pub tx_reuse: bool,

    #[bits(1, access = RO)]
    pub tx_full: bool,

    #[bits(1, access = RO)]
    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    #[bits(1, access = RO)]
    pub rx_full: bool,

    #[bits(1, access = RO)]
    pub rx_empty: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "FifoStatus({=u8:#x})", self.into_bits())
    }
}

impl FifoStatus {
    /// The state of the TX FIFO (`about_tx == true`) or the RX FIFO.
    pub const fn state(&self, about_tx: bool) -> FifoState {
        let (empty, full) = if about_tx {
            (self.tx_empty(), self.tx_full())
        } else {
            (self.rx_empty(), self.rx_full())
        };
        match (empty, full) {
            (true, _) => FifoState::Empty,
            (false, true) => FifoState::Full,
            (false, false) => FifoState::Occupied,
        }
    }
}
