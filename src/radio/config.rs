use crate::radio::nrf24::bit_fields::{Config, Feature, RfSetup, SetupRetry};
use crate::radio::{MAX_CHANNEL, MAX_PAYLOAD_SIZE};
use crate::{AddressWidth, CrcLength, DataRate, Irq, PaLevel, Pipe};

/// The addresses of the TX pipe and the 6 RX pipes, plus which RX pipes are open.
///
/// Full addresses are kept as 5 bytes. [`EsbInit::with_config()`](fn@crate::radio::prelude::EsbInit::with_config)
/// only writes as many bytes as [`RadioConfig::address_width()`] allows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeConfig {
    tx_address: [u8; 5],
    pipe0: [u8; 5],
    pipe1: [u8; 5],
    /// The pipe-specific byte of pipes 2 - 5.
    partial: [u8; 4],
    rx_pipes_enabled: u8,
}

impl Default for PipeConfig {
    /// The chip's reset values, with pipes 0 and 1 open.
    fn default() -> Self {
        Self {
            tx_address: [0xE7; 5],
            pipe0: [0xE7; 5],
            pipe1: [0xC2; 5],
            partial: [0xC3, 0xC4, 0xC5, 0xC6],
            rx_pipes_enabled: 0b11,
        }
    }
}

impl PipeConfig {
    /// Bytes past the 5th are ignored. A shorter `address` only replaces the leading bytes.
    pub fn set_tx_address(&mut self, address: &[u8]) {
        let n = address.len().min(5);
        self.tx_address[..n].copy_from_slice(&address[..n]);
    }

    /// Set the RX address of a `pipe` and open it.
    ///
    /// Pipes 2 - 5 only use the first byte of `address`.
    /// This does nothing if `address` is empty.
    pub fn set_rx_address(&mut self, pipe: Pipe, address: &[u8]) {
        let Some(first) = address.first() else {
            return;
        };
        self.rx_pipes_enabled |= 1 << pipe.index();
        let n = address.len().min(5);
        match pipe {
            Pipe::P0 => self.pipe0[..n].copy_from_slice(&address[..n]),
            Pipe::P1 => self.pipe1[..n].copy_from_slice(&address[..n]),
            _ => self.partial[pipe.index() as usize - 2] = *first,
        }
    }

    pub fn open_rx_pipe(&mut self, pipe: Pipe) {
        self.rx_pipes_enabled |= 1 << pipe.index();
    }

    pub fn close_rx_pipe(&mut self, pipe: Pipe) {
        self.rx_pipes_enabled &= !(1 << pipe.index());
    }

    pub const fn is_rx_pipe_enabled(&self, pipe: Pipe) -> bool {
        self.rx_pipes_enabled & (1 << pipe.index()) > 0
    }

    /// The EN_RXADDR register value.
    pub const fn rx_pipes_enabled(&self) -> u8 {
        self.rx_pipes_enabled
    }

    pub const fn tx_address(&self) -> [u8; 5] {
        self.tx_address
    }

    /// The bytes stored for `pipe`.
    ///
    /// Pipes 2 - 5 get a 1 byte slice; the rest of their address comes from pipe 1.
    pub fn rx_address(&self, pipe: Pipe) -> &[u8] {
        match pipe {
            Pipe::P0 => &self.pipe0,
            Pipe::P1 => &self.pipe1,
            _ => {
                let index = pipe.index() as usize - 2;
                &self.partial[index..=index]
            }
        }
    }
}

/// Everything [`EsbInit::with_config()`](fn@crate::radio::prelude::EsbInit::with_config)
/// writes to the radio, as one `Copy` value.
///
/// Values are changed through consuming `with_*()` methods, starting from
/// [`RadioConfig::default()`]. Out of range values are clamped, never rejected.
/// ```ignore
/// let config = RadioConfig::default()
///     .with_channel(42)
///     .with_data_rate(DataRate::Kbps250);
/// radio.with_config(&config)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    pub(crate) config_reg: Config,
    pub(crate) auto_retries: SetupRetry,
    pub(crate) rf_setup: RfSetup,
    pub(crate) feature: Feature,
    address_width: AddressWidth,
    channel: u8,
    payload_size: u8,
    auto_ack: u8,
    pipes: PipeConfig,
}

impl Default for RadioConfig {
    /// | setting | default |
    /// |--------:|:--------|
    /// | channel | `76` (2476 MHz) |
    /// | address width | 5 bytes |
    /// | data rate | 1 Mbps |
    /// | PA level | [`PaLevel::Max`], LNA on |
    /// | CRC | 16 bit |
    /// | static payload size | `32` on every pipe |
    /// | auto-ack | every pipe (`0x3F`) |
    /// | auto-retries | delay `5` (1500 us), count `15` |
    /// | dynamic payloads, ACK payloads, ask-no-ack | off |
    /// | IRQ events | [`Irq::all()`] |
    /// | pipes | [`PipeConfig::default()`] |
    fn default() -> Self {
        Self {
            config_reg: Config::default(),
            auto_retries: SetupRetry::default(),
            rf_setup: RfSetup::default(),
            feature: Feature::default(),
            address_width: AddressWidth::Bytes5,
            channel: 76,
            payload_size: MAX_PAYLOAD_SIZE as u8,
            auto_ack: 0x3F,
            pipes: PipeConfig::default(),
        }
    }
}

impl RadioConfig {
    pub const fn crc_length(&self) -> CrcLength {
        self.config_reg.crc_length()
    }

    /// Auto-ack makes the radio use CRC regardless of this setting.
    pub fn with_crc_length(self, length: CrcLength) -> Self {
        Self {
            config_reg: self.config_reg.with_crc_length(length),
            ..self
        }
    }

    pub const fn data_rate(&self) -> DataRate {
        self.rf_setup.data_rate()
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self {
            rf_setup: self.rf_setup.with_data_rate(data_rate),
            ..self
        }
    }

    pub const fn pa_level(&self) -> PaLevel {
        self.rf_setup.pa_level()
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self {
            rf_setup: self.rf_setup.with_pa_level(level),
            ..self
        }
    }

    pub const fn lna_enable(&self) -> bool {
        self.rf_setup.lna_enable()
    }

    /// Only the older nRF24L01 and its Si24R1 clones have a switchable LNA.
    pub fn with_lna_enable(self, enable: bool) -> Self {
        Self {
            rf_setup: self.rf_setup.with_lna_enable(enable),
            ..self
        }
    }

    pub const fn address_width(&self) -> AddressWidth {
        self.address_width
    }

    pub fn with_address_width(self, width: AddressWidth) -> Self {
        Self {
            address_width: width,
            ..self
        }
    }

    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Channels above 125 become 125. The carrier sits at `2400 + channel` MHz.
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value.min(MAX_CHANNEL),
            ..self
        }
    }

    pub const fn payload_size(&self) -> u8 {
        self.payload_size
    }

    /// The static payload size of all 6 pipes, at most 32.
    pub fn with_payload_size(self, value: u8) -> Self {
        Self {
            payload_size: value.min(MAX_PAYLOAD_SIZE as u8),
            ..self
        }
    }

    pub const fn auto_retry_delay(&self) -> u8 {
        self.auto_retries.ard()
    }

    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retries.arc()
    }

    /// Both values are clamped to 15.
    ///
    /// The wait between attempts is `250 + delay * 250` microseconds.
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        Self {
            auto_retries: self
                .auto_retries
                .with_ard(delay.min(15))
                .with_arc(count.min(15)),
            ..self
        }
    }

    pub const fn irq_events(&self) -> Irq {
        self.config_reg.irq_events()
    }

    /// Only `events` will pull the IRQ pin LOW.
    ///
    /// See [`EsbStatus::set_irq_events()`](fn@crate::radio::prelude::EsbStatus::set_irq_events).
    pub fn with_irq_events(self, events: Irq) -> Self {
        Self {
            config_reg: self.config_reg.with_irq_events(events),
            ..self
        }
    }

    pub const fn ask_no_ack(&self) -> bool {
        self.feature.ask_no_ack()
    }

    /// Needed by [`EsbRadio::transmit_no_ack()`](fn@crate::radio::prelude::EsbRadio::transmit_no_ack).
    pub fn with_ask_no_ack(self, enable: bool) -> Self {
        Self {
            feature: self.feature.with_ask_no_ack(enable),
            ..self
        }
    }

    pub const fn dynamic_payloads(&self) -> bool {
        self.feature.dynamic_payloads()
    }

    /// Dynamic payload lengths on every pipe.
    ///
    /// Turning this off also turns off ACK payloads.
    pub fn with_dynamic_payloads(self, enable: bool) -> Self {
        Self {
            feature: self.feature.with_dynamic_payloads(enable),
            ..self
        }
    }

    /// The EN_AA register value.
    pub const fn auto_ack(&self) -> u8 {
        self.auto_ack
    }

    /// One bit per pipe, bit 0 being pipe 0. Bits 6 and 7 are dropped.
    pub fn with_auto_ack(self, enable: u8) -> Self {
        Self {
            auto_ack: enable & 0x3F,
            ..self
        }
    }

    pub const fn ack_payloads(&self) -> bool {
        self.feature.ack_payloads()
    }

    /// Turning this on also turns on dynamic payloads and auto-ack for every pipe,
    /// since the radio needs both to attach a payload to an ACK.
    pub fn with_ack_payloads(self, enable: bool) -> Self {
        let auto_ack = if enable { 0x3F } else { self.auto_ack };
        Self {
            auto_ack,
            feature: self.feature.with_ack_payloads(enable),
            ..self
        }
    }

    pub const fn pipes(&self) -> PipeConfig {
        self.pipes
    }

    pub fn with_pipes(self, pipes: PipeConfig) -> Self {
        Self { pipes, ..self }
    }

    /// See [`PipeConfig::set_rx_address()`].
    pub fn with_rx_address(self, pipe: Pipe, address: &[u8]) -> Self {
        let mut pipes = self.pipes;
        pipes.set_rx_address(pipe, address);
        Self { pipes, ..self }
    }

    pub fn close_rx_pipe(self, pipe: Pipe) -> Self {
        let mut pipes = self.pipes;
        pipes.close_rx_pipe(pipe);
        Self { pipes, ..self }
    }

    pub const fn is_rx_pipe_enabled(&self, pipe: Pipe) -> bool {
        self.pipes.is_rx_pipe_enabled(pipe)
    }

    /// See [`PipeConfig::set_tx_address()`].
    pub fn with_tx_address(self, address: &[u8]) -> Self {
        let mut pipes = self.pipes;
        pipes.set_tx_address(address);
        Self { pipes, ..self }
    }
}
