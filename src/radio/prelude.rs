//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```ignore
//! use nrf24::radio::prelude::*;
//! ```
//!
//! The traits are layered. [`EsbRegister`] and [`EsbCommand`] expose the raw
//! register and command protocol, and every other trait composes those two.

use crate::types::{
    AddressWidth, CrcLength, DataRate, FifoState, FifoStatus, Irq, Mode, PaLevel, Pipe,
    StatusFlags,
};

use super::{RadioConfig, Register};

/// A trait to represent raw register access.
///
/// Every function issues one or two SPI transactions and returns
/// (or discards) the STATUS byte that the radio shifts out first.
pub trait EsbRegister {
    type RegisterErrorType;

    /// Read `buf.len()` bytes of the `register`.
    fn read_register(
        &mut self,
        register: Register,
        buf: &mut [u8],
    ) -> Result<StatusFlags, Self::RegisterErrorType>;

    /// Write the bytes in `buf` to the `register`.
    fn write_register(
        &mut self,
        register: Register,
        buf: &[u8],
    ) -> Result<StatusFlags, Self::RegisterErrorType>;

    /// Read a single `bit` of a 1 byte `register`.
    ///
    /// <div class="warning">
    ///
    /// Panics if `bit` is not in range [0, 7].
    ///
    /// </div>
    fn read_bit(&mut self, register: Register, bit: u8) -> Result<bool, Self::RegisterErrorType>;

    /// Set a single `bit` of a 1 byte `register`.
    ///
    /// The register is read first, and nothing is written if the bit is already set.
    /// Panics if `bit` is not in range [0, 7].
    fn set_bit(&mut self, register: Register, bit: u8) -> Result<(), Self::RegisterErrorType>;

    /// Clear a single `bit` of a 1 byte `register`.
    ///
    /// The register is read first, and nothing is written if the bit is already clear.
    /// Panics if `bit` is not in range [0, 7].
    fn clear_bit(&mut self, register: Register, bit: u8) -> Result<(), Self::RegisterErrorType>;

    /// Update a group of bits in a 1 byte `register`.
    ///
    /// The bits selected by `mask` are replaced with the bits of `value`.
    /// Both are expected to be shifted into position already, so groups can be
    /// combined with `|`:
    /// ```ignore
    /// // set EN_DPL and EN_ACK_PAY in one write
    /// radio.write_bits(Register::Feature, 0b110, 0b110)?;
    /// ```
    /// Unlike [`EsbRegister::set_bit()`], the register is always written back.
    fn write_bits(
        &mut self,
        register: Register,
        mask: u8,
        value: u8,
    ) -> Result<(), Self::RegisterErrorType>;
}

/// A trait to represent the radio's fixed command set.
///
/// None of these functions validate the radio's state.
/// Payload buffers longer than 32 bytes cause a panic.
pub trait EsbCommand {
    type CommandErrorType;

    /// Read `buf.len()` bytes from the top of the RX FIFO.
    fn read_rx_payload(&mut self, buf: &mut [u8]) -> Result<StatusFlags, Self::CommandErrorType>;

    /// Put a payload into the TX FIFO.
    fn write_tx_payload(&mut self, buf: &[u8]) -> Result<StatusFlags, Self::CommandErrorType>;

    /// Put a payload into the TX FIFO that will not ask for an ACK packet.
    ///
    /// This requires [`EsbPayloadLength::set_payload_with_no_ack()`].
    fn write_tx_payload_no_ack(
        &mut self,
        buf: &[u8],
    ) -> Result<StatusFlags, Self::CommandErrorType>;

    /// Queue a payload for the next ACK packet sent on `pipe`.
    ///
    /// Up to 3 ACK payloads can be pending at once.
    fn write_ack_payload(
        &mut self,
        pipe: Pipe,
        buf: &[u8],
    ) -> Result<StatusFlags, Self::CommandErrorType>;

    /// Get the length of the payload at the top of the RX FIFO.
    fn read_payload_width(&mut self) -> Result<u8, Self::CommandErrorType>;

    /// Discard all 3 layers of the RX FIFO.
    fn flush_rx(&mut self) -> Result<StatusFlags, Self::CommandErrorType>;

    /// Discard all 3 layers of the TX FIFO.
    fn flush_tx(&mut self) -> Result<StatusFlags, Self::CommandErrorType>;

    /// Re-use the last transmitted payload as long as CE is pulsed.
    fn reuse_tx_payload(&mut self) -> Result<StatusFlags, Self::CommandErrorType>;

    /// A no-operation used to read the STATUS byte.
    fn nop(&mut self) -> Result<StatusFlags, Self::CommandErrorType>;
}

/// A trait to represent power management.
///
/// The radio's power states are implied by the PWR_UP bit and the CE pin:
///
/// | state      | PWR_UP | CE   |
/// |------------|:------:|:----:|
/// | Power-Down | 0      | any  |
/// | Standby-I  | 1      | low  |
/// | Standby-II | 1      | high (TX FIFO empty) |
/// | RX / TX    | 1      | high |
pub trait EsbPower {
    type PowerErrorType;

    /// Put the radio in Power-Down mode (CE low and PWR_UP cleared).
    ///
    /// In Power-Down mode, the radio consumes about 900 nA.
    /// All register values are kept.
    fn sleep(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Set the PWR_UP bit, then wait 5 milliseconds for the oscillator to start.
    ///
    /// The delay is always performed, even if the radio was already powered up.
    fn wakeup(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Clear the PWR_UP bit without touching the CE pin.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Enter Standby-I mode (CE low and PWR_UP set).
    fn standby_i(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Enter Standby-II mode (CE high and PWR_UP set).
    ///
    /// With an empty TX FIFO in TX mode, the radio idles here. In RX mode the radio
    /// starts listening.
    fn standby_ii(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// A trait to represent the radio's primary role and its CE pin.
pub trait EsbMode {
    type ModeErrorType;

    /// Set the PRIM_RX bit according to `mode`.
    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::ModeErrorType>;

    /// Get the primary role from the PRIM_RX bit.
    fn get_mode(&mut self) -> Result<Mode, Self::ModeErrorType>;

    /// Drive the CE pin high.
    fn start_listening(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Drive the CE pin low.
    fn stop_listening(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Pulse the CE pin high for [`CE_PULSE_WIDTH_US`](value@crate::radio::CE_PULSE_WIDTH_US).
    ///
    /// In TX mode, this pulse transmits the payload at the top of the TX FIFO.
    fn transmit_pulse(&mut self) -> Result<(), Self::ModeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency).
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// The `channel` is clamped to the range [0, 125].
    ///
    /// Both FIFOs are flushed afterward because their content was meant for the
    /// previous channel.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of data pipes and their addresses.
pub trait EsbPipe {
    type PipeErrorType;

    /// Set the address width (applies to all pipes).
    fn set_address_width(&mut self, width: AddressWidth) -> Result<(), Self::PipeErrorType>;

    /// Get the currently configured address width.
    ///
    /// Returns a binary corruption error if the radio reports the illegal width of 2 bytes.
    fn get_address_width(&mut self) -> Result<AddressWidth, Self::PipeErrorType>;

    /// Set the RX address of a `pipe`.
    ///
    /// ### About pipe addresses
    /// Pipes 0 and 1 store a full address. The given `address` must be 3 to 5 bytes
    /// long and only the configured address width is written.
    ///
    /// Pipes 2 - 5 only store a single byte; the rest of their address is borrowed
    /// from pipe 1. The given `address` must be exactly 1 byte long.
    ///
    /// Any other `address` length causes a panic.
    fn set_rx_address(&mut self, pipe: Pipe, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Get the RX address of a `pipe`.
    ///
    /// `buf` must be at least 3 bytes long. Only the configured address width is
    /// read into `buf`, and the number of bytes written to `buf` is returned.
    ///
    /// For pipes 2 - 5, the bytes borrowed from pipe 1 come first and the pipe's own
    /// byte is stored last.
    fn get_rx_address(&mut self, pipe: Pipe, buf: &mut [u8]) -> Result<usize, Self::PipeErrorType>;

    /// Set the TX address. The `address` must be 3 to 5 bytes long and is clamped to
    /// the configured address width.
    fn set_tx_address(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Get the TX address. See [`EsbPipe::get_rx_address()`] about `buf`.
    fn get_tx_address(&mut self, buf: &mut [u8]) -> Result<usize, Self::PipeErrorType>;

    /// Open or close a `pipe` for receiving.
    fn set_rx_pipe_enabled(&mut self, pipe: Pipe, enable: bool)
        -> Result<(), Self::PipeErrorType>;

    /// Is the `pipe` open for receiving?
    fn is_rx_pipe_enabled(&mut self, pipe: Pipe) -> Result<bool, Self::PipeErrorType>;
}

/// A trait to represent manipulation of payload lengths and the dynamic payload feature.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the static payload size of a `pipe`.
    ///
    /// The `size` is clamped to 32 bytes. A size of 0 leaves the pipe unused.
    fn set_payload_size(&mut self, pipe: Pipe, size: u8)
        -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the static payload size of a `pipe`.
    fn get_payload_size(&mut self, pipe: Pipe) -> Result<u8, Self::PayloadLengthErrorType>;

    /// Enable or disable both dynamic payload lengths and ACK payloads in one write.
    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType>;

    /// Enable or disable dynamic payloads for one `pipe`.
    ///
    /// Dynamic payloads require auto-ack, so this also toggles the pipe's auto-ack bit.
    fn set_dynamic_payload_on_pipe(
        &mut self,
        pipe: Pipe,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType>;

    /// Toggle the EN_DPL feature bit alone.
    fn set_dynamic_payload_length(
        &mut self,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType>;

    /// Toggle the EN_ACK_PAY feature bit alone.
    fn set_payload_with_ack(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType>;

    /// Toggle the EN_DYN_ACK feature bit alone.
    fn set_payload_with_no_ack(&mut self, enable: bool)
        -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the length of the next available payload in the RX FIFO.
    ///
    /// A length greater than 32 means the payload is corrupt and should be
    /// flushed; a binary corruption error is returned in that case.
    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadLengthErrorType>;
}

/// A trait to represent manipulation of the automatic acknowledgement feature.
pub trait EsbAutoAck {
    type AutoAckErrorType;

    /// Enable or disable auto-ack for all pipes.
    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Enable or disable auto-ack for a single `pipe`.
    fn set_auto_ack_pipe(&mut self, pipe: Pipe, enable: bool)
        -> Result<(), Self::AutoAckErrorType>;

    /// Set the number of retries and the delay between them.
    ///
    /// Both values are clamped to [0, 15]. The `delay` is in steps of 250
    /// microseconds, starting at 250 (`0` means 250 us, `15` means 4000 us).
    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType>;
}

/// A trait to represent manipulation of the RF data rate.
pub trait EsbDataRate {
    type DataRateErrorType;

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;
}

/// A trait to represent manipulation of the Power Amplifier level.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;
}

/// A trait to represent manipulation of the Cyclical Redundancy Checksum.
pub trait EsbCrcLength {
    type CrcLengthErrorType;

    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;
}

/// A trait to represent queries about the FIFOs.
pub trait EsbFifo {
    type FifoErrorType;

    /// Read the FIFO_STATUS register.
    fn get_fifo_status(&mut self) -> Result<FifoStatus, Self::FifoErrorType>;

    fn is_tx_fifo_full(&mut self) -> Result<bool, Self::FifoErrorType>;

    fn is_rx_fifo_empty(&mut self) -> Result<bool, Self::FifoErrorType>;

    /// Get the state of the TX FIFO (`about_tx == true`) or the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;
}

/// A trait to represent the STATUS byte and the interrupt events.
pub trait EsbStatus {
    type StatusErrorType;

    /// Get a fresh STATUS byte.
    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Is the "RX Data Ready" event flagged?
    fn is_data_ready(&mut self) -> Result<bool, Self::StatusErrorType>;

    /// Get the pipe that the next available RX payload belongs to.
    ///
    /// Returns `None` if the RX FIFO is empty.
    fn get_data_pipe_with_payload(&mut self) -> Result<Option<Pipe>, Self::StatusErrorType>;

    /// Get the currently flagged interrupt events. Nothing is cleared.
    fn get_irq_flag(&mut self) -> Result<Irq, Self::StatusErrorType>;

    /// Clear the given interrupt events.
    ///
    /// Events not included in `flags` are left untouched, so the IRQ pin stays
    /// active if other events are still flagged.
    fn clear_irq_flag(&mut self, flags: Irq) -> Result<(), Self::StatusErrorType>;

    /// Clear all interrupt events.
    fn clear_all_irqs(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Clear all interrupt events and return the STATUS byte from before the clearing.
    fn get_status_clear_irq(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Check for pending interrupt events.
    ///
    /// If the radio was given an IRQ pin, the pin is read first and the SPI bus is
    /// only used if the pin is active (LOW). Without an IRQ pin, this is the same as
    /// [`EsbStatus::get_irq_flag()`].
    fn poll_interrupt(&mut self) -> Result<Irq, Self::StatusErrorType>;

    /// Configure which events trigger the radio's IRQ pin.
    ///
    /// Events not included in `events` are masked from the IRQ pin, but they are
    /// still flagged in the STATUS byte.
    fn set_irq_events(&mut self, events: Irq) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent payload transfers.
pub trait EsbRadio {
    type RadioErrorType;

    /// Put a payload (1 to 32 bytes) into the TX FIFO without transmitting it.
    fn put_in_tx_fifo(&mut self, payload: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Put a payload (1 to 32 bytes) into the TX FIFO and pulse the CE pin to send it.
    ///
    /// Nothing is returned about the outcome. Check the "TX Data Sent"
    /// and "TX Data Failed" events via [`EsbStatus::get_irq_flag()`].
    fn transmit(&mut self, payload: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Like [`EsbRadio::transmit()`], but the receiver is asked not to acknowledge it.
    ///
    /// The payload must be 1 to 32 bytes long.
    fn transmit_no_ack(&mut self, payload: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Read the next available payload into `buf`.
    ///
    /// The CE pin is driven LOW during the read, then driven HIGH again so the radio
    /// keeps listening.
    fn get_rx_payload(&mut self, buf: &mut [u8]) -> Result<(), Self::RadioErrorType>;

    /// Queue an ACK payload for `pipe`.
    ///
    /// Payloads longer than 32 bytes are truncated. An empty payload queues nothing.
    fn rx_write_payload(&mut self, pipe: Pipe, payload: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Transmit the last payload again.
    fn reuse_last_transmitted_payload(&mut self) -> Result<(), Self::RadioErrorType>;

    /// The number of retries made for the last transmission.
    fn get_retransmissions_count(&mut self) -> Result<u8, Self::RadioErrorType>;

    /// The number of packets lost on the current channel (saturates at 15).
    ///
    /// Reset by [`EsbChannel::set_channel()`].
    fn get_lost_packets_count(&mut self) -> Result<u8, Self::RadioErrorType>;

    /// Was a signal above -64 dBm detected on the current channel?
    fn received_power_detector(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Same as [`EsbRadio::received_power_detector()`].
    ///
    /// Meant for channel scanning while the radio is in RX mode.
    fn test_carrier(&mut self) -> Result<bool, Self::RadioErrorType> {
        self.received_power_detector()
    }
}

/// A trait to represent printing of the radio's current configuration.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about radio's current configuration.
    ///
    /// This should only be used for debugging development.
    /// This does nothing unless the `std` or `defmt` feature is enabled.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}

pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio's hardware.
    ///
    /// This is similar to [`EsbInit::with_config()`] (with [`RadioConfig::default()`]),
    /// but this function also
    ///
    /// - waits 5 milliseconds for radio to settle
    /// - checks if radio has responded correctly after configuration
    /// - powers up the radio into Standby-I mode
    ///
    /// This function should only be called once after instantiating the radio object.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Reconfigure the radio using the given `config` object.
    ///
    /// The radio is left powered down in TX mode, and both FIFOs are flushed.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}
