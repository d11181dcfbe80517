use core::{
    convert::Infallible,
    fmt::{Display, Formatter},
};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, InputPin, OutputPin},
    spi::SpiDevice,
};

mod auto_ack;
pub(crate) mod bit_fields;
mod channel;
mod command;
mod constants;
mod crc_length;
mod data_rate;
mod details;
mod fifo;
mod init;
mod mode;
mod pa_level;
mod payload_length;
mod pipe;
mod power;
mod radio;
mod register;
mod status;
pub use constants::{
    commands, mnemonics, Register, CE_PULSE_WIDTH_US, MAX_CHANNEL, MAX_PAYLOAD_SIZE,
    POWER_UP_DELAY_MS,
};

use crate::StatusFlags;

/// The errors that a radio operation can return.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO, DI> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error (the CE pin).
    Gpo(DO),
    /// Represents a DigitalInput error (the IRQ pin).
    Gpi(DI),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
}

/// The reasons [`Nrf24Builder::build()`] can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    MissingSpi,
    MissingCePin,
    MissingDelay,
}

impl Display for InitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            InitError::MissingSpi => write!(f, "no SPI device was given"),
            InitError::MissingCePin => write!(f, "no CE pin was given"),
            InitError::MissingDelay => write!(f, "no delay implementation was given"),
        }
    }
}

/// A placeholder for a radio that has no IRQ pin connected.
///
/// This type has no values, so it can never be read.
#[derive(Debug)]
pub enum NoIrq {}

impl ErrorType for NoIrq {
    type Error = Infallible;
}

impl InputPin for NoIrq {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        match *self {}
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        match *self {}
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// No register state is cached. Every query goes to the radio, and the STATUS byte
/// is taken fresh from each SPI transaction.
pub struct Nrf24<SPI, CE, DELAY, IRQ = NoIrq> {
    _spi: SPI,
    /// The CE pin for the radio.
    ///
    /// This is exposed for advanced manipulation of the RX and TX modes.
    /// Prefer [`EsbMode`](trait@crate::radio::prelude::EsbMode) and
    /// [`EsbPower`](trait@crate::radio::prelude::EsbPower), which drive this pin.
    pub ce_pin: CE,
    _irq_pin: Option<IRQ>,
    _delay_impl: DELAY,
}

impl<SPI, CE, DELAY> Nrf24<SPI, CE, DELAY, NoIrq> {
    /// Instantiate an [`Nrf24`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    pub fn new(spi: SPI, ce_pin: CE, delay_impl: DELAY) -> Self {
        Nrf24 {
            _spi: spi,
            ce_pin,
            _irq_pin: None,
            _delay_impl: delay_impl,
        }
    }
}

impl<SPI, CE, DELAY, IRQ> Nrf24<SPI, CE, DELAY, IRQ> {
    /// Like [`Nrf24::new()`], but with the radio's IRQ pin (active LOW) connected.
    ///
    /// The pin lets [`poll_interrupt()`](fn@crate::radio::prelude::EsbStatus::poll_interrupt)
    /// skip the SPI bus while no event is pending.
    pub fn with_irq_pin(spi: SPI, ce_pin: CE, irq_pin: IRQ, delay_impl: DELAY) -> Self {
        Nrf24 {
            _spi: spi,
            ce_pin,
            _irq_pin: Some(irq_pin),
            _delay_impl: delay_impl,
        }
    }

    /// Does this radio have an IRQ pin?
    pub fn has_irq_pin(&self) -> bool {
        self._irq_pin.is_some()
    }
}

impl<SPI, CE, DELAY, IRQ> Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    /// Perform one SPI transaction.
    ///
    /// The frame is the `command` byte followed by `tx` and then zeros, so that
    /// `max(tx.len(), rx.len())` data bytes are exchanged in total.
    /// The bytes clocked out after the STATUS byte are copied into `rx`.
    ///
    /// This is the only function that touches the SPI bus:
    /// ```ignore
    /// // flush_rx() is a 1 byte frame
    /// let status = radio.transact(commands::FLUSH_RX, &[], &mut [])?;
    /// ```
    ///
    /// <div class="warning">
    ///
    /// Panics if more than 32 data bytes are requested.
    ///
    /// </div>
    pub fn transact(
        &mut self,
        command: u8,
        tx: &[u8],
        rx: &mut [u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, CE::Error, IRQ::Error>> {
        let len = tx.len().max(rx.len());
        assert!(len <= MAX_PAYLOAD_SIZE);
        let mut frame = [0u8; MAX_PAYLOAD_SIZE + 1];
        frame[0] = command;
        frame[1..=tx.len()].copy_from_slice(tx);
        self._spi
            .transfer_in_place(&mut frame[..=len])
            .map_err(Nrf24Error::Spi)?;
        let rx_len = rx.len();
        rx.copy_from_slice(&frame[1..=rx_len]);
        Ok(StatusFlags::from_bits(frame[0]))
    }
}

/// A builder that checks all required capabilities are given before
/// an [`Nrf24`] object is created.
///
/// ```ignore
/// let radio = Nrf24Builder::new()
///     .spi(spi)
///     .ce_pin(ce_pin)
///     .delay(delay)
///     .build()?;
/// ```
pub struct Nrf24Builder<SPI, CE, DELAY, IRQ = NoIrq> {
    spi: Option<SPI>,
    ce_pin: Option<CE>,
    irq_pin: Option<IRQ>,
    delay: Option<DELAY>,
}

impl<SPI, CE, DELAY> Nrf24Builder<SPI, CE, DELAY, NoIrq> {
    pub fn new() -> Self {
        Nrf24Builder {
            spi: None,
            ce_pin: None,
            irq_pin: None,
            delay: None,
        }
    }
}

impl<SPI, CE, DELAY> Default for Nrf24Builder<SPI, CE, DELAY, NoIrq> {
    fn default() -> Self {
        Self::new()
    }
}

impl<SPI, CE, DELAY, IRQ> Nrf24Builder<SPI, CE, DELAY, IRQ> {
    pub fn spi(mut self, spi: SPI) -> Self {
        self.spi = Some(spi);
        self
    }

    pub fn ce_pin(mut self, ce_pin: CE) -> Self {
        self.ce_pin = Some(ce_pin);
        self
    }

    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Connect the radio's IRQ pin. This is optional.
    pub fn irq_pin<P>(self, irq_pin: P) -> Nrf24Builder<SPI, CE, DELAY, P> {
        Nrf24Builder {
            spi: self.spi,
            ce_pin: self.ce_pin,
            irq_pin: Some(irq_pin),
            delay: self.delay,
        }
    }

    pub fn build(self) -> Result<Nrf24<SPI, CE, DELAY, IRQ>, InitError> {
        let spi = self.spi.ok_or(InitError::MissingSpi)?;
        let ce_pin = self.ce_pin.ok_or(InitError::MissingCePin)?;
        let delay = self.delay.ok_or(InitError::MissingDelay)?;
        Ok(Nrf24 {
            _spi: spi,
            ce_pin,
            _irq_pin: self.irq_pin,
            _delay_impl: delay,
        })
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, InitError, Nrf24, Nrf24Builder};
    use crate::{
        spi_test_expects,
        test::{fake::mk_fake_radio, mk_radio},
    };
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::Mock as PinMock,
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };
    use std::{format, vec};

    #[test]
    fn transact_frames_command_and_data() {
        let spi_expectations = spi_test_expects![
            (vec![0x25u8, 1u8, 2u8, 0u8], vec![0xEu8, 7u8, 8u8, 9u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut rx = [0u8; 3];
        let status = radio.transact(0x25, &[1, 2], &mut rx).unwrap();
        assert_eq!(status.into_bits(), 0xE);
        assert_eq!(rx, [7, 8, 9]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn transact_command_only() {
        let spi_expectations = spi_test_expects![(vec![commands::NOP], vec![0x4Eu8]),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let status = radio.transact(commands::NOP, &[], &mut []).unwrap();
        assert!(status.rx_dr());
        spi.done();
        ce_pin.done();
    }

    #[test]
    #[should_panic]
    fn transact_oversized() {
        let mut fake = mk_fake_radio();
        let _ = fake
            .radio
            .transact(commands::W_TX_PAYLOAD, &[0u8; 33], &mut []);
    }

    #[test]
    fn builder_requires_capabilities() {
        let mut spi = SpiMock::new(&[]);
        let mut ce_pin = PinMock::new(&[]);

        let missing_spi = Nrf24Builder::<SpiMock<u8>, PinMock, NoopDelay>::new()
            .ce_pin(ce_pin.clone())
            .delay(NoopDelay::new())
            .build();
        assert_eq!(missing_spi.err(), Some(InitError::MissingSpi));

        let missing_ce = Nrf24Builder::<SpiMock<u8>, PinMock, NoopDelay>::new()
            .spi(spi.clone())
            .delay(NoopDelay::new())
            .build();
        assert_eq!(missing_ce.err(), Some(InitError::MissingCePin));

        let missing_delay = Nrf24Builder::<SpiMock<u8>, PinMock, NoopDelay>::new()
            .spi(spi.clone())
            .ce_pin(ce_pin.clone())
            .build();
        assert_eq!(missing_delay.err(), Some(InitError::MissingDelay));
        assert_eq!(
            format!("{}", InitError::MissingDelay),
            "no delay implementation was given"
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn builder_irq_pin_is_optional() {
        let mut spi = SpiMock::<u8>::new(&[]);
        let mut ce_pin = PinMock::new(&[]);
        let mut irq_pin = PinMock::new(&[]);

        let radio = Nrf24Builder::new()
            .spi(spi.clone())
            .ce_pin(ce_pin.clone())
            .delay(NoopDelay::new())
            .build()
            .unwrap();
        assert!(!radio.has_irq_pin());

        let radio = Nrf24Builder::new()
            .spi(spi.clone())
            .ce_pin(ce_pin.clone())
            .irq_pin(irq_pin.clone())
            .delay(NoopDelay::new())
            .build()
            .unwrap();
        assert!(radio.has_irq_pin());

        let radio = Nrf24::new(spi.clone(), ce_pin.clone(), NoopDelay::new());
        assert!(!radio.has_irq_pin());
        spi.done();
        ce_pin.done();
        irq_pin.done();
    }
}
