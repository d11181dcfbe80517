use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    radio::{
        prelude::{EsbMode, EsbRegister},
        Nrf24, Nrf24Error,
    },
    types::Mode,
};

use super::{mnemonics, Register, CE_PULSE_WIDTH_US};

impl<SPI, CE, DELAY, IRQ> EsbMode for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type ModeErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::ModeErrorType> {
        match mode {
            Mode::Rx => self.set_bit(Register::Config, mnemonics::PRIM_RX),
            Mode::Tx => self.clear_bit(Register::Config, mnemonics::PRIM_RX),
        }
    }

    fn get_mode(&mut self) -> Result<Mode, Self::ModeErrorType> {
        if self.read_bit(Register::Config, mnemonics::PRIM_RX)? {
            Ok(Mode::Rx)
        } else {
            Ok(Mode::Tx)
        }
    }

    fn start_listening(&mut self) -> Result<(), Self::ModeErrorType> {
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)
    }

    fn stop_listening(&mut self) -> Result<(), Self::ModeErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }

    fn transmit_pulse(&mut self) -> Result<(), Self::ModeErrorType> {
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_us(CE_PULSE_WIDTH_US);
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }
}
