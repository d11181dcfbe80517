use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::radio::{
    prelude::{EsbPower, EsbRegister},
    Nrf24, Nrf24Error,
};

use super::{mnemonics, Register, POWER_UP_DELAY_MS};

impl<SPI, CE, DELAY, IRQ> EsbPower for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type PowerErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    /// Power-Down draws about 900 nA, against roughly 26 uA in Standby-I.
    fn sleep(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.clear_bit(Register::Config, mnemonics::PWR_UP)
    }

    fn wakeup(&mut self) -> Result<(), Self::PowerErrorType> {
        self.set_bit(Register::Config, mnemonics::PWR_UP)?;
        // Tpd2stby can be up to 5 ms with an external clock
        self._delay_impl.delay_ms(POWER_UP_DELAY_MS);
        Ok(())
    }

    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.clear_bit(Register::Config, mnemonics::PWR_UP)
    }

    fn standby_i(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.set_bit(Register::Config, mnemonics::PWR_UP)
    }

    fn standby_ii(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self.set_bit(Register::Config, mnemonics::PWR_UP)
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        self.read_bit(Register::Config, mnemonics::PWR_UP)
    }
}
