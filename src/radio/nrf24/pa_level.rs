use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::Register;
use crate::radio::{
    prelude::{EsbPaLevel, EsbRegister},
    Nrf24, Nrf24Error,
};
use crate::PaLevel;

impl<SPI, CE, DELAY, IRQ> EsbPaLevel for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        let mut rf_setup = [0u8];
        self.read_register(Register::RfSetup, &mut rf_setup)?;
        Ok(PaLevel::from_bits(rf_setup[0]))
    }

    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        self.write_bits(Register::RfSetup, PaLevel::MASK, pa_level.into_bits())
    }
}

impl<SPI, CE, DELAY, IRQ> Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    /// Control the builtin LNA feature on nRF24L01 (older non-plus variants) and Si24R1
    /// (cheap chinese clones of the nRF24L01).
    ///
    /// This has no effect on nRF24L01+ modules because the LNA is always enabled.
    pub fn set_lna(
        &mut self,
        enable: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error, IRQ::Error>> {
        self.write_bits(Register::RfSetup, 1, enable as u8)
    }
}
