use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::Register;
use crate::radio::{
    prelude::{EsbDataRate, EsbRegister},
    Nrf24, Nrf24Error,
};
use crate::DataRate;

impl<SPI, CE, DELAY, IRQ> EsbDataRate for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    /// The RF_DR_LOW bit takes precedence over RF_DR_HIGH.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        let mut rf_setup = [0u8];
        self.read_register(Register::RfSetup, &mut rf_setup)?;
        Ok(DataRate::from_bits(rf_setup[0]))
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        self.write_bits(Register::RfSetup, DataRate::MASK, data_rate.into_bits())
    }
}
