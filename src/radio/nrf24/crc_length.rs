use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::Register;
use crate::radio::{
    prelude::{EsbCrcLength, EsbRegister},
    Nrf24, Nrf24Error,
};
use crate::CrcLength;

impl<SPI, CE, DELAY, IRQ> EsbCrcLength for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type CrcLengthErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType> {
        let mut config = [0u8];
        self.read_register(Register::Config, &mut config)?;
        Ok(CrcLength::from_bits(config[0]))
    }

    /// The radio forces CRC on while auto-ack is enabled for any pipe.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType> {
        self.write_bits(Register::Config, CrcLength::MASK, crc_length.into_bits())
    }
}
