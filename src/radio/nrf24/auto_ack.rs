use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    radio::{
        prelude::{EsbAutoAck, EsbRegister},
        Nrf24, Nrf24Error,
    },
    types::Pipe,
};

use super::{bit_fields::SetupRetry, Register};

impl<SPI, CE, DELAY, IRQ> EsbAutoAck for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type AutoAckErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        self.write_register(Register::EnAa, &[0x3F * enable as u8])?;
        Ok(())
    }

    fn set_auto_ack_pipe(&mut self, pipe: Pipe, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        if enable {
            self.set_bit(Register::EnAa, pipe.index())
        } else {
            self.clear_bit(Register::EnAa, pipe.index())
        }
    }

    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType> {
        let setup = SetupRetry::new()
            .with_ard(delay.min(15))
            .with_arc(count.min(15));
        self.write_register(Register::SetupRetr, &[setup.into_bits()])?;
        Ok(())
    }
}
