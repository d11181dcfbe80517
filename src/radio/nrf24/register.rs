use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    radio::{prelude::EsbRegister, Nrf24, Nrf24Error},
    types::StatusFlags,
};

use super::{commands, Register};

impl<SPI, CE, DELAY, IRQ> EsbRegister for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type RegisterErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn read_register(
        &mut self,
        register: Register,
        buf: &mut [u8],
    ) -> Result<StatusFlags, Self::RegisterErrorType> {
        let command = commands::R_REGISTER | (register.addr() & commands::REGISTER_MASK);
        self.transact(command, &[], buf)
    }

    fn write_register(
        &mut self,
        register: Register,
        buf: &[u8],
    ) -> Result<StatusFlags, Self::RegisterErrorType> {
        let command = commands::W_REGISTER | (register.addr() & commands::REGISTER_MASK);
        self.transact(command, buf, &mut [])
    }

    fn read_bit(&mut self, register: Register, bit: u8) -> Result<bool, Self::RegisterErrorType> {
        assert!(bit < 8);
        let mut value = [0u8];
        self.read_register(register, &mut value)?;
        Ok((value[0] >> bit) & 1 == 1)
    }

    fn set_bit(&mut self, register: Register, bit: u8) -> Result<(), Self::RegisterErrorType> {
        assert!(bit < 8);
        let mut value = [0u8];
        self.read_register(register, &mut value)?;
        let updated = value[0] | (1 << bit);
        if updated != value[0] {
            self.write_register(register, &[updated])?;
        }
        Ok(())
    }

    fn clear_bit(&mut self, register: Register, bit: u8) -> Result<(), Self::RegisterErrorType> {
        assert!(bit < 8);
        let mut value = [0u8];
        self.read_register(register, &mut value)?;
        let updated = value[0] & !(1 << bit);
        if updated != value[0] {
            self.write_register(register, &[updated])?;
        }
        Ok(())
    }

    fn write_bits(
        &mut self,
        register: Register,
        mask: u8,
        value: u8,
    ) -> Result<(), Self::RegisterErrorType> {
        let mut current = [0u8];
        self.read_register(register, &mut current)?;
        self.write_register(register, &[(current[0] & !mask) | value])?;
        Ok(())
    }
}
