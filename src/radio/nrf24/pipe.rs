use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    log::warn,
    radio::{
        prelude::{EsbPipe, EsbRegister},
        Nrf24, Nrf24Error,
    },
    types::{AddressWidth, Pipe},
};

use super::Register;

impl<SPI, CE, DELAY, IRQ> Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    /// Write a 3 to 5 byte `address` to `register`, clamped to the configured width.
    fn write_full_address(
        &mut self,
        register: Register,
        address: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error, IRQ::Error>> {
        assert!((3..=5).contains(&address.len()));
        let width = self.get_address_width()?.bytes();
        self.write_register(register, &address[..address.len().min(width)])?;
        Ok(())
    }
}

impl<SPI, CE, DELAY, IRQ> EsbPipe for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type PipeErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn set_address_width(&mut self, width: AddressWidth) -> Result<(), Self::PipeErrorType> {
        self.write_register(Register::SetupAw, &[width.into_bits()])?;
        Ok(())
    }

    fn get_address_width(&mut self) -> Result<AddressWidth, Self::PipeErrorType> {
        let mut value = [0u8];
        self.read_register(Register::SetupAw, &mut value)?;
        AddressWidth::from_bits(value[0]).ok_or_else(|| {
            warn!("SETUP_AW holds an illegal width: {=u8:#x}", value[0]);
            Nrf24Error::BinaryCorruption
        })
    }

    fn set_rx_address(&mut self, pipe: Pipe, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        if pipe.has_full_address() {
            self.write_full_address(Register::rx_addr(pipe), address)
        } else {
            assert!(address.len() == 1);
            self.write_register(Register::rx_addr(pipe), address)?;
            Ok(())
        }
    }

    fn get_rx_address(&mut self, pipe: Pipe, buf: &mut [u8]) -> Result<usize, Self::PipeErrorType> {
        assert!(buf.len() >= 3);
        let width = buf.len().min(self.get_address_width()?.bytes());
        if pipe.has_full_address() {
            self.read_register(Register::rx_addr(pipe), &mut buf[..width])?;
        } else {
            // all but the last byte are shared with pipe 1
            self.read_register(Register::RxAddrP1, &mut buf[..width - 1])?;
            self.read_register(Register::rx_addr(pipe), &mut buf[width - 1..width])?;
        }
        Ok(width)
    }

    fn set_tx_address(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        self.write_full_address(Register::TxAddr, address)
    }

    fn get_tx_address(&mut self, buf: &mut [u8]) -> Result<usize, Self::PipeErrorType> {
        assert!(buf.len() >= 3);
        let width = buf.len().min(self.get_address_width()?.bytes());
        self.read_register(Register::TxAddr, &mut buf[..width])?;
        Ok(width)
    }

    fn set_rx_pipe_enabled(&mut self, pipe: Pipe, enable: bool) -> Result<(), Self::PipeErrorType> {
        if enable {
            self.set_bit(Register::EnRxAddr, pipe.index())
        } else {
            self.clear_bit(Register::EnRxAddr, pipe.index())
        }
    }

    fn is_rx_pipe_enabled(&mut self, pipe: Pipe) -> Result<bool, Self::PipeErrorType> {
        self.read_bit(Register::EnRxAddr, pipe.index())
    }
}
