use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    radio::{
        prelude::{EsbFifo, EsbRegister},
        Nrf24, Nrf24Error,
    },
    types::{FifoState, FifoStatus},
};

use super::{mnemonics, Register};

impl<SPI, CE, DELAY, IRQ> EsbFifo for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type FifoErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn get_fifo_status(&mut self) -> Result<FifoStatus, Self::FifoErrorType> {
        let mut value = [0u8];
        self.read_register(Register::FifoStatus, &mut value)?;
        Ok(FifoStatus::from_bits(value[0]))
    }

    fn is_tx_fifo_full(&mut self) -> Result<bool, Self::FifoErrorType> {
        self.read_bit(Register::FifoStatus, mnemonics::TX_FULL)
    }

    fn is_rx_fifo_empty(&mut self) -> Result<bool, Self::FifoErrorType> {
        self.read_bit(Register::FifoStatus, mnemonics::RX_EMPTY)
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        Ok(self.get_fifo_status()?.state(about_tx))
    }
}
