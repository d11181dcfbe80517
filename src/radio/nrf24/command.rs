use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    radio::{prelude::EsbCommand, Nrf24, Nrf24Error},
    types::{Pipe, StatusFlags},
};

use super::commands;

impl<SPI, CE, DELAY, IRQ> EsbCommand for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type CommandErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn read_rx_payload(&mut self, buf: &mut [u8]) -> Result<StatusFlags, Self::CommandErrorType> {
        self.transact(commands::R_RX_PAYLOAD, &[], buf)
    }

    fn write_tx_payload(&mut self, buf: &[u8]) -> Result<StatusFlags, Self::CommandErrorType> {
        self.transact(commands::W_TX_PAYLOAD, buf, &mut [])
    }

    fn write_tx_payload_no_ack(
        &mut self,
        buf: &[u8],
    ) -> Result<StatusFlags, Self::CommandErrorType> {
        self.transact(commands::W_TX_PAYLOAD_NO_ACK, buf, &mut [])
    }

    fn write_ack_payload(
        &mut self,
        pipe: Pipe,
        buf: &[u8],
    ) -> Result<StatusFlags, Self::CommandErrorType> {
        self.transact(commands::W_ACK_PAYLOAD | pipe.index(), buf, &mut [])
    }

    fn read_payload_width(&mut self) -> Result<u8, Self::CommandErrorType> {
        let mut width = [0u8];
        self.transact(commands::R_RX_PL_WID, &[commands::NOP], &mut width)?;
        Ok(width[0])
    }

    fn flush_rx(&mut self) -> Result<StatusFlags, Self::CommandErrorType> {
        self.transact(commands::FLUSH_RX, &[], &mut [])
    }

    fn flush_tx(&mut self) -> Result<StatusFlags, Self::CommandErrorType> {
        self.transact(commands::FLUSH_TX, &[], &mut [])
    }

    fn reuse_tx_payload(&mut self) -> Result<StatusFlags, Self::CommandErrorType> {
        self.transact(commands::REUSE_TX_PL, &[], &mut [])
    }

    fn nop(&mut self) -> Result<StatusFlags, Self::CommandErrorType> {
        self.transact(commands::NOP, &[], &mut [])
    }
}
