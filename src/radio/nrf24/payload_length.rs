use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    log::warn,
    radio::{
        prelude::{EsbAutoAck, EsbCommand, EsbPayloadLength, EsbRegister},
        Nrf24, Nrf24Error,
    },
    types::Pipe,
};

use super::{mnemonics, Register, MAX_PAYLOAD_SIZE};

impl<SPI, CE, DELAY, IRQ> EsbPayloadLength for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type PayloadLengthErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn set_payload_size(
        &mut self,
        pipe: Pipe,
        size: u8,
    ) -> Result<(), Self::PayloadLengthErrorType> {
        let size = size.min(MAX_PAYLOAD_SIZE as u8);
        self.write_register(Register::rx_pw(pipe), &[size])?;
        Ok(())
    }

    fn get_payload_size(&mut self, pipe: Pipe) -> Result<u8, Self::PayloadLengthErrorType> {
        let mut size = [0u8];
        self.read_register(Register::rx_pw(pipe), &mut size)?;
        Ok(size[0])
    }

    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType> {
        let mask = (1 << mnemonics::EN_DPL) | (1 << mnemonics::EN_ACK_PAY);
        self.write_bits(Register::Feature, mask, if enable { mask } else { 0 })
    }

    fn set_dynamic_payload_on_pipe(
        &mut self,
        pipe: Pipe,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType> {
        self.set_auto_ack_pipe(pipe, enable)?;
        if enable {
            self.set_bit(Register::Dynpd, pipe.index())
        } else {
            self.clear_bit(Register::Dynpd, pipe.index())
        }
    }

    fn set_dynamic_payload_length(
        &mut self,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType> {
        if enable {
            self.set_bit(Register::Feature, mnemonics::EN_DPL)
        } else {
            self.clear_bit(Register::Feature, mnemonics::EN_DPL)
        }
    }

    fn set_payload_with_ack(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType> {
        if enable {
            self.set_bit(Register::Feature, mnemonics::EN_ACK_PAY)
        } else {
            self.clear_bit(Register::Feature, mnemonics::EN_ACK_PAY)
        }
    }

    fn set_payload_with_no_ack(
        &mut self,
        enable: bool,
    ) -> Result<(), Self::PayloadLengthErrorType> {
        if enable {
            self.set_bit(Register::Feature, mnemonics::EN_DYN_ACK)
        } else {
            self.clear_bit(Register::Feature, mnemonics::EN_DYN_ACK)
        }
    }

    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadLengthErrorType> {
        let width = self.read_payload_width()?;
        if width as usize > MAX_PAYLOAD_SIZE {
            warn!("RX payload width {=u8} is corrupt", width);
            return Err(Nrf24Error::BinaryCorruption);
        }
        Ok(width)
    }
}
