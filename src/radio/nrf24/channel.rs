use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::radio::{
    prelude::{EsbChannel, EsbCommand, EsbRegister},
    Nrf24, Nrf24Error,
};

use super::{Register, MAX_CHANNEL};

impl<SPI, CE, DELAY, IRQ> EsbChannel for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    /// Channels above 125 are clamped. Both FIFOs are flushed afterwards.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.write_register(Register::RfCh, &[channel.min(MAX_CHANNEL)])?;
        self.flush_rx()?;
        self.flush_tx()?;
        Ok(())
    }

    /// See also [`EsbChannel::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        let mut channel = [0u8];
        self.read_register(Register::RfCh, &mut channel)?;
        Ok(channel[0])
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{EsbChannel, Register};
    use crate::{
        radio::commands,
        spi_test_expects,
        test::{fake::mk_fake_radio, mk_radio},
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    fn get_channel() {
        let spi_expectations = spi_test_expects![
            // get the RF_CH register value
            (vec![Register::RfCh.addr(), 0u8], vec![0xEu8, 76u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_channel().unwrap(), 76u8);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn set_channel_clamps_and_flushes() {
        let mut fake = mk_fake_radio();
        for channel in [126u8, 200, u8::MAX] {
            fake.radio.set_channel(channel).unwrap();
            assert_eq!(
                fake.frames(),
                vec![
                    vec![Register::RfCh.addr() | commands::W_REGISTER, 125],
                    vec![commands::FLUSH_RX],
                    vec![commands::FLUSH_TX],
                ]
            );
            assert_eq!(fake.regs.borrow().get(Register::RfCh), 125);
        }
    }
}
