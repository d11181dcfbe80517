use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    radio::{
        prelude::{EsbCommand, EsbRegister, EsbStatus},
        Nrf24, Nrf24Error,
    },
    types::{Irq, Pipe, StatusFlags},
};

use super::Register;

impl<SPI, CE, DELAY, IRQ> EsbStatus for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type StatusErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.nop()
    }

    fn is_data_ready(&mut self) -> Result<bool, Self::StatusErrorType> {
        Ok(self.nop()?.rx_dr())
    }

    fn get_data_pipe_with_payload(&mut self) -> Result<Option<Pipe>, Self::StatusErrorType> {
        let mut status = [0u8];
        self.read_register(Register::Status, &mut status)?;
        Ok(StatusFlags::from_bits(status[0]).pipe_with_payload())
    }

    fn get_irq_flag(&mut self) -> Result<Irq, Self::StatusErrorType> {
        Ok(self.nop()?.irq())
    }

    /// STATUS flags are cleared by writing 1 to them, so the written value
    /// keeps the non-IRQ bits of the current status and sets only the bits of `flags`.
    fn clear_irq_flag(&mut self, flags: Irq) -> Result<(), Self::StatusErrorType> {
        let status = self.nop()?.into_bits();
        let value = (status & !StatusFlags::IRQ_MASK) | (flags.bits() & StatusFlags::IRQ_MASK);
        self.write_register(Register::Status, &[value])?;
        Ok(())
    }

    fn clear_all_irqs(&mut self) -> Result<(), Self::StatusErrorType> {
        self.write_register(Register::Status, &[StatusFlags::IRQ_MASK])?;
        Ok(())
    }

    fn get_status_clear_irq(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.write_register(Register::Status, &[StatusFlags::IRQ_MASK])
    }

    fn poll_interrupt(&mut self) -> Result<Irq, Self::StatusErrorType> {
        let pending = match self._irq_pin.as_mut() {
            Some(irq_pin) => irq_pin.is_low().map_err(Nrf24Error::Gpi)?,
            None => true,
        };
        if pending {
            self.get_irq_flag()
        } else {
            Ok(Irq::empty())
        }
    }

    fn set_irq_events(&mut self, events: Irq) -> Result<(), Self::StatusErrorType> {
        let masked = !events.bits() & StatusFlags::IRQ_MASK;
        self.write_bits(Register::Config, StatusFlags::IRQ_MASK, masked)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{EsbStatus, Irq, Pipe, Register};
    use crate::{
        radio::commands,
        spi_test_expects,
        test::{fake::mk_fake_radio_with_irq, mk_radio, mk_radio_with_irq},
    };
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    fn status_queries() {
        let spi_expectations = spi_test_expects![
            (vec![commands::NOP], vec![0x4Eu8]),
            (vec![commands::NOP], vec![0x0Eu8]),
            (vec![Register::Status.addr(), 0u8], vec![0x44u8, 0x44u8]),
            (vec![Register::Status.addr(), 0u8], vec![0x0Eu8, 0x0Eu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.get_status().unwrap().rx_dr());
        assert!(!radio.is_data_ready().unwrap());
        assert_eq!(radio.get_data_pipe_with_payload().unwrap(), Some(Pipe::P2));
        assert_eq!(radio.get_data_pipe_with_payload().unwrap(), None);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn irq_flag_discards_other_bits() {
        let spi_expectations = spi_test_expects![(vec![commands::NOP], vec![0b0100_1110u8]),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_irq_flag().unwrap(), Irq::RX_DR);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn clear_only_the_given_flag() {
        let status_write = Register::Status.addr() | commands::W_REGISTER;
        let spi_expectations = spi_test_expects![
            // the flag is already set
            (vec![commands::NOP], vec![0x4Eu8]),
            (vec![status_write, 0x4Eu8], vec![0x4Eu8, 0u8]),
            // the flag is not set: it is OR'd in
            (vec![commands::NOP], vec![0x0Eu8]),
            (vec![status_write, 0x4Eu8], vec![0x0Eu8, 0u8]),
            // other pending flags are not cleared
            (vec![commands::NOP], vec![0x3Eu8]),
            (vec![status_write, 0x4Eu8], vec![0x3Eu8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        for _ in 0..3 {
            radio.clear_irq_flag(Irq::RX_DR).unwrap();
        }
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn clear_flags_in_one_write() {
        let status_write = Register::Status.addr() | commands::W_REGISTER;
        let spi_expectations = spi_test_expects![
            (vec![commands::NOP], vec![0x7Eu8]),
            (vec![status_write, 0x3Eu8], vec![0x7Eu8, 0u8]),
            // clear_all_irqs()
            (vec![status_write, 0x70u8], vec![0x40u8, 0u8]),
            // get_status_clear_irq()
            (vec![status_write, 0x70u8], vec![0x60u8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.clear_irq_flag(Irq::TX_DS | Irq::MAX_RT).unwrap();
        radio.clear_all_irqs().unwrap();
        let status = radio.get_status_clear_irq().unwrap();
        assert!(status.rx_dr() && status.tx_ds());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn poll_irq_pin() {
        let ce_expectations = [];
        let irq_expectations = [
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
        ];
        let spi_expectations = spi_test_expects![(vec![commands::NOP], vec![0x2Eu8]),];
        let mocks = mk_radio_with_irq(&ce_expectations, &irq_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin, mut irq_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        // inactive pin: the SPI bus is not used
        assert!(radio.poll_interrupt().unwrap().is_empty());
        assert_eq!(radio.poll_interrupt().unwrap(), Irq::TX_DS);
        spi.done();
        ce_pin.done();
        irq_pin.done();
    }

    #[test]
    fn poll_without_irq_pin() {
        let spi_expectations = spi_test_expects![(vec![commands::NOP], vec![0x1Eu8]),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.poll_interrupt().unwrap(), Irq::MAX_RT);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn poll_fake_irq_pin() {
        let mut idle = mk_fake_radio_with_irq(true);
        assert!(idle.radio.poll_interrupt().unwrap().is_empty());
        assert!(idle.frames().is_empty());

        let mut active = mk_fake_radio_with_irq(false);
        active.regs.borrow_mut().set(Register::Status, 0x4E);
        assert_eq!(active.radio.poll_interrupt().unwrap(), Irq::RX_DR);
        assert_eq!(active.frames(), vec![vec![commands::NOP]]);
    }

    #[test]
    fn irq_events_are_masks() {
        let spi_expectations = spi_test_expects![
            (vec![Register::Config.addr(), 0u8], vec![0xEu8, 0x0Fu8]),
            (
                vec![Register::Config.addr() | commands::W_REGISTER, 0x5Fu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        // only TX_DS reaches the IRQ pin
        radio.set_irq_events(Irq::TX_DS).unwrap();
        spi.done();
        ce_pin.done();
    }
}
