use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    radio::{
        prelude::{EsbCommand, EsbMode, EsbRadio, EsbRegister},
        Nrf24, Nrf24Error,
    },
    types::Pipe,
};

use super::{mnemonics, Register, MAX_PAYLOAD_SIZE};

impl<SPI, CE, DELAY, IRQ> EsbRadio for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type RadioErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn put_in_tx_fifo(&mut self, payload: &[u8]) -> Result<(), Self::RadioErrorType> {
        assert!(!payload.is_empty() && payload.len() <= MAX_PAYLOAD_SIZE);
        self.write_tx_payload(payload)?;
        Ok(())
    }

    fn transmit(&mut self, payload: &[u8]) -> Result<(), Self::RadioErrorType> {
        self.put_in_tx_fifo(payload)?;
        self.transmit_pulse()
    }

    fn transmit_no_ack(&mut self, payload: &[u8]) -> Result<(), Self::RadioErrorType> {
        assert!(!payload.is_empty() && payload.len() <= MAX_PAYLOAD_SIZE);
        self.write_tx_payload_no_ack(payload)?;
        self.transmit_pulse()
    }

    fn get_rx_payload(&mut self, buf: &mut [u8]) -> Result<(), Self::RadioErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.read_rx_payload(buf)?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)
    }

    fn rx_write_payload(&mut self, pipe: Pipe, payload: &[u8]) -> Result<(), Self::RadioErrorType> {
        if payload.is_empty() {
            return Ok(());
        }
        let len = payload.len().min(MAX_PAYLOAD_SIZE);
        self.write_ack_payload(pipe, &payload[..len])?;
        Ok(())
    }

    fn reuse_last_transmitted_payload(&mut self) -> Result<(), Self::RadioErrorType> {
        self.reuse_tx_payload()?;
        self.transmit_pulse()
    }

    fn get_retransmissions_count(&mut self) -> Result<u8, Self::RadioErrorType> {
        let mut observe = [0u8];
        self.read_register(Register::ObserveTx, &mut observe)?;
        Ok(observe[0] & mnemonics::MASK_ARC_CNT)
    }

    fn get_lost_packets_count(&mut self) -> Result<u8, Self::RadioErrorType> {
        let mut observe = [0u8];
        self.read_register(Register::ObserveTx, &mut observe)?;
        Ok(observe[0] >> mnemonics::PLOS_CNT)
    }

    fn received_power_detector(&mut self) -> Result<bool, Self::RadioErrorType> {
        self.read_bit(Register::Rpd, mnemonics::RPD)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{EsbRadio, Pipe, Register};
    use crate::{
        radio::commands,
        spi_test_expects,
        test::{
            fake::{mk_fake_radio, Event},
            mk_radio,
        },
    };
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    fn transmit_pulses_after_the_upload() {
        let mut fake = mk_fake_radio();
        let payload = [0x11u8, 0x22, 0x33];
        fake.radio.transmit(&payload).unwrap();
        assert_eq!(
            fake.events(),
            vec![
                Event::Spi(vec![commands::W_TX_PAYLOAD, 0x11, 0x22, 0x33]),
                Event::Ce(true),
                Event::DelayUs(15),
                Event::Ce(false),
            ]
        );
    }

    #[test]
    fn transmit_without_ack() {
        let mut fake = mk_fake_radio();
        let payload = [0xAAu8; 32];
        fake.radio.transmit_no_ack(&payload).unwrap();
        let events = fake.events();
        assert_eq!(events.len(), 4);
        match &events[0] {
            Event::Spi(frame) => {
                assert_eq!(frame.len(), 33);
                assert_eq!(frame[0], commands::W_TX_PAYLOAD_NO_ACK);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(events[1..], [Event::Ce(true), Event::DelayUs(15), Event::Ce(false)]);
    }

    #[test]
    fn fill_tx_fifo_without_pulse() {
        let mut fake = mk_fake_radio();
        fake.radio.put_in_tx_fifo(&[1]).unwrap();
        assert_eq!(fake.events(), vec![Event::Spi(vec![commands::W_TX_PAYLOAD, 1])]);
    }

    #[test]
    #[should_panic]
    fn empty_payload() {
        let mut fake = mk_fake_radio();
        let _ = fake.radio.put_in_tx_fifo(&[]);
    }

    #[test]
    #[should_panic]
    fn empty_payload_without_ack() {
        let mut fake = mk_fake_radio();
        let _ = fake.radio.transmit_no_ack(&[]);
    }

    #[test]
    #[should_panic]
    fn oversized_payload() {
        let mut fake = mk_fake_radio();
        let _ = fake.radio.transmit(&[0u8; 33]);
    }

    #[test]
    fn read_payload_while_ce_is_low() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![(
            vec![commands::R_RX_PAYLOAD, 0u8, 0u8, 0u8],
            vec![0x40u8, 7u8, 8u8, 9u8],
        ),];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 3];
        radio.get_rx_payload(&mut buf).unwrap();
        assert_eq!(buf, [7, 8, 9]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn ack_payload_is_truncated() {
        let mut fake = mk_fake_radio();
        let payload = [0x55u8; 40];
        fake.radio.rx_write_payload(Pipe::P1, &payload).unwrap();
        let frames = fake.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 33);
        assert_eq!(frames[0][0], commands::W_ACK_PAYLOAD | 1);
        assert!(frames[0][1..].iter().all(|b| *b == 0x55));
    }

    #[test]
    fn empty_ack_payload_is_skipped() {
        let mut fake = mk_fake_radio();
        fake.radio.rx_write_payload(Pipe::P2, &[]).unwrap();
        assert!(fake.events().is_empty());
    }

    #[test]
    fn reuse_last_payload() {
        let mut fake = mk_fake_radio();
        fake.radio.reuse_last_transmitted_payload().unwrap();
        assert_eq!(
            fake.events(),
            vec![
                Event::Spi(vec![commands::REUSE_TX_PL]),
                Event::Ce(true),
                Event::DelayUs(15),
                Event::Ce(false),
            ]
        );
    }

    #[test]
    fn observe_tx_counters() {
        let spi_expectations = spi_test_expects![
            (vec![Register::ObserveTx.addr(), 0u8], vec![0xEu8, 0x3Au8]),
            (vec![Register::ObserveTx.addr(), 0u8], vec![0xEu8, 0x3Au8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_retransmissions_count().unwrap(), 10);
        assert_eq!(radio.get_lost_packets_count().unwrap(), 3);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn carrier_detection() {
        let spi_expectations = spi_test_expects![
            (vec![Register::Rpd.addr(), 0u8], vec![0xEu8, 1u8]),
            (vec![Register::Rpd.addr(), 0u8], vec![0xEu8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.received_power_detector().unwrap());
        assert!(!radio.test_carrier().unwrap());
        spi.done();
        ce_pin.done();
    }
}
