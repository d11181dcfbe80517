use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    log::{debug, error},
    radio::{
        prelude::{EsbChannel, EsbInit, EsbPower, EsbRegister, EsbStatus},
        Nrf24, Nrf24Error, RadioConfig,
    },
    types::Pipe,
};

use super::{Register, POWER_UP_DELAY_MS};

impl<SPI, CE, DELAY, IRQ> EsbInit for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        // configuration bits may not stick while the radio is still settling after power on
        self._delay_impl.delay_ms(POWER_UP_DELAY_MS);

        let config = RadioConfig::default();
        self.with_config(&config)?;

        // read back CONFIG to verify the SPI lines are working
        let mut config_reg = [0u8];
        self.read_register(Register::Config, &mut config_reg)?;
        let expected = config
            .config_reg
            .with_pwr_up(false)
            .with_prim_rx(false)
            .into_bits();
        if config_reg[0] != expected {
            error!(
                "CONFIG read back {=u8:#x}, expected {=u8:#x}",
                config_reg[0], expected
            );
            return Err(Nrf24Error::BinaryCorruption);
        }

        self.wakeup()
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        // IRQ events + CRC, PTX, powered down
        let config_reg = config.config_reg.with_pwr_up(false).with_prim_rx(false);
        self.write_register(Register::Config, &[config_reg.into_bits()])?;
        self.clear_all_irqs()?;

        let width = config.address_width();
        self.write_register(Register::SetupAw, &[width.into_bits()])?;
        self.write_register(Register::SetupRetr, &[config.auto_retries.into_bits()])?;
        self.write_register(Register::EnAa, &[config.auto_ack()])?;
        self.write_register(Register::RfSetup, &[config.rf_setup.into_bits()])?;
        self.write_register(Register::Feature, &[config.feature.into_bits()])?;
        // DPL_Px is only valid on pipes with ENAA_Px set
        let dynpd = if config.dynamic_payloads() {
            config.auto_ack()
        } else {
            0
        };
        self.write_register(Register::Dynpd, &[dynpd])?;

        let pipes = config.pipes();
        for pipe in Pipe::ALL {
            let address = pipes.rx_address(pipe);
            let len = address.len().min(width.bytes());
            self.write_register(Register::rx_addr(pipe), &address[..len])?;
        }
        self.write_register(Register::EnRxAddr, &[pipes.rx_pipes_enabled()])?;
        let tx_address = pipes.tx_address();
        self.write_register(Register::TxAddr, &tx_address[..width.bytes()])?;

        for pipe in Pipe::ALL {
            self.write_register(Register::rx_pw(pipe), &[config.payload_size()])?;
        }

        // also flushes both FIFOs
        self.set_channel(config.channel())?;
        debug!(
            "radio configured: channel {=u8}, {=u8} byte payloads",
            config.channel(),
            config.payload_size()
        );
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{EsbInit, Pipe, RadioConfig, Register};
    use crate::{
        radio::{commands, Nrf24Error},
        test::{
            fake::{mk_fake_radio, Event},
            mk_radio,
        },
        AddressWidth, CrcLength, DataRate, Irq, PaLevel,
    };
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec::Vec;

    #[test]
    fn default_config_lands_in_registers() {
        let mut fake = mk_fake_radio();
        fake.radio.with_config(&RadioConfig::default()).unwrap();
        let events = fake.events();
        assert_eq!(events[0], Event::Ce(false));
        assert_eq!(
            events[events.len() - 2..],
            [
                Event::Spi(std::vec![commands::FLUSH_RX]),
                Event::Spi(std::vec![commands::FLUSH_TX]),
            ]
        );

        let regs = fake.regs.borrow();
        assert_eq!(regs.get(Register::Config), 0x0C);
        assert_eq!(regs.get(Register::SetupAw), 3);
        assert_eq!(regs.get(Register::SetupRetr), 0x5F);
        assert_eq!(regs.get(Register::EnAa), 0x3F);
        assert_eq!(regs.get(Register::RfSetup), 0x07);
        assert_eq!(regs.get(Register::Feature), 0);
        assert_eq!(regs.get(Register::Dynpd), 0);
        assert_eq!(regs.bytes(Register::RxAddrP0), [0xE7; 5]);
        assert_eq!(regs.bytes(Register::RxAddrP1), [0xC2; 5]);
        assert_eq!(regs.get(Register::RxAddrP5), 0xC6);
        assert_eq!(regs.get(Register::EnRxAddr), 3);
        assert_eq!(regs.bytes(Register::TxAddr), [0xE7; 5]);
        for pipe in Pipe::ALL {
            assert_eq!(regs.get(Register::rx_pw(pipe)), 32);
        }
        assert_eq!(regs.get(Register::RfCh), 76);
    }

    #[test]
    fn custom_config_lands_in_registers() {
        let config = RadioConfig::default()
            .with_channel(42)
            .with_address_width(AddressWidth::Bytes3)
            .with_tx_address(&[1, 2, 3, 4, 5])
            .with_rx_address(Pipe::P0, &[1, 2, 3, 4, 5])
            .with_rx_address(Pipe::P3, &[0x33])
            .close_rx_pipe(Pipe::P1)
            .with_auto_ack(0)
            .with_ack_payloads(true)
            .with_payload_size(8)
            .with_data_rate(DataRate::Kbps250)
            .with_pa_level(PaLevel::Low)
            .with_crc_length(CrcLength::Bit8)
            .with_auto_retries(2, 3)
            .with_irq_events(Irq::RX_DR);
        let mut fake = mk_fake_radio();
        fake.radio.with_config(&config).unwrap();

        let regs = fake.regs.borrow();
        // MASK_TX_DS | MASK_MAX_RT | EN_CRC
        assert_eq!(regs.get(Register::Config), 0x38);
        assert_eq!(regs.get(Register::SetupAw), 1);
        assert_eq!(regs.get(Register::SetupRetr), 0x23);
        // ACK payloads turned auto-ack back on
        assert_eq!(regs.get(Register::EnAa), 0x3F);
        assert_eq!(regs.get(Register::RfSetup), 0x23);
        assert_eq!(regs.get(Register::Feature), 0x06);
        assert_eq!(regs.get(Register::Dynpd), 0x3F);
        // only 3 bytes were written
        assert_eq!(regs.bytes(Register::RxAddrP0), [1, 2, 3, 0xE7, 0xE7]);
        assert_eq!(regs.bytes(Register::TxAddr), [1, 2, 3, 0xE7, 0xE7]);
        assert_eq!(regs.get(Register::RxAddrP3), 0x33);
        assert_eq!(regs.get(Register::EnRxAddr), 0b1001);
        assert_eq!(regs.get(Register::RxPwP4), 8);
        assert_eq!(regs.get(Register::RfCh), 42);
    }

    #[test]
    fn dynamic_payloads_follow_auto_ack() {
        let config = RadioConfig::default()
            .with_dynamic_payloads(true)
            .with_auto_ack(0b10_0101);
        let mut fake = mk_fake_radio();
        fake.radio.with_config(&config).unwrap();
        let regs = fake.regs.borrow();
        assert_eq!(regs.get(Register::Feature), 0x04);
        assert_eq!(regs.get(Register::EnAa), 0b10_0101);
        assert_eq!(regs.get(Register::Dynpd), 0b10_0101);
        drop(regs);

        let config = config.with_auto_ack(0);
        fake.radio.with_config(&config).unwrap();
        assert_eq!(fake.regs.borrow().get(Register::Dynpd), 0);
    }

    #[test]
    fn with_config_clears_pending_irqs() {
        let mut fake = mk_fake_radio();
        fake.regs.borrow_mut().set(Register::Status, 0x7E);
        fake.radio.with_config(&RadioConfig::default()).unwrap();
        assert_eq!(fake.regs.borrow().get(Register::Status), 0x0E);
    }

    #[test]
    fn init_powers_up() {
        let mut fake = mk_fake_radio();
        fake.radio.init().unwrap();
        let events = fake.events();
        assert_eq!(events.first(), Some(&Event::DelayMs(5)));
        assert_eq!(events.last(), Some(&Event::DelayMs(5)));
        assert_eq!(fake.regs.borrow().get(Register::Config), 0x0E);
    }

    #[test]
    fn init_detects_corrupt_binary() {
        // replay the frames of a healthy configuration against a mock
        let mut fake = mk_fake_radio();
        fake.radio.with_config(&RadioConfig::default()).unwrap();
        let mut spi_expectations = Vec::new();
        for frame in fake.frames() {
            let response = std::vec![0xEu8; frame.len()];
            spi_expectations.extend([
                SpiTransaction::transaction_start(),
                SpiTransaction::transfer_in_place(frame, response),
                SpiTransaction::transaction_end(),
            ]);
        }
        // a floating MISO line reads all ones
        spi_expectations.extend([
            SpiTransaction::transaction_start(),
            SpiTransaction::transfer_in_place(
                std::vec![Register::Config.addr(), 0u8],
                std::vec![0xFFu8, 0xFFu8],
            ),
            SpiTransaction::transaction_end(),
        ]);
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(matches!(radio.init(), Err(Nrf24Error::BinaryCorruption)));
        spi.done();
        ce_pin.done();
    }
}
