use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::radio::{prelude::EsbDetails, Nrf24, Nrf24Error};

#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use super::{bit_fields::Config, Register};
#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use crate::{
    radio::prelude::{
        EsbChannel, EsbCrcLength, EsbDataRate, EsbFifo, EsbMode, EsbPaLevel, EsbPayloadLength,
        EsbPipe, EsbPower, EsbRadio, EsbRegister, EsbStatus,
    },
    Irq, Pipe,
};
#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
use crate::Mode;

#[cfg(all(feature = "std", not(target_os = "none")))]
extern crate std;

impl<SPI, CE, DELAY, IRQ> Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    #[cfg(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    ))]
    fn read_byte(
        &mut self,
        register: Register,
    ) -> Result<u8, Nrf24Error<SPI::Error, CE::Error, IRQ::Error>> {
        let mut value = [0u8];
        self.read_register(register, &mut value)?;
        Ok(value[0])
    }
}

impl<SPI, CE, DELAY, IRQ> EsbDetails for Nrf24<SPI, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: InputPin,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, CE::Error, IRQ::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );
        defmt::println!("RF Data Rate______________{}", self.get_data_rate()?);
        defmt::println!("RF Power Amplifier________{}", self.get_pa_level()?);
        let rf_setup = self.read_byte(Register::RfSetup)?;
        defmt::println!("RF LNA enabled____________{=bool}", rf_setup & 1 > 0);
        defmt::println!("CRC Length________________{}", self.get_crc_length()?);
        defmt::println!(
            "Address width_____________{=usize} bytes",
            self.get_address_width()?.bytes()
        );
        defmt::println!(
            "Static payload size_______{=u8} bytes",
            self.get_payload_size(Pipe::P0)?
        );

        let retry_setup = self.read_byte(Register::SetupRetr)?;
        defmt::println!(
            "Auto retry delay__________{=u16} microseconds",
            (retry_setup >> 4) as u16 * 250 + 250
        );
        defmt::println!("Auto retry attempts_______{=u8} maximum", retry_setup & 0x0F);
        defmt::println!(
            "Packets lost\n    on current channel____{=u8}",
            self.get_lost_packets_count()?
        );
        defmt::println!(
            "Retry attempts made\n    for last transmission_{=u8}",
            self.get_retransmissions_count()?
        );

        let config = Config::from_bits(self.read_byte(Register::Config)?);
        let events = config.irq_events();
        let status = self.get_status()?;
        defmt::println!("IRQ on Data Ready_________{=bool}", events.contains(Irq::RX_DR));
        defmt::println!("    Data Ready triggered__{=bool}", status.rx_dr());
        defmt::println!("IRQ on Data Sent__________{=bool}", events.contains(Irq::TX_DS));
        defmt::println!("    Data Sent triggered___{=bool}", status.tx_ds());
        defmt::println!("IRQ on Data Fail__________{=bool}", events.contains(Irq::MAX_RT));
        defmt::println!("    Data Fail triggered___{=bool}", status.tx_df());

        defmt::println!("TX FIFO___________________{}", self.get_fifo_state(true)?);
        defmt::println!("RX FIFO___________________{}", self.get_fifo_state(false)?);

        let features = self.read_byte(Register::Feature)?;
        defmt::println!("Ask no ACK allowed________{=bool}", features & 1 > 0);
        defmt::println!("ACK Payload enabled_______{=bool}", features & 2 > 0);
        let dynpd = self.read_byte(Register::Dynpd)?;
        defmt::println!("Dynamic Payloads__________{=u8:#010b}", dynpd);
        let en_aa = self.read_byte(Register::EnAa)?;
        defmt::println!("Auto Acknowledgment_______{=u8:#010b}", en_aa);
        let rx = defmt::intern!("R");
        let tx = defmt::intern!("T");
        defmt::println!(
            "Primary Mode______________{=istr}X",
            if self.get_mode()? == Mode::Rx { rx } else { tx }
        );
        defmt::println!("Powered Up________________{=bool}", self.is_powered()?);

        let mut address = [0u8; 5];
        let len = self.get_tx_address(&mut address)?;
        defmt::println!("TX address________________{=[u8]:X}", address[..len]);
        let opened = defmt::intern!(" open ");
        let closed = defmt::intern!("closed");
        for pipe in Pipe::ALL {
            let len = self.get_rx_address(pipe, &mut address)?;
            defmt::println!(
                "Pipe {=u8} ({=istr}) bound to {=[u8]:X}",
                pipe.index(),
                if self.is_rx_pipe_enabled(pipe)? {
                    opened
                } else {
                    closed
                },
                address[..len],
            );
        }
        Ok(())
    }

    #[cfg(not(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    )))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(target_os = "none"))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );
        std::println!("RF Data Rate______________{}", self.get_data_rate()?);
        std::println!("RF Power Amplifier________{}", self.get_pa_level()?);
        let rf_setup = self.read_byte(Register::RfSetup)?;
        std::println!("RF LNA enabled____________{}", rf_setup & 1 > 0);
        std::println!("CRC Length________________{}", self.get_crc_length()?);
        std::println!("Address width_____________{}", self.get_address_width()?);
        std::println!(
            "Static payload size_______{} bytes",
            self.get_payload_size(Pipe::P0)?
        );

        let retry_setup = self.read_byte(Register::SetupRetr)?;
        std::println!(
            "Auto retry delay__________{} microseconds",
            (retry_setup >> 4) as u16 * 250 + 250
        );
        std::println!("Auto retry attempts_______{} maximum", retry_setup & 0x0F);
        std::println!(
            "Packets lost\n    on current channel____{}",
            self.get_lost_packets_count()?
        );
        std::println!(
            "Retry attempts made\n    for last transmission_{}",
            self.get_retransmissions_count()?
        );

        let config = Config::from_bits(self.read_byte(Register::Config)?);
        let events = config.irq_events();
        let status = self.get_status()?;
        std::println!("IRQ on Data Ready_________{}", events.contains(Irq::RX_DR));
        std::println!("    Data Ready triggered__{}", status.rx_dr());
        std::println!("IRQ on Data Sent__________{}", events.contains(Irq::TX_DS));
        std::println!("    Data Sent triggered___{}", status.tx_ds());
        std::println!("IRQ on Data Fail__________{}", events.contains(Irq::MAX_RT));
        std::println!("    Data Fail triggered___{}", status.tx_df());

        std::println!("TX FIFO___________________{}", self.get_fifo_state(true)?);
        std::println!("RX FIFO___________________{}", self.get_fifo_state(false)?);

        let features = self.read_byte(Register::Feature)?;
        std::println!("Ask no ACK allowed________{}", features & 1 > 0);
        std::println!("ACK Payload enabled_______{}", features & 2 > 0);
        std::println!(
            "Dynamic Payloads__________{:#010b}",
            self.read_byte(Register::Dynpd)?
        );
        std::println!(
            "Auto Acknowledgment_______{:#010b}",
            self.read_byte(Register::EnAa)?
        );
        std::println!("Primary Mode______________{}", self.get_mode()?);
        std::println!("Powered Up________________{}", self.is_powered()?);

        let mut address = [0u8; 5];
        let len = self.get_tx_address(&mut address)?;
        std::println!("TX address________________{:02X?}", &address[..len]);
        for pipe in Pipe::ALL {
            let len = self.get_rx_address(pipe, &mut address)?;
            std::println!(
                "Pipe {} ({}) bound to {:02X?}",
                pipe.index(),
                if self.is_rx_pipe_enabled(pipe)? {
                    " open "
                } else {
                    "closed"
                },
                &address[..len],
            );
        }
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::EsbDetails;
    use crate::test::fake::mk_fake_radio;

    #[test]
    fn print_from_reset_values() {
        let mut fake = mk_fake_radio();
        assert!(fake.radio.print_details().is_ok());
    }

    #[cfg(not(feature = "std"))]
    #[test]
    fn print_nothing() {
        use crate::test::mk_radio;

        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.print_details().is_ok());
        spi.done();
        ce_pin.done();
    }
}
