//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod nrf24;
pub use nrf24::{
    commands, mnemonics, InitError, NoIrq, Nrf24, Nrf24Builder, Nrf24Error, Register,
    CE_PULSE_WIDTH_US, MAX_CHANNEL, MAX_PAYLOAD_SIZE, POWER_UP_DELAY_MS,
};

mod config;
pub use config::{PipeConfig, RadioConfig};
