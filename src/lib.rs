#![doc = include_str!("../README.md")]
//!
//! ## Transaction API
//!
//! - [`Nrf24::new()`](fn@crate::radio::Nrf24::new)
//! - [`Nrf24::with_irq_pin()`](fn@crate::radio::Nrf24::with_irq_pin)
//! - [`Nrf24Builder::build()`](fn@crate::radio::Nrf24Builder::build)
//! - [`Nrf24::transact()`](fn@crate::radio::Nrf24::transact)
//!
//! ## Register API
//!
//! - [`Nrf24::read_register()`](radio/struct.Nrf24.html#method.read_register)
//! - [`Nrf24::write_register()`](radio/struct.Nrf24.html#method.write_register)
//! - [`Nrf24::read_bit()`](radio/struct.Nrf24.html#method.read_bit)
//! - [`Nrf24::set_bit()`](radio/struct.Nrf24.html#method.set_bit)
//! - [`Nrf24::clear_bit()`](radio/struct.Nrf24.html#method.clear_bit)
//! - [`Nrf24::write_bits()`](radio/struct.Nrf24.html#method.write_bits)
//!
//! ## Command API
//!
//! - [`Nrf24::read_rx_payload()`](radio/struct.Nrf24.html#method.read_rx_payload)
//! - [`Nrf24::write_tx_payload()`](radio/struct.Nrf24.html#method.write_tx_payload)
//! - [`Nrf24::write_tx_payload_no_ack()`](radio/struct.Nrf24.html#method.write_tx_payload_no_ack)
//! - [`Nrf24::write_ack_payload()`](radio/struct.Nrf24.html#method.write_ack_payload)
//! - [`Nrf24::read_payload_width()`](radio/struct.Nrf24.html#method.read_payload_width)
//! - [`Nrf24::flush_rx()`](radio/struct.Nrf24.html#method.flush_rx)
//! - [`Nrf24::flush_tx()`](radio/struct.Nrf24.html#method.flush_tx)
//! - [`Nrf24::reuse_tx_payload()`](radio/struct.Nrf24.html#method.reuse_tx_payload)
//! - [`Nrf24::nop()`](radio/struct.Nrf24.html#method.nop)
//!
//! ## Radio API
//!
//! - [`Nrf24::init()`](radio/struct.Nrf24.html#method.init)
//! - [`Nrf24::with_config()`](radio/struct.Nrf24.html#method.with_config)
//! - [`Nrf24::sleep()`](radio/struct.Nrf24.html#method.sleep)
//! - [`Nrf24::wakeup()`](radio/struct.Nrf24.html#method.wakeup)
//! - [`Nrf24::set_mode()`](radio/struct.Nrf24.html#method.set_mode)
//! - [`Nrf24::set_channel()`](radio/struct.Nrf24.html#method.set_channel)
//! - [`Nrf24::set_address_width()`](radio/struct.Nrf24.html#method.set_address_width)
//! - [`Nrf24::set_rx_address()`](radio/struct.Nrf24.html#method.set_rx_address)
//! - [`Nrf24::set_tx_address()`](radio/struct.Nrf24.html#method.set_tx_address)
//! - [`Nrf24::set_payload_size()`](radio/struct.Nrf24.html#method.set_payload_size)
//! - [`Nrf24::set_dynamic_payloads()`](radio/struct.Nrf24.html#method.set_dynamic_payloads)
//! - [`Nrf24::transmit()`](radio/struct.Nrf24.html#method.transmit)
//! - [`Nrf24::get_rx_payload()`](radio/struct.Nrf24.html#method.get_rx_payload)
//! - [`Nrf24::get_irq_flag()`](radio/struct.Nrf24.html#method.get_irq_flag)
//! - [`Nrf24::clear_irq_flag()`](radio/struct.Nrf24.html#method.clear_irq_flag)
//! - [`Nrf24::poll_interrupt()`](radio/struct.Nrf24.html#method.poll_interrupt)
//!
#![no_std]

mod log;
mod types;
pub use types::{
    AddressWidth, CrcLength, DataRate, FifoState, FifoStatus, Irq, Mode, PaLevel, Pipe,
    StatusFlags,
};
pub mod radio;
