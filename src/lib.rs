#![no_std]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate std;

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    };
}

mod address;
pub mod codec;
pub mod config;
mod driver;
mod register;
mod result;
mod sensor;
mod transport;

pub use address::{Address, AddressError};
pub use codec::{
    celsius_to_fahrenheit, decode_temperature, decode_threshold, encode_threshold,
    fahrenheit_to_celsius, Threshold,
};
pub use config::{
    encode_field, Configuration, FaultQueue, Field, OsMode, OsPolarity, ShutdownMode,
};
pub use driver::Driver;
pub use register::{Pointer, Register};
pub use result::Error;
pub use sensor::Sensor;
pub use transport::Transport;
