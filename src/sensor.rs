use crate::{Driver, Error, Transport};
use byteorder::{BigEndian, ByteOrder};
use core::fmt::Debug;

/// Temperature source
pub trait Sensor {
    type BusError: Sized + Debug;

    /// returns the measured temperature in °C
    fn read_measurement(&mut self) -> Result<f32, Error<Self::BusError>>;

    /// returns the measurement register as read
    fn read_measurement_raw(&mut self) -> Result<u16, Error<Self::BusError>>;
}

impl<T: Transport> Sensor for Driver<T> {
    type BusError = T::Error;

    fn read_measurement(&mut self) -> Result<f32, Error<T::Error>> {
        self.temperature_celsius()
    }

    fn read_measurement_raw(&mut self) -> Result<u16, Error<T::Error>> {
        self.temperature_raw().map(|raw| BigEndian::read_u16(&raw))
    }
}
