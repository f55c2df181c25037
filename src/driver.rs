use crate::{
    codec::{self, Threshold},
    config::{encode_field, Field},
    Configuration, Error, FaultQueue, OsMode, OsPolarity, Register, ShutdownMode, Transport,
};

/// LM75B driver over a register transport
pub struct Driver<T: Transport> {
    transport: T,
}

impl<T: Transport> Driver<T> {
    pub fn new(transport: T) -> Self {
        Driver { transport }
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Check that the sensor answers a temperature read
    pub fn probe(&mut self) -> Result<(), Error<T::Error>> {
        self.read_word(Register::Temp).map(|_| ())
    }

    /// Temp register contents, most significant byte first
    pub fn temperature_raw(&mut self) -> Result<[u8; 2], Error<T::Error>> {
        self.read_word(Register::Temp)
    }

    pub fn temperature_celsius(&mut self) -> Result<f32, Error<T::Error>> {
        self.temperature_raw().map(codec::decode_temperature)
    }

    pub fn temperature_fahrenheit(&mut self) -> Result<f32, Error<T::Error>> {
        self.temperature_celsius().map(codec::celsius_to_fahrenheit)
    }

    pub fn threshold_celsius(&mut self, threshold: Threshold) -> Result<f32, Error<T::Error>> {
        self.read_word(threshold.register())
            .map(codec::decode_threshold)
    }

    /// Program a threshold, saturated to -55..=125 °C with 0.5 °C steps
    pub fn set_threshold_celsius(
        &mut self,
        threshold: Threshold,
        celsius: f32,
    ) -> Result<(), Error<T::Error>> {
        let raw = codec::encode_threshold(celsius);
        self.write_register(threshold.register(), &raw)
    }

    pub fn overtemperature_celsius(&mut self) -> Result<f32, Error<T::Error>> {
        self.threshold_celsius(Threshold::Overtemperature)
    }

    pub fn overtemperature_fahrenheit(&mut self) -> Result<f32, Error<T::Error>> {
        self.overtemperature_celsius()
            .map(codec::celsius_to_fahrenheit)
    }

    pub fn set_overtemperature_celsius(&mut self, celsius: f32) -> Result<(), Error<T::Error>> {
        self.set_threshold_celsius(Threshold::Overtemperature, celsius)
    }

    pub fn set_overtemperature_fahrenheit(
        &mut self,
        fahrenheit: f32,
    ) -> Result<(), Error<T::Error>> {
        self.set_overtemperature_celsius(codec::fahrenheit_to_celsius(fahrenheit))
    }

    pub fn hysteresis_celsius(&mut self) -> Result<f32, Error<T::Error>> {
        self.threshold_celsius(Threshold::Hysteresis)
    }

    pub fn hysteresis_fahrenheit(&mut self) -> Result<f32, Error<T::Error>> {
        self.hysteresis_celsius().map(codec::celsius_to_fahrenheit)
    }

    /// Program the re-arm temperature, it should not exceed the overtemperature threshold
    pub fn set_hysteresis_celsius(&mut self, celsius: f32) -> Result<(), Error<T::Error>> {
        self.set_threshold_celsius(Threshold::Hysteresis, celsius)
    }

    pub fn set_hysteresis_fahrenheit(&mut self, fahrenheit: f32) -> Result<(), Error<T::Error>> {
        self.set_hysteresis_celsius(codec::fahrenheit_to_celsius(fahrenheit))
    }

    pub fn configuration(&mut self) -> Result<Configuration, Error<T::Error>> {
        let mut raw = [0u8; 1];
        self.read_register(Register::Conf, &mut raw)?;
        Ok(Configuration::from(raw[0]))
    }

    /// Overwrite the whole Conf register, reserved bits included
    pub fn set_configuration(&mut self, config: Configuration) -> Result<(), Error<T::Error>> {
        self.write_register(Register::Conf, &[config.raw()])
    }

    /// Read-modify-write of a single Conf field.
    ///
    /// Other bits, reserved ones included, are written back as read. The
    /// read and the write are separate transfers, so concurrent owners of the
    /// bus must serialize calls themselves.
    pub fn update_configuration(&mut self, field: Field) -> Result<Configuration, Error<T::Error>> {
        let current = self.configuration()?;
        let updated = Configuration::from(encode_field(current.raw(), field));
        debug!("conf {=u8:#x} -> {=u8:#x}", current.raw(), updated.raw());
        self.set_configuration(updated)?;
        Ok(updated)
    }

    pub fn shutdown_mode(&mut self) -> Result<ShutdownMode, Error<T::Error>> {
        self.configuration().map(|config| config.shutdown_mode())
    }

    pub fn set_shutdown_mode(&mut self, mode: ShutdownMode) -> Result<(), Error<T::Error>> {
        self.update_configuration(Field::Shutdown(mode)).map(|_| ())
    }

    pub fn os_mode(&mut self) -> Result<OsMode, Error<T::Error>> {
        self.configuration().map(|config| config.os_mode())
    }

    pub fn set_os_mode(&mut self, mode: OsMode) -> Result<(), Error<T::Error>> {
        self.update_configuration(Field::OsMode(mode)).map(|_| ())
    }

    pub fn os_polarity(&mut self) -> Result<OsPolarity, Error<T::Error>> {
        self.configuration().map(|config| config.os_polarity())
    }

    pub fn set_os_polarity(&mut self, polarity: OsPolarity) -> Result<(), Error<T::Error>> {
        self.update_configuration(Field::OsPolarity(polarity))
            .map(|_| ())
    }

    pub fn fault_queue(&mut self) -> Result<FaultQueue, Error<T::Error>> {
        self.configuration().map(|config| config.fault_queue())
    }

    pub fn set_fault_queue(&mut self, queue: FaultQueue) -> Result<(), Error<T::Error>> {
        self.update_configuration(Field::FaultQueue(queue))
            .map(|_| ())
    }

    fn read_word(&mut self, register: Register) -> Result<[u8; 2], Error<T::Error>> {
        let mut raw = [0u8; 2];
        self.read_register(register, &mut raw)?;
        Ok(raw)
    }

    fn read_register(&mut self, register: Register, buf: &mut [u8]) -> Result<(), Error<T::Error>> {
        self.transport.read_register(register, buf)?;
        trace!("read {} {=[u8]:x}", register, &buf[..]);
        Ok(())
    }

    fn write_register(&mut self, register: Register, bytes: &[u8]) -> Result<(), Error<T::Error>> {
        trace!("write {} {=[u8]:x}", register, bytes);
        self.transport.write_register(register, bytes)?;
        Ok(())
    }
}
