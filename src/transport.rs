use crate::{Address, Error, Pointer, Register};
use core::fmt::Debug;
use embedded_hal::i2c::I2c;

/// Byte transport to a single sensor.
///
/// Buffers must be exactly [`Register::size`] bytes long, anything else is
/// rejected before touching the bus.
pub trait Transport {
    type Error: Debug;

    /// Read the register into `buf`
    fn read_register(&mut self, register: Register, buf: &mut [u8])
        -> Result<(), Error<Self::Error>>;

    /// Write `bytes` to the register
    fn write_register(&mut self, register: Register, bytes: &[u8]) -> Result<(), Error<Self::Error>>;
}

fn ensure_size<E: Debug>(register: Register, actual: usize) -> Result<(), Error<E>> {
    let expected = register.size();
    if actual != expected {
        Err(Error::SizeMismatch {
            register,
            expected,
            actual,
        })
    } else {
        Ok(())
    }
}

/// I2C bus with the sensor address
impl<I2C> Transport for (I2C, Address)
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn read_register(
        &mut self,
        register: Register,
        buf: &mut [u8],
    ) -> Result<(), Error<Self::Error>> {
        ensure_size(register, buf.len())?;
        self.0.write_read(self.1.raw(), &[register.pointer()], buf)?;
        Ok(())
    }

    fn write_register(&mut self, register: Register, bytes: &[u8]) -> Result<(), Error<Self::Error>> {
        ensure_size(register, bytes.len())?;
        // pointer byte followed by the register contents
        let mut frame = [0u8; 3];
        let len = register.size();
        frame[0] = register.pointer();
        frame[1..=len].copy_from_slice(bytes);
        self.0.write(self.1.raw(), &frame[..=len])?;
        Ok(())
    }
}

/// Exclusive borrow of a transport
impl<T: Transport> Transport for &mut T {
    type Error = T::Error;

    fn read_register(
        &mut self,
        register: Register,
        buf: &mut [u8],
    ) -> Result<(), Error<Self::Error>> {
        (**self).read_register(register, buf)
    }

    fn write_register(&mut self, register: Register, bytes: &[u8]) -> Result<(), Error<Self::Error>> {
        (**self).write_register(register, bytes)
    }
}
