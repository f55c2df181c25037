use crate::Register;
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Error type
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E: Sized + Debug> {
    /// Buffer length differs from the register size, nothing was transferred
    SizeMismatch {
        register: Register,
        expected: usize,
        actual: usize,
    },
    /// Transport failed, no register value was obtained
    PortError(E),
}

impl<E: Sized + Debug> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::PortError(e)
    }
}

impl<E: Sized + Debug> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Error::SizeMismatch {
                register,
                expected,
                actual,
            } => write!(
                f,
                "{:?} register takes {} bytes, got {}",
                register, expected, actual
            ),
            Error::PortError(e) => write!(f, "Port error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: Sized + Debug + defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::SizeMismatch {
                register,
                expected,
                actual,
            } => defmt::write!(
                f,
                "{} register takes {=usize} bytes, got {=usize}",
                register,
                *expected,
                *actual
            ),
            Error::PortError(e) => defmt::write!(f, "Port error: {}", e),
        }
    }
}
