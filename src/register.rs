pub trait Pointer {
    fn pointer(&self) -> u8;
}

/// LM75B register map
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Temperature, read only
    Temp = 0x00,
    /// Configuration
    Conf = 0x01,
    /// Hysteresis threshold
    Thyst = 0x02,
    /// Overtemperature shutdown threshold
    Tos = 0x03,
}

impl Register {
    /// Number of data bytes behind the pointer
    pub const fn size(&self) -> usize {
        match self {
            Register::Conf => 1,
            Register::Temp | Register::Thyst | Register::Tos => 2,
        }
    }
}

impl Pointer for Register {
    fn pointer(&self) -> u8 {
        *self as _
    }
}
