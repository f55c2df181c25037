use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// 7-bit bus address of the sensor, `1001 A2 A1 A0`
#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Address {
    raw: u8,
}

impl Default for Address {
    fn default() -> Self {
        Self { raw: Self::BASE }
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> u8 {
        addr.raw
    }
}

impl Address {
    /// Address with all strap pins tied low
    pub const BASE: u8 = 0x48;

    /// Highest address, all strap pins tied high
    pub const LAST: u8 = 0x4F;

    /// Address selected by the A2, A1 and A0 pins
    pub fn from_pins(a2: bool, a1: bool, a0: bool) -> Self {
        Self {
            raw: Self::BASE | ((a2 as u8) << 2) | ((a1 as u8) << 1) | (a0 as u8),
        }
    }

    pub fn new(raw: u8) -> Result<Self, AddressError> {
        if (Self::BASE..=Self::LAST).contains(&raw) {
            Ok(Self { raw })
        } else {
            Err(AddressError::OutOfRange(raw))
        }
    }

    pub fn raw(&self) -> u8 {
        self.raw
    }
}

/// Error type
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressError {
    NotEnough,
    Invalid,
    OutOfRange(u8),
}

fn hex_to_u8(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let mut chars = s.chars();

        let raw = match (chars.next(), chars.next()) {
            (Some(h), Some(l)) => match (hex_to_u8(h), hex_to_u8(l)) {
                (Some(h), Some(l)) => (h << 4) | l,
                _ => return Err(AddressError::Invalid),
            },
            _ => return Err(AddressError::NotEnough),
        };
        if chars.next().is_some() {
            return Err(AddressError::Invalid);
        }

        Address::new(raw)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{:#04x}", self.raw)
    }
}
