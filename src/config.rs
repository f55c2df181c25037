//! Configuration register (Conf) layout.
//!
//! ```text
//! | b7 | b6 | b5 |   b4   |   b3   |   b2   |     b1      |    b0    |
//! |   reserved   | OS_F_QUE[1:0]   | OS_POL | OS_COMP_INT | SHUTDOWN |
//! ```
//!
//! Reserved bits are carried through unchanged by every field update.

use core::fmt::{Display, Formatter, Result as FmtResult};

pub const SHUTDOWN_SHIFT: u8 = 0;
pub const SHUTDOWN_MASK: u8 = 0b0000_0001;

pub const OS_MODE_SHIFT: u8 = 1;
pub const OS_MODE_MASK: u8 = 0b0000_0010;

pub const OS_POLARITY_SHIFT: u8 = 2;
pub const OS_POLARITY_MASK: u8 = 0b0000_0100;

pub const FAULT_QUEUE_SHIFT: u8 = 3;
pub const FAULT_QUEUE_MASK: u8 = 0b0001_1000;

pub const RESERVED_MASK: u8 = 0b1110_0000;

/// Device operation mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ShutdownMode {
    /// Converts every 100 ms
    #[default]
    Normal = 0,
    /// Conversions stop, the bus and registers keep working
    Shutdown = 1,
}

/// OS output operation mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OsMode {
    /// OS follows the Tos/Thyst band
    #[default]
    Comparator = 0,
    /// OS latches until any register is read
    Interrupt = 1,
}

/// Active level of the OS output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OsPolarity {
    #[default]
    ActiveLow = 0,
    ActiveHigh = 1,
}

/// Number of consecutive faults required to activate OS
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultQueue {
    #[default]
    Depth1,
    Depth2,
    Depth4,
    Depth6,
}

/// Queue depth and its OS_F_QUE code. Depth 1 is code 0, not depth / 2.
const FAULT_QUEUE_CODES: [(FaultQueue, u8, u8); 4] = [
    (FaultQueue::Depth1, 1, 0b00),
    (FaultQueue::Depth2, 2, 0b01),
    (FaultQueue::Depth4, 4, 0b10),
    (FaultQueue::Depth6, 6, 0b11),
];

impl FaultQueue {
    pub fn depth(&self) -> u8 {
        FAULT_QUEUE_CODES[self.index()].1
    }

    /// Look up a queue by depth, only 1, 2, 4 and 6 exist
    pub fn from_depth(depth: u8) -> Option<Self> {
        FAULT_QUEUE_CODES
            .iter()
            .find(|(_, d, _)| *d == depth)
            .map(|(queue, _, _)| *queue)
    }

    pub fn code(&self) -> u8 {
        FAULT_QUEUE_CODES[self.index()].2
    }

    pub fn from_code(code: u8) -> Self {
        FAULT_QUEUE_CODES[(code & 0b11) as usize].0
    }

    fn index(&self) -> usize {
        match self {
            FaultQueue::Depth1 => 0,
            FaultQueue::Depth2 => 1,
            FaultQueue::Depth4 => 2,
            FaultQueue::Depth6 => 3,
        }
    }
}

/// A single configuration field with its new value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Shutdown(ShutdownMode),
    OsMode(OsMode),
    OsPolarity(OsPolarity),
    FaultQueue(FaultQueue),
}

impl Field {
    pub fn mask(&self) -> u8 {
        match self {
            Field::Shutdown(_) => SHUTDOWN_MASK,
            Field::OsMode(_) => OS_MODE_MASK,
            Field::OsPolarity(_) => OS_POLARITY_MASK,
            Field::FaultQueue(_) => FAULT_QUEUE_MASK,
        }
    }

    /// Field value shifted into its position in the register
    pub fn bits(&self) -> u8 {
        match self {
            Field::Shutdown(mode) => (*mode as u8) << SHUTDOWN_SHIFT,
            Field::OsMode(mode) => (*mode as u8) << OS_MODE_SHIFT,
            Field::OsPolarity(polarity) => (*polarity as u8) << OS_POLARITY_SHIFT,
            Field::FaultQueue(queue) => queue.code() << FAULT_QUEUE_SHIFT,
        }
    }
}

/// Replace one field of a raw Conf byte, keeping every other bit
pub fn encode_field(current: u8, field: Field) -> u8 {
    (current & !field.mask()) | (field.bits() & field.mask())
}

/// Decoded view of the Conf register
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Configuration {
    raw: u8,
}

impl From<u8> for Configuration {
    fn from(raw: u8) -> Self {
        Configuration { raw }
    }
}

impl From<Configuration> for u8 {
    fn from(config: Configuration) -> u8 {
        config.raw
    }
}

impl Configuration {
    pub fn raw(&self) -> u8 {
        self.raw
    }

    pub fn shutdown_mode(&self) -> ShutdownMode {
        match (self.raw & SHUTDOWN_MASK) >> SHUTDOWN_SHIFT {
            0 => ShutdownMode::Normal,
            _ => ShutdownMode::Shutdown,
        }
    }

    pub fn os_mode(&self) -> OsMode {
        match (self.raw & OS_MODE_MASK) >> OS_MODE_SHIFT {
            0 => OsMode::Comparator,
            _ => OsMode::Interrupt,
        }
    }

    pub fn os_polarity(&self) -> OsPolarity {
        match (self.raw & OS_POLARITY_MASK) >> OS_POLARITY_SHIFT {
            0 => OsPolarity::ActiveLow,
            _ => OsPolarity::ActiveHigh,
        }
    }

    pub fn fault_queue(&self) -> FaultQueue {
        FaultQueue::from_code((self.raw & FAULT_QUEUE_MASK) >> FAULT_QUEUE_SHIFT)
    }

    /// Reserved bits b7..b5, left in place
    pub fn reserved(&self) -> u8 {
        self.raw & RESERVED_MASK
    }

    pub fn with(self, field: Field) -> Self {
        Configuration {
            raw: encode_field(self.raw, field),
        }
    }

    pub fn with_shutdown_mode(self, mode: ShutdownMode) -> Self {
        self.with(Field::Shutdown(mode))
    }

    pub fn with_os_mode(self, mode: OsMode) -> Self {
        self.with(Field::OsMode(mode))
    }

    pub fn with_os_polarity(self, polarity: OsPolarity) -> Self {
        self.with(Field::OsPolarity(polarity))
    }

    pub fn with_fault_queue(self, queue: FaultQueue) -> Self {
        self.with(Field::FaultQueue(queue))
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "{:?}, {:?}, {:?}, fault queue {}",
            self.shutdown_mode(),
            self.os_mode(),
            self.os_polarity(),
            self.fault_queue().depth(),
        )
    }
}
