#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitArrayError {
    #[cfg_attr(
        feature = "std",
        error("element width must be in 1..={max}, got {width}")
    )]
    InvalidElementWidth { width: u32, max: u32 },

    #[cfg_attr(
        feature = "std",
        error("storage holds {available} units, {needed} required")
    )]
    StorageTooSmall { needed: usize, available: usize },

    #[cfg_attr(
        feature = "std",
        error("index {index} is out of bounds for length {length}")
    )]
    IndexOutOfBounds { index: usize, length: usize },

    #[cfg_attr(feature = "std", error("value {value} does not fit in {width} bits"))]
    ValueOverflow { value: u64, width: u32 },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitArrayError::InvalidElementWidth { width, max } => {
                write!(f, "element width must be in 1..={}, got {}", max, width)
            }
            BitArrayError::StorageTooSmall { needed, available } => {
                write!(f, "storage holds {} units, {} required", available, needed)
            }
            BitArrayError::IndexOutOfBounds { index, length } => {
                write!(f, "index {} is out of bounds for length {}", index, length)
            }
            BitArrayError::ValueOverflow { value, width } => {
                write!(f, "value {} does not fit in {} bits", value, width)
            }
        }
    }
}
