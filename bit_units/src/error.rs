#[cfg(feature = "std")]
use thiserror::Error;

/// Buffer errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BufferError {
    /// IO error (only available in std builds)
    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fallback IO error for no_std builds
    #[cfg(not(feature = "std"))]
    Io(&'static str),

    /// Out-of-bounds unit access
    #[cfg_attr(feature = "std", error("unit index {0} out of bounds"))]
    OutOfBounds(usize),

    /// Mutation of read-only storage
    #[cfg_attr(feature = "std", error("storage is read-only"))]
    ReadOnly,

    /// Backing bytes cannot be viewed as the requested unit type
    #[cfg_attr(
        feature = "std",
        error("storage length is not a whole number of units")
    )]
    InvalidLayout,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferError::Io(msg) => write!(f, "IO error: {}", msg),
            BufferError::OutOfBounds(i) => write!(f, "unit index {} out of bounds", i),
            BufferError::ReadOnly => write!(f, "storage is read-only"),
            BufferError::InvalidLayout => {
                write!(f, "storage length is not a whole number of units")
            }
        }
    }
}
