#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod buffer;
pub mod error;
pub mod layout;
#[doc(hidden)]
pub mod storage;
pub mod unit;

pub use buffer::UnitBuffer;
pub use error::BufferError;
pub use storage::UnitStorage;
pub use unit::BitUnit;
