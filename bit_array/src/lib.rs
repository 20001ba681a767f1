//! # bit_array
//!
//! A `no_std` compatible fixed-width bit-packing array over caller-provided
//! storage.
//!
//! ```rust
//! use bit_array::PackedArray;
//!
//! // 22 three-bit values (0-7) packed into two u64 units
//! let mut storage = [0u64; 2];
//! let mut array: PackedArray<u64, u32> = PackedArray::new(&mut storage, 22, 3).unwrap();
//!
//! array.set(0, 6).unwrap();
//! array.set(10, 3).unwrap();
//!
//! assert_eq!(array.get(0), Some(6));
//! assert_eq!(array.get(10), Some(3));
//! ```
//!
//! The storage unit type and the element value type are independent generic
//! parameters, each any of `u8`, `u16`, `u32`, `u64`; the element width is a
//! runtime value from 1 up to the element type's width. Elements are packed
//! MSB-first: each element starts at the highest free bit of the current
//! unit and continues into the next unit without padding.
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use bit_array::PackedArray;
//! use bit_units::{layout, UnitBuffer};
//!
//! // Standard Vec<u32>: 1000 elements × 4 bytes = 4000 bytes
//! // Packed at 10 bits per element: 1250 bytes
//! assert_eq!(layout::required_bytes(1000, 10), 1250);
//!
//! let mut buffer = UnitBuffer::<u32>::for_elements(1000, 10);
//! let mut packed: PackedArray<u32, u32> =
//!     PackedArray::new(buffer.as_mut_slice().unwrap(), 1000, 10).unwrap();
//! for i in 0..1000 {
//!     packed.set(i, (i % 1024) as u32).unwrap(); // values 0-1023 fit in 10 bits
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitArrayError;

mod cursor;

pub mod packed_array;
pub use packed_array::PackedArray;

pub use bit_units::{layout, BitUnit, UnitBuffer};
