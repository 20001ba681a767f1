use crate::unit::BitUnit;
use crate::BufferError;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

#[cfg(feature = "mmap")]
use std::{fs::File, path::Path};

#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapMut};

/// The low-level storage backend for unit buffers.
///
/// - Always includes in-memory Vec<U>
/// - Includes mmap only when feature = "mmap"
#[derive(Debug)]
pub enum UnitStorage<U: BitUnit> {
    /// Standard in-memory vector
    InMemory(Vec<U>),

    /// Read-only memory mapped file
    #[cfg(feature = "mmap")]
    MmapReadOnly(Mmap),

    /// Read-write memory mapped file
    #[cfg(feature = "mmap")]
    MmapReadWrite(MmapMut),
}

impl<U: BitUnit> UnitStorage<U> {
    /// Create zero-filled in-memory storage of `units` units
    pub fn zeroed(units: usize) -> Self {
        UnitStorage::InMemory(vec![U::ZERO; units])
    }

    /// Create in-memory storage seeded from a slice
    pub fn from_slice(units: &[U]) -> Self {
        UnitStorage::InMemory(units.to_vec())
    }

    /// Return unit count
    pub fn len(&self) -> usize {
        match self {
            UnitStorage::InMemory(vec) => vec.len(),

            #[cfg(feature = "mmap")]
            UnitStorage::MmapReadOnly(m) => m.len() / core::mem::size_of::<U>(),

            #[cfg(feature = "mmap")]
            UnitStorage::MmapReadWrite(m) => m.len() / core::mem::size_of::<U>(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the storage as a slice of units
    pub fn as_slice(&self) -> &[U] {
        match self {
            UnitStorage::InMemory(vec) => vec.as_slice(),

            #[cfg(feature = "mmap")]
            UnitStorage::MmapReadOnly(m) => bytemuck::cast_slice(m.as_ref()),

            #[cfg(feature = "mmap")]
            UnitStorage::MmapReadWrite(m) => bytemuck::cast_slice(m.as_ref()),
        }
    }

    /// Mutable slice view — valid only for InMemory and MmapReadWrite
    pub fn as_mut_slice(&mut self) -> Result<&mut [U], BufferError> {
        match self {
            UnitStorage::InMemory(vec) => Ok(vec.as_mut_slice()),

            #[cfg(feature = "mmap")]
            UnitStorage::MmapReadOnly(_) => Err(BufferError::ReadOnly),

            #[cfg(feature = "mmap")]
            UnitStorage::MmapReadWrite(m) => Ok(bytemuck::cast_slice_mut(m.as_mut())),
        }
    }

    //  Mmap constructors

    #[cfg(feature = "mmap")]
    pub fn from_mmap_readonly(path: &Path) -> Result<Self, BufferError> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        validate_layout::<U>(mmap.len())?;
        Ok(UnitStorage::MmapReadOnly(mmap))
    }

    #[cfg(feature = "mmap")]
    pub fn from_mmap_readwrite(path: &Path) -> Result<Self, BufferError> {
        let file = File::options().read(true).write(true).open(path)?;
        let mmap = unsafe { MmapMut::map_mut(&file)? };
        validate_layout::<U>(mmap.len())?;
        Ok(UnitStorage::MmapReadWrite(mmap))
    }
}

#[cfg(feature = "mmap")]
fn validate_layout<U: BitUnit>(byte_len: usize) -> Result<(), BufferError> {
    if byte_len % core::mem::size_of::<U>() != 0 {
        return Err(BufferError::InvalidLayout);
    }
    Ok(())
}
