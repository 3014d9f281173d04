use bytemuck::Pod;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use crate::PointListError;

/// The fixed-size slot buffer behind a [`PointList`](crate::PointList).
///
/// - All `capacity` slots are allocated (zero-filled) once, up front
/// - `len` counts the live prefix; slots past it are never handed out
#[derive(Debug, Clone)]
pub struct Storage<T: Pod> {
    slots: Box<[T]>,
    len: usize,
}

impl<T: Pod> Storage<T> {
    /// Allocate `capacity` zeroed slots, failing instead of aborting when the
    /// allocator refuses.
    pub fn with_capacity(capacity: usize) -> Result<Self, PointListError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| PointListError::AllocationFailure { capacity })?;
        slots.resize(capacity, T::zeroed());

        Ok(Storage {
            slots: slots.into_boxed_slice(),
            len: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Return live element count
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copy `value` into the next free slot
    pub fn push(&mut self, value: T) -> Result<(), PointListError> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(self.len)
            .ok_or(PointListError::CapacityExceeded { capacity })?;
        *slot = value;
        self.len += 1;
        Ok(())
    }

    /// Copy all of `values` or none of them
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), PointListError> {
        let end = self
            .len
            .checked_add(values.len())
            .filter(|&end| end <= self.slots.len())
            .ok_or(PointListError::CapacityExceeded {
                capacity: self.slots.len(),
            })?;
        self.slots[self.len..end].copy_from_slice(values);
        self.len = end;
        Ok(())
    }

    /// Read a reference to live element i
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.live().get(index)
    }

    /// The live prefix `[0, len)`
    #[inline]
    pub fn live(&self) -> &[T] {
        &self.slots[..self.len]
    }

    /// Mutable view of the live prefix; stale slots stay out of reach.
    #[inline]
    pub fn live_mut(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    /// Forget every live element. Slots are left as-is and get overwritten by
    /// later pushes.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}
