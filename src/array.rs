//! Capacity-bounded, index-addressable container.
//!
//! Most containers in this crate are plain `Vec<T>`. [`BoundedArray`] exists
//! for the registries whose size is part of the model: it has a fixed
//! capacity chosen at creation and a separate "filled count" that behaves
//! like an append cursor while still allowing overwrites of filled slots.
//!
//! Indexing outside `0..capacity` is a programming error and panics.

// ============================================================================
// BoundedArray
// ============================================================================

/// Fixed-capacity registry with a current filled count.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedArray<T> {
    elements: Vec<Option<T>>,
    count: usize,
}

impl<T> BoundedArray<T> {
    /// Create an empty array able to hold `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        let mut elements = Vec::with_capacity(capacity);
        elements.resize_with(capacity, || None);
        Self { elements, count: 0 }
    }

    /// Maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Number of filled elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Store `value` at `index`.
    ///
    /// The filled count grows to `index + 1` only when `index` is at or past
    /// the current count, so overwriting a filled slot never double-counts.
    ///
    /// # Panics
    /// If `index >= capacity`.
    pub fn set(&mut self, index: usize, value: T) {
        assert!(
            index < self.capacity(),
            "BoundedArray index {} out of capacity {}",
            index,
            self.capacity()
        );
        if index >= self.count {
            self.count = index + 1;
        }
        self.elements[index] = Some(value);
    }

    /// Append at the current count and return the index used.
    ///
    /// # Panics
    /// If the array is full.
    pub fn push(&mut self, value: T) -> usize {
        let index = self.count;
        self.set(index, value);
        index
    }

    /// Element at `index`.
    ///
    /// # Panics
    /// If `index >= capacity` or the slot was never set.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index)
            .unwrap_or_else(|| panic!("BoundedArray slot {} is empty", index))
    }

    /// Mutable element at `index`.
    ///
    /// # Panics
    /// If `index >= capacity` or the slot was never set.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.capacity(),
            "BoundedArray index {} out of capacity {}",
            index,
            self.capacity()
        );
        self.elements[index]
            .as_mut()
            .unwrap_or_else(|| panic!("BoundedArray slot {} is empty", index))
    }

    /// Element at `index`, or `None` for a slot that was never set.
    ///
    /// # Panics
    /// If `index >= capacity`.
    pub fn try_get(&self, index: usize) -> Option<&T> {
        assert!(
            index < self.capacity(),
            "BoundedArray index {} out of capacity {}",
            index,
            self.capacity()
        );
        self.elements[index].as_ref()
    }

    /// Iterate the filled prefix `0..count`, skipping holes.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements[..self.count].iter().filter_map(Option::as_ref)
    }

    /// Mutable iteration over the filled prefix, skipping holes.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.elements[..self.count]
            .iter_mut()
            .filter_map(Option::as_mut)
    }

    /// Drop every element and reset the count. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in self.elements.iter_mut() {
            *slot = None;
        }
        self.count = 0;
    }
}

// ============================================================================
// Tests
// ============================================================================
