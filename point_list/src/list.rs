use crate::heap::{self, ByKey, Compare, Natural};
use crate::{PointListError, Storage};
use bytemuck::Pod;
use tracing::{debug, trace};

/// Bounded, insertion-ordered list of points with an in-place heapsort.
///
/// `PointList<T>` allocates room for exactly `capacity` points when it is
/// created and never grows. Points go in by copy and come out by copy, so a
/// value read from the list can be changed freely without touching the stored
/// one. `T` must implement [`bytemuck::Pod`].
///
/// # Examples
///
/// ## Filling a list
///
/// ```
/// use point_list::{PointList, PointListError};
/// use bytemuck_derive::{Pod, Zeroable};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
/// struct Pt { x: i32, y: i32 }
///
/// let mut list = PointList::<Pt>::with_capacity(2).unwrap();
///
/// list.push(Pt { x: 0, y: 0 }).unwrap();
/// list.push(Pt { x: 5, y: 5 }).unwrap();
///
/// // Full: the third point is turned away and nothing changes
/// assert_eq!(
///     list.push(Pt { x: 2, y: 2 }),
///     Err(PointListError::CapacityExceeded { capacity: 2 })
/// );
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(1), Some(Pt { x: 5, y: 5 }));
/// ```
///
/// ## Sorting with a comparator
///
/// ```
/// use point_list::PointList;
/// use bytemuck_derive::{Pod, Zeroable};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
/// struct Pt { x: i32, y: i32 }
///
/// let mut list = PointList::with_capacity(3).unwrap();
/// list.push(Pt { x: 0, y: 0 }).unwrap();
/// list.push(Pt { x: 5, y: 5 }).unwrap();
/// list.push(Pt { x: 2, y: 2 }).unwrap();
///
/// list.sort_by(|a: &Pt, b: &Pt| (a.x + a.y).cmp(&(b.x + b.y)));
///
/// let xs: Vec<i32> = list.iter().map(|p| p.x).collect();
/// assert_eq!(xs, [0, 2, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct PointList<T: Pod> {
    storage: Storage<T>,
}

impl<T: Pod> PointList<T> {
    /// Creates an empty list that can hold up to `capacity` points.
    ///
    /// A capacity of zero is allowed; such a list rejects every push.
    ///
    /// # Errors
    ///
    /// Returns `PointListError::AllocationFailure` if the backing storage
    /// cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use point_list::{PointList, PointListError};
    ///
    /// let list = PointList::<[f64; 2]>::with_capacity(16).unwrap();
    /// assert_eq!(list.capacity(), 16);
    /// assert!(list.is_empty());
    ///
    /// assert!(matches!(
    ///     PointList::<[f64; 2]>::with_capacity(usize::MAX),
    ///     Err(PointListError::AllocationFailure { .. })
    /// ));
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, PointListError> {
        Ok(PointList {
            storage: Storage::with_capacity(capacity)?,
        })
    }

    /// Maximum number of points, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the number of points in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Free slots left before the list is full.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Appends a copy of `point` to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns `PointListError::CapacityExceeded` if the list is full. The
    /// list is left unchanged.
    pub fn push(&mut self, point: T) -> Result<(), PointListError> {
        self.storage.push(point).inspect_err(|_| {
            debug!(capacity = self.capacity(), "point rejected, list is full");
        })
    }

    /// Appends copies of all `points`, or none of them.
    ///
    /// # Errors
    ///
    /// Returns `PointListError::CapacityExceeded` if the points do not all
    /// fit. The list is left unchanged.
    pub fn extend_from_slice(&mut self, points: &[T]) -> Result<(), PointListError> {
        self.storage.extend_from_slice(points).inspect_err(|_| {
            debug!(
                capacity = self.capacity(),
                len = self.len(),
                incoming = points.len(),
                "batch rejected, list would overflow"
            );
        })
    }

    /// Returns a copy of the point at `index`, or `None` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use point_list::PointList;
    ///
    /// let mut list = PointList::with_capacity(4).unwrap();
    /// list.push([1.0f64, 2.0]).unwrap();
    ///
    /// let mut copy = list.get(0).unwrap();
    /// copy[0] = 99.0;
    /// assert_eq!(list.get(0), Some([1.0, 2.0]));
    /// assert_eq!(list.get(1), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.storage.get(index).copied()
    }

    /// Copies the point at `index` into `out`.
    ///
    /// When `index >= len()` this does nothing: `out` keeps whatever it held.
    /// Returns whether a copy was made.
    ///
    /// # Examples
    ///
    /// ```
    /// use point_list::PointList;
    ///
    /// let mut list = PointList::with_capacity(1).unwrap();
    /// list.push([3u32, 4]).unwrap();
    ///
    /// let mut out = [0u32, 0];
    /// assert!(!list.read_into(5, &mut out));
    /// assert_eq!(out, [0, 0]);
    ///
    /// assert!(list.read_into(0, &mut out));
    /// assert_eq!(out, [3, 4]);
    /// ```
    pub fn read_into(&self, index: usize, out: &mut T) -> bool {
        match self.storage.get(index) {
            Some(point) => {
                *out = *point;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if some stored point equals `point`.
    ///
    /// Linear in `len()`.
    pub fn contains(&self, point: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().iter().any(|stored| stored == point)
    }

    /// Sorts the list ascending by `compare`, in place.
    ///
    /// Heapsort: no extra buffer, `O(n log n)`, not stable. Lists of zero or
    /// one point are left untouched and the comparator is never called.
    pub fn sort_by<C>(&mut self, compare: C)
    where
        C: Compare<T>,
    {
        let items = self.storage.live_mut();
        if items.len() < 2 {
            return;
        }

        trace!(len = items.len(), "heapsort start");
        let swaps = heap::heapsort(items, &compare);
        trace!(swaps, "heapsort done");
    }

    /// Sorts the list ascending by `T`'s own ordering.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Natural);
    }

    /// Sorts the list ascending by the key `f` extracts.
    pub fn sort_by_key<K, F>(&mut self, f: F)
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.sort_by(ByKey(f));
    }

    /// Removes every point. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Returns the stored points as a slice, in list order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.live()
    }

    /// Returns an iterator over the stored points.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

#[cfg(feature = "std")]
impl<T: Pod + crate::FormatPoint> PointList<T> {
    /// Writes every point to `out` using the point's own formatting of `fmt`.
    ///
    /// If `fmt` ends with a line terminator, the terminator is written once at
    /// the end of the list rather than after every point.
    ///
    /// # Errors
    ///
    /// Propagates any error from the sink or from the point's formatter.
    pub fn write_formatted<W: std::io::Write>(
        &self,
        out: &mut W,
        fmt: &str,
    ) -> std::io::Result<()> {
        crate::output::write_points(out, fmt, self.as_slice())
    }
}

// Panics on an index past `len()`, like slice indexing.
impl<T: Pod> core::ops::Index<usize> for PointList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a, T: Pod> IntoIterator for &'a PointList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
