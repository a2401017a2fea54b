//! Range descriptors with clamping slice semantics.

use core::iter::FusedIterator;
use core::num::NonZeroIsize;
use core::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::SliceError;

const ONE: NonZeroIsize = match NonZeroIsize::new(1) {
    Some(step) => step,
    None => unreachable!(),
};

/// A `(start, stop, step)` range over a sequence.
///
/// Bounds may be omitted or negative (counting from the end). Bounds outside
/// the sequence are clamped, so resolving a range never fails.
///
/// ```
/// use core::num::NonZeroIsize;
/// use deckrs::SliceRange;
///
/// let every_third = SliceRange::full().with_step(NonZeroIsize::new(3).unwrap());
/// assert_eq!(every_third.indices(7).collect::<Vec<_>>(), [0, 3, 6]);
///
/// let backwards = SliceRange::full().with_step(NonZeroIsize::new(-1).unwrap());
/// assert_eq!(backwards.indices(3).collect::<Vec<_>>(), [2, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceRange {
    /// First position, or `None` for the end the step walks away from.
    pub start: Option<isize>,
    /// Position to stop before, or `None` for the end the step walks towards.
    pub stop: Option<isize>,
    /// Distance between selected positions.
    pub step: NonZeroIsize,
}

impl SliceRange {
    /// Creates a range with the given bounds and a step of one.
    #[must_use]
    pub const fn new(start: Option<isize>, stop: Option<isize>) -> Self {
        Self {
            start,
            stop,
            step: ONE,
        }
    }

    /// Creates a range covering the whole sequence.
    #[must_use]
    pub const fn full() -> Self {
        Self::new(None, None)
    }

    /// Creates a range starting at `start` and running to the end.
    #[must_use]
    pub const fn from_start(start: isize) -> Self {
        Self::new(Some(start), None)
    }

    /// Creates a range from the beginning up to (excluding) `stop`.
    #[must_use]
    pub const fn up_to(stop: isize) -> Self {
        Self::new(None, Some(stop))
    }

    /// Replaces the step.
    #[must_use]
    pub const fn with_step(mut self, step: NonZeroIsize) -> Self {
        self.step = step;
        self
    }

    /// Replaces the step with an unchecked integer.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ZeroStep`] if `step` is zero.
    pub const fn try_with_step(self, step: isize) -> Result<Self, SliceError> {
        match NonZeroIsize::new(step) {
            Some(step) => Ok(self.with_step(step)),
            None => Err(SliceError::ZeroStep),
        }
    }

    /// Resolves the range against a sequence of `len` elements.
    ///
    /// Returns the selected positions in the order the step walks them.
    #[must_use]
    pub fn indices(&self, len: usize) -> SliceIndices {
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let step = self.step.get();
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(pos) if pos < 0 => (pos + len).max(lower),
            Some(pos) => pos.min(upper),
        };

        let (start, stop) = if step > 0 {
            (clamp(self.start, lower), clamp(self.stop, upper))
        } else {
            (clamp(self.start, upper), clamp(self.stop, lower))
        };

        let span = if step > 0 { stop - start } else { start - stop };
        let remaining = if span > 0 {
            (span as usize - 1) / step.unsigned_abs() + 1
        } else {
            0
        };

        log::trace!("slice {self:?} over {len} elements: start={start} count={remaining}");

        SliceIndices {
            next: start,
            step,
            remaining,
        }
    }
}

impl Default for SliceRange {
    fn default() -> Self {
        Self::full()
    }
}

impl From<Range<isize>> for SliceRange {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end))
    }
}

impl From<RangeFrom<isize>> for SliceRange {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::from_start(range.start)
    }
}

impl From<RangeTo<isize>> for SliceRange {
    fn from(range: RangeTo<isize>) -> Self {
        Self::up_to(range.end)
    }
}

impl From<RangeFull> for SliceRange {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

/// Iterator over the positions selected by a [`SliceRange`].
#[derive(Debug, Clone)]
pub struct SliceIndices {
    next: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next as usize;
        self.remaining -= 1;
        self.next = self.next.wrapping_add(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceIndices {}

impl FusedIterator for SliceIndices {}

/// Normalizes a scalar index that may count from the end.
///
/// Returns `None` when `index` is outside `[-len, len - 1]`.
///
/// ```
/// use deckrs::slice::resolve_index;
///
/// assert_eq!(resolve_index(-1, 52), Some(51));
/// assert_eq!(resolve_index(52, 52), None);
/// ```
#[must_use]
pub fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let len = isize::try_from(len).ok()?;
    let index = if index < 0 { index + len } else { index };
    (0..len).contains(&index).then_some(index as usize)
}
