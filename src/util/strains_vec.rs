use std::{iter::Copied, slice::Iter};

/// Strain peaks of consecutive sections.
///
/// All values must be non-negative.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrainsVec {
    inner: Vec<f64>,
}

impl StrainsVec {
    /// Constructs a new, empty [`StrainsVec`] with at least the specified
    /// capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of sections.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Appends a section peak.
    pub fn push(&mut self, value: f64) {
        debug_assert!(
            value >= 0.0,
            "attempted to push negative strain {value}, please report as a bug"
        );

        self.inner.push(value);
    }

    /// Removes all zeros and sorts the remaining peaks in descending order.
    ///
    /// Sections with zero strain never contribute to a difficulty value and
    /// only slow down the sort.
    pub fn retain_non_zero_and_sort(&mut self) {
        self.inner.retain(|&peak| peak > 0.0);
        self.inner.sort_by(|a, b| b.total_cmp(a));
    }

    /// Iterator over the peaks in section order.
    pub fn iter(&self) -> Copied<Iter<'_, f64>> {
        self.inner.iter().copied()
    }

    /// Same as [`StrainsVec::retain_non_zero_and_sort`] followed by
    /// [`StrainsVec::iter`].
    pub fn sorted_non_zero_iter(&mut self) -> Copied<Iter<'_, f64>> {
        self.retain_non_zero_and_sort();

        self.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.inner
    }
}
