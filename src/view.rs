//! Numeric ranges and year windows.

use serde::Deserialize;

use crate::dataset::{MAX_YEAR, MIN_YEAR};

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Smallest range covering every finite value.
    ///
    /// Missing and non-finite values are skipped; returns `None` when nothing
    /// remains.
    pub fn from_values<I, T>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<f64>>,
    {
        let mut range: Option<Self> = None;
        for value in values.into_iter().filter_map(Into::into) {
            if !value.is_finite() {
                continue;
            }
            match range.as_mut() {
                Some(range) => range.expand_to_include(value),
                None => range = Some(Self::new(value, value)),
            }
        }
        range
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Union two ranges if both are finite.
    pub fn union(a: Self, b: Self) -> Option<Self> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        Some(Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        })
    }
}

/// Inclusive window of calendar years shown by a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct YearRange {
    /// First displayed year.
    pub start: i32,
    /// Last displayed year.
    pub end: i32,
}

impl YearRange {
    /// Create a year window, swapping bounds if needed.
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// The full window covered by the dataset.
    pub const fn full() -> Self {
        Self {
            start: MIN_YEAR,
            end: MAX_YEAR,
        }
    }

    /// Check whether the year lies inside the window.
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// Number of years in the window.
    pub fn len(&self) -> usize {
        usize::try_from(self.end - self.start).map_or(0, |span| span + 1)
    }

    /// Check whether the window holds no years.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Clamp a year into the window.
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.start, self.end)
    }

    /// Check whether this window lies inside `other`.
    pub fn is_within(&self, other: YearRange) -> bool {
        other.contains(self.start) && other.contains(self.end)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::full()
    }
}
