//! Linear scales between data domains and pixel ranges.
//!
//! A scale is built from the observed data values: the domain is the
//! `[min, max]` of those values and maps onto a two-element pixel range.
//! Construction never fails. An empty value set produces a constant-zero
//! mapping and a single-valued domain maps everything to the start of the
//! range, so charts can be laid out before any data arrives.

use crate::view::Range;

/// Largest tick count a scale generates for.
pub const MAX_TICK_COUNT: usize = 100;

/// Affine mapping from a data domain onto a pixel range, with its inverse.
///
/// The range is kept exactly as given, so reversed ranges (for example a
/// y axis running from the plot bottom up to zero) are supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: Option<Range>,
    range: [f64; 2],
}

/// Build a linear scale over the finite values in `values`.
///
/// Missing (`None`) and non-finite values are excluded from the domain.
///
/// ```rust
/// use worldstats_plot::build_linear_scale;
///
/// let scale = build_linear_scale([1960.0, 1990.0, 2020.0], [0.0, 600.0]);
/// assert_eq!(scale.scale(1960.0), 0.0);
/// assert_eq!(scale.scale(2020.0), 600.0);
/// assert_eq!(scale.invert(300.0), 1990.0);
/// ```
pub fn build_linear_scale<I, T>(values: I, range: [f64; 2]) -> LinearScale
where
    I: IntoIterator<Item = T>,
    T: Into<Option<f64>>,
{
    LinearScale::new(Range::from_values(values), range)
}

impl LinearScale {
    /// Create a scale from an explicit domain.
    ///
    /// `None` stands for an empty value set.
    pub fn new(domain: Option<Range>, range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Access the data domain, if any values were observed.
    pub fn domain(&self) -> Option<Range> {
        self.domain
    }

    /// Access the pixel range.
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Check whether the scale was built from an empty value set.
    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
    }

    /// Check whether the domain collapses to a single value.
    pub fn is_degenerate(&self) -> bool {
        self.domain.is_some_and(|domain| domain.span() == 0.0)
    }

    /// Map a data value onto the pixel range.
    ///
    /// Values outside the domain extrapolate linearly.
    pub fn scale(&self, value: f64) -> f64 {
        let Some(domain) = self.domain else {
            return 0.0;
        };
        let [start, end] = self.range;
        let span = domain.span();
        if span == 0.0 {
            return start;
        }
        start + (value - domain.min) / span * (end - start)
    }

    /// Map an optional data value, returning `None` for missing or
    /// non-finite input.
    pub fn scale_opt(&self, value: Option<f64>) -> Option<f64> {
        let value = value.filter(|value| value.is_finite())?;
        let mapped = self.scale(value);
        mapped.is_finite().then_some(mapped)
    }

    /// Map a pixel position back into the data domain.
    pub fn invert(&self, pixel: f64) -> f64 {
        let Some(domain) = self.domain else {
            return 0.0;
        };
        let [start, end] = self.range;
        let pixels = end - start;
        if domain.span() == 0.0 || pixels == 0.0 {
            return domain.min;
        }
        domain.min + (pixel - start) / pixels * domain.span()
    }

    /// Generate round tick values inside the domain.
    ///
    /// Steps are 1, 2 or 5 times a power of ten, chosen so that roughly
    /// `count` ticks cover the domain. `count` is capped at
    /// [`MAX_TICK_COUNT`].
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let Some(domain) = self.domain else {
            return Vec::new();
        };
        if count == 0 || !domain.is_finite() {
            return Vec::new();
        }
        if domain.span() == 0.0 {
            return vec![domain.min];
        }
        let step = tick_step(domain.span(), count.min(MAX_TICK_COUNT));
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }
        // Divide by the inverse step so ticks like 0.3 stay exact. Subnormal
        // steps have no finite inverse and multiply instead.
        let inverse = (1.0 / step).round();
        if step < 1.0 && inverse.is_finite() {
            let first = (domain.min * inverse).ceil() as i64;
            let last = (domain.max * inverse).floor() as i64;
            tick_values(first, last, |i| i as f64 / inverse)
        } else {
            let first = (domain.min / step).ceil() as i64;
            let last = (domain.max / step).floor() as i64;
            tick_values(first, last, |i| i as f64 * step)
        }
    }
}

fn tick_values(first: i64, last: i64, value: impl Fn(i64) -> f64) -> Vec<f64> {
    // A 1/2/5 step never yields more than twice the requested count.
    if last.saturating_sub(first) > 2 * MAX_TICK_COUNT as i64 {
        return Vec::new();
    }
    (first..=last).map(value).collect()
}

fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let power = raw.log10().floor();
    let magnitude = 10_f64.powf(power);
    let error = raw / magnitude;
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_range_bounds() {
        let scale = build_linear_scale([40.0, 85.5, 62.0, 71.25], [0.0, 412.0]);
        assert_eq!(scale.scale(40.0), 0.0);
        assert_eq!(scale.scale(85.5), 412.0);

        let reversed = build_linear_scale([40.0, 85.5], [212.0, 0.0]);
        assert_eq!(reversed.scale(40.0), 212.0);
        assert_eq!(reversed.scale(85.5), 0.0);
        assert!(reversed.scale(50.0) > reversed.scale(60.0));
    }

    #[test]
    fn linear_roundtrip() {
        let scale = build_linear_scale([1960.0, 2020.0], [0.0, 740.0]);
        for value in [1960.0, 1961.0, 1987.5, 2003.0, 2020.0] {
            let roundtrip = scale.invert(scale.scale(value));
            assert!((roundtrip - value).abs() < 1e-9, "{value} -> {roundtrip}");
        }
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = build_linear_scale([5.0], [0.0, 100.0]);
        assert!(scale.is_degenerate());
        assert_eq!(scale.scale(5.0), 0.0);
        assert_eq!(scale.scale(99.0), 0.0);
        assert_eq!(scale.invert(42.0), 5.0);
    }

    #[test]
    fn empty_values_map_to_zero() {
        let scale = build_linear_scale(Vec::<f64>::new(), [10.0, 100.0]);
        assert!(scale.is_empty());
        assert_eq!(scale.scale(3.0), 0.0);
        assert_eq!(scale.invert(50.0), 0.0);
        assert!(scale.ticks(5).is_empty());
    }

    #[test]
    fn missing_values_are_excluded_from_domain() {
        let scale = build_linear_scale([None, Some(10.0), None, Some(20.0)], [0.0, 10.0]);
        assert_eq!(scale.domain(), Some(Range::new(10.0, 20.0)));
        assert_eq!(scale.scale_opt(None), None);
        assert_eq!(scale.scale_opt(Some(f64::NAN)), None);
        assert_eq!(scale.scale_opt(Some(15.0)), Some(5.0));
    }

    #[test]
    fn zero_width_range_inverts_to_domain_min() {
        let scale = build_linear_scale([0.0, 10.0], [0.0, 0.0]);
        assert_eq!(scale.invert(0.0), 0.0);
        assert_eq!(scale.scale(10.0), 0.0);
    }

    #[test]
    fn ticks_use_round_steps() {
        let years = build_linear_scale([1960.0, 2020.0], [0.0, 1.0]);
        assert_eq!(
            years.ticks(5),
            vec![1960.0, 1970.0, 1980.0, 1990.0, 2000.0, 2010.0, 2020.0]
        );

        let fractions = build_linear_scale([0.0, 1.0], [0.0, 1.0]);
        assert_eq!(fractions.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);

        let single = build_linear_scale([7.0], [0.0, 1.0]);
        assert_eq!(single.ticks(5), vec![7.0]);
    }

    #[test]
    fn subnormal_domain_ticks_stay_bounded() {
        let tiny = build_linear_scale([0.0, 1e-310], [0.0, 100.0]);
        let ticks = tiny.ticks(5);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 11, "{} ticks", ticks.len());
        assert!(ticks.iter().all(|tick| *tick >= 0.0 && *tick <= 1.1e-310));
    }

    #[test]
    fn tick_count_is_capped() {
        let years = build_linear_scale([1960.0, 2020.0], [0.0, 1.0]);
        let ticks = years.ticks(2_000_000);
        assert!(ticks.len() <= 2 * MAX_TICK_COUNT + 1, "{} ticks", ticks.len());
        assert_eq!(ticks.first(), Some(&1960.0));
        assert_eq!(ticks.last(), Some(&2020.0));
    }
}
