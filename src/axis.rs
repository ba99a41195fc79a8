//! Axis configuration, ticks, and formatting.

use std::sync::Arc;

use crate::format::{format_magnitude, format_plain, format_round};
use crate::scale::LinearScale;

/// Formatter for axis tick labels and axis tooltips.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Plain numeric text.
    #[default]
    Default,
    /// Nearest integer, used for year axes.
    Round,
    /// Magnitude abbreviation (`K`, `MM`, `B`, `T`).
    Magnitude,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Wrap a custom formatter callback.
    pub fn custom(formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(formatter))
    }

    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format_plain(value),
            Self::Round => format_round(value),
            Self::Magnitude => format_magnitude(value),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Round => write!(f, "AxisFormatter::Round"),
            Self::Magnitude => write!(f, "AxisFormatter::Magnitude"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// Build a tick label function; plain numeric text when no formatter is given.
pub fn format_axis_tick(formatter: Option<AxisFormatter>) -> impl Fn(f64) -> String {
    let formatter = formatter.unwrap_or_default();
    move |value| formatter.format(value)
}

/// One labelled axis tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Tick value in data units.
    pub value: f64,
    /// Tick position in plot-local pixels along the axis.
    pub position: f64,
    /// Formatted label.
    pub label: String,
}

/// Axis configuration for one chart axis.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    title: Option<String>,
    units: Option<String>,
    formatter: AxisFormatter,
    tick_count: usize,
}

impl AxisConfig {
    /// Create an axis configuration with the given formatter.
    pub fn new(formatter: AxisFormatter) -> Self {
        Self {
            title: None,
            units: None,
            formatter,
            tick_count: 5,
        }
    }

    /// Year axis: integer labels.
    pub fn years() -> Self {
        Self::new(AxisFormatter::Round)
    }

    /// Value axis: abbreviated magnitudes.
    pub fn magnitudes() -> Self {
        Self::new(AxisFormatter::Magnitude)
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the axis units.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Set the axis formatter.
    pub fn with_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the approximate number of ticks.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Access the axis title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Access the axis units.
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// Access the formatter.
    pub fn formatter(&self) -> &AxisFormatter {
        &self.formatter
    }

    /// Access the approximate number of ticks.
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Labelled ticks for the given scale.
    pub fn ticks(&self, scale: &LinearScale) -> Vec<Tick> {
        scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| Tick {
                value,
                position: scale.scale(value),
                label: self.formatter.format(value),
            })
            .collect()
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::new(AxisFormatter::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::build_linear_scale;

    #[test]
    fn axis_tick_is_identity_without_formatter() {
        let format = format_axis_tick(None);
        assert_eq!(format(72.5), "72.5");
        assert_eq!(format(1960.0), "1960");

        let format = format_axis_tick(Some(AxisFormatter::Magnitude));
        assert_eq!(format(25_000.0), "25K");

        let format = format_axis_tick(Some(AxisFormatter::custom(|value| format!("{value}y"))));
        assert_eq!(format(81.0), "81y");
    }

    #[test]
    fn ticks_carry_positions_and_labels() {
        let scale = build_linear_scale([0.0, 40_000.0], [200.0, 0.0]);
        let ticks = AxisConfig::magnitudes().with_tick_count(4).ticks(&scale);
        let labels: Vec<_> = ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, ["0", "10K", "20K", "30K", "40K"]);
        assert_eq!(ticks[0].position, 200.0);
        assert_eq!(ticks[4].position, 0.0);
    }
}
