//! Chart and application configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it
//! overrides:
//!
//! ```toml
//! popup_height = 300
//! palette = ["#4472c4", "#ed7d31"]
//!
//! [chart]
//! width = 720
//!
//! [display_range]
//! start = 1990
//! end = 2020
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::scale::MAX_TICK_COUNT;
use crate::style::{Color, Palette};
use crate::view::YearRange;

/// Layout of one line chart.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Total chart width in pixels.
    pub width: f64,
    /// Total chart height in pixels.
    pub height: f64,
    /// Horizontal padding on each side of the plot area.
    pub x_padding: f64,
    /// Vertical padding above and below the plot area.
    pub y_padding: f64,
    /// Approximate number of x axis ticks.
    pub x_ticks: usize,
    /// Approximate number of y axis ticks.
    pub y_ticks: usize,
}

impl ChartConfig {
    /// Set the chart size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the paddings around the plot area.
    pub fn with_padding(mut self, x_padding: f64, y_padding: f64) -> Self {
        self.x_padding = x_padding;
        self.y_padding = y_padding;
        self
    }

    /// Set the approximate tick counts.
    pub fn with_ticks(mut self, x_ticks: usize, y_ticks: usize) -> Self {
        self.x_ticks = x_ticks;
        self.y_ticks = y_ticks;
        self
    }

    /// Plot area in chart coordinates; never negative in size.
    pub fn plot_rect(&self) -> ScreenRect {
        let width = (self.width - 2.0 * self.x_padding).max(0.0);
        let height = (self.height - 2.0 * self.y_padding).max(0.0);
        ScreenRect::from_origin_size(ScreenPoint::new(self.x_padding, self.y_padding), width, height)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let sizes = [("width", self.width), ("height", self.height)];
        for (field, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name}.{field} must be positive, got {value}"
                )));
            }
        }
        let paddings = [("x_padding", self.x_padding), ("y_padding", self.y_padding)];
        for (field, value) in paddings {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name}.{field} must not be negative, got {value}"
                )));
            }
        }
        let ticks = [("x_ticks", self.x_ticks), ("y_ticks", self.y_ticks)];
        for (field, value) in ticks {
            if value > MAX_TICK_COUNT {
                return Err(ConfigError::Invalid(format!(
                    "{name}.{field} must be at most {MAX_TICK_COUNT}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 460.0,
            x_padding: 80.0,
            y_padding: 24.0,
            x_ticks: 5,
            y_ticks: 5,
        }
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Layout of the popup charts.
    pub chart: ChartConfig,
    /// Height of each popup chart; overrides `chart.height`.
    pub popup_height: f64,
    /// Years shown by the charts.
    pub display_range: YearRange,
    /// Colors handed out to selected countries; empty uses the default palette.
    pub palette: Vec<Color>,
}

impl AppConfig {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).inspect_err(|error| {
            tracing::error!("Could not load config: {}", error);
        })
    }

    /// Check sizes and the display range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chart.validate("chart")?;
        if !self.popup_height.is_finite() || self.popup_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "popup_height must be positive, got {}",
                self.popup_height
            )));
        }
        if self.display_range.start > self.display_range.end
            || !self.display_range.is_within(YearRange::full())
        {
            let full = YearRange::full();
            return Err(ConfigError::Invalid(format!(
                "display_range {}..={} must lie within {}..={}",
                self.display_range.start, self.display_range.end, full.start, full.end
            )));
        }
        Ok(())
    }

    /// Layout used by the popup charts.
    pub fn popup_chart(&self) -> ChartConfig {
        self.chart.with_size(self.chart.width, self.popup_height)
    }

    /// Palette for selected countries.
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chart: ChartConfig::default(),
            popup_height: 250.0,
            display_range: YearRange::full(),
            palette: Vec::new(),
        }
    }
}
