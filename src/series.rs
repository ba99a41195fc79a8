//! Chart series and the year-indexed series builder.

use std::fmt;

use crate::format::format_datum_text;
use crate::style::Color;
use crate::view::{Range, YearRange};

/// Identifier of a series, unique within one chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(String);

impl SeriesId {
    /// Create an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SeriesId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One observation of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Calendar year.
    pub value_x: i32,
    /// Measured value, `None` when the source has no data for the year.
    pub value_y: Option<f64>,
    /// Tooltip text, shown verbatim.
    pub text: Option<String>,
}

impl DataPoint {
    /// Create a data point without tooltip text.
    pub fn new(value_x: i32, value_y: Option<f64>) -> Self {
        Self {
            value_x,
            value_y,
            text: None,
        }
    }

    /// Attach tooltip text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Identity and styling of a series before its points are built.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesMeta {
    /// Series identifier.
    pub id: SeriesId,
    /// Human readable label, also used in tooltip text.
    pub label: String,
    /// Line color.
    pub color: Color,
    /// Unit appended to tooltip values.
    pub unit: Option<String>,
}

impl SeriesMeta {
    /// Create series metadata.
    pub fn new(id: impl Into<SeriesId>, label: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color,
            unit: None,
        }
    }

    /// Set the tooltip unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Labelled sequence of data points ordered by year.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    id: SeriesId,
    label: String,
    color: Color,
    datapoints: Vec<DataPoint>,
}

impl Series {
    /// Create a series from points; points are sorted by year.
    pub fn new(meta: SeriesMeta, mut datapoints: Vec<DataPoint>) -> Self {
        datapoints.sort_by_key(|point| point.value_x);
        Self {
            id: meta.id,
            label: meta.label,
            color: meta.color,
            datapoints,
        }
    }

    /// Access the series identifier.
    pub fn id(&self) -> &SeriesId {
        &self.id
    }

    /// Access the series label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Access the series color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Access the data points.
    pub fn datapoints(&self) -> &[DataPoint] {
        &self.datapoints
    }

    /// Check whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.datapoints.is_empty()
    }

    /// Find the point recorded for a year.
    pub fn point_at(&self, year: i32) -> Option<&DataPoint> {
        self.datapoints
            .binary_search_by_key(&year, |point| point.value_x)
            .ok()
            .map(|index| &self.datapoints[index])
    }

    /// Year span of the series.
    pub fn x_bounds(&self) -> Option<Range> {
        Range::from_values(self.datapoints.iter().map(|point| f64::from(point.value_x)))
    }

    /// Value span of the series, ignoring missing values.
    pub fn y_bounds(&self) -> Option<Range> {
        Range::from_values(self.datapoints.iter().map(|point| point.value_y))
    }
}

/// Build a series from a year-indexed array.
///
/// Entry `i` is recorded for year `start_year + i`; only years inside
/// `display` are kept. Missing or non-finite entries stay in the series with
/// `value_y = None`. Every point gets tooltip text from the label, year and
/// value.
pub fn build_series<I, T>(meta: SeriesMeta, values: I, start_year: i32, display: YearRange) -> Series
where
    I: IntoIterator<Item = T>,
    T: Into<Option<f64>>,
{
    let mut datapoints = Vec::with_capacity(display.len());
    for (index, value) in values.into_iter().enumerate() {
        let Some(year) = i32::try_from(index)
            .ok()
            .and_then(|offset| start_year.checked_add(offset))
        else {
            break;
        };
        if year > display.end {
            break;
        }
        if year < display.start {
            continue;
        }
        let value = value.into().filter(|value| value.is_finite());
        let text = format_datum_text(&meta.label, year, value, meta.unit.as_deref());
        datapoints.push(DataPoint::new(year, value).with_text(text));
    }
    Series {
        id: meta.id,
        label: meta.label,
        color: meta.color,
        datapoints,
    }
}
