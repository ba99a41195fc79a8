//! Line chart model and builder.
//!
//! A [`LineChart`] ties together layout, series, scales, axis ticks and
//! hover resolution. It is rebuilt whenever its inputs change; nothing in
//! it is updated in place.

use crate::axis::{AxisConfig, Tick};
use crate::config::ChartConfig;
use crate::geom::ScreenPoint;
use crate::hover::{PointGroups, PointerEvent, resolve_closest_points};
use crate::series::Series;
use crate::tooltip::{Tooltips, build_tooltips};
use crate::transform::Transform;
use crate::view::Range;

/// Hover result for one pointer event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverFrame {
    /// Pointer position in plot-local pixels, `None` once the pointer left.
    pub pointer: Option<ScreenPoint>,
    /// Resolved point groups.
    pub groups: PointGroups,
    /// Tooltips derived from the groups and the pointer.
    pub tooltips: Tooltips,
}

impl HoverFrame {
    /// Check whether nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.pointer.is_none() && self.groups.is_empty() && self.tooltips.is_empty()
    }
}

/// Line chart over year-indexed series.
#[derive(Debug, Clone)]
pub struct LineChart {
    config: ChartConfig,
    x_axis: AxisConfig,
    y_axis: AxisConfig,
    series: Vec<Series>,
    transform: Transform,
}

impl LineChart {
    /// Create a chart with default layout.
    pub fn new(series: Vec<Series>) -> Self {
        Self::builder().series_list(series).build()
    }

    /// Start building a chart with custom configuration.
    pub fn builder() -> LineChartBuilder {
        LineChartBuilder::default()
    }

    /// Access the layout.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Access the X axis configuration.
    pub fn x_axis(&self) -> &AxisConfig {
        &self.x_axis
    }

    /// Access the Y axis configuration.
    pub fn y_axis(&self) -> &AxisConfig {
        &self.y_axis
    }

    /// Heading shown above the chart: the y axis title, with its units.
    pub fn heading(&self) -> Option<String> {
        let title = self.y_axis.title()?;
        Some(match self.y_axis.units() {
            Some(units) => format!("{title} ({units})"),
            None => title.to_string(),
        })
    }

    /// Access all series.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Access the data to screen transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Compute year and value bounds across all series.
    pub fn data_bounds(&self) -> (Option<Range>, Option<Range>) {
        data_bounds(&self.series)
    }

    /// Labelled ticks along the x axis.
    pub fn x_ticks(&self) -> Vec<Tick> {
        self.x_axis.ticks(self.transform.x_scale())
    }

    /// Labelled ticks along the y axis.
    pub fn y_ticks(&self) -> Vec<Tick> {
        self.y_axis.ticks(self.transform.y_scale())
    }

    /// Plot-local line segments of a series.
    ///
    /// Missing values break the line, so every returned segment only joins
    /// consecutive present points.
    pub fn line_segments(&self, series: &Series) -> Vec<Vec<ScreenPoint>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for point in series.datapoints() {
            match self
                .transform
                .data_to_screen(f64::from(point.value_x), point.value_y)
            {
                Some(screen) => current.push(screen),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Resolve hover state for a pointer event in chart coordinates.
    ///
    /// The paddings are subtracted before resolution. A pointer outside the
    /// plot area, or over an element other than a line or the overlay,
    /// yields an empty frame.
    pub fn hover(&self, event: &PointerEvent) -> HoverFrame {
        let PointerEvent::Move { position, target } = *event else {
            return HoverFrame::default();
        };
        if !target.is_resolvable() {
            return HoverFrame::default();
        }
        let local = self.transform.chart_to_plot(position);
        if !self.transform.contains_local(local) {
            return HoverFrame::default();
        }
        let local_event = PointerEvent::Move {
            position: local,
            target,
        };
        let x_scale = self.transform.x_scale();
        let y_scale = self.transform.y_scale();
        let groups = resolve_closest_points(&local_event, Some(x_scale), Some(y_scale), &self.series);
        let tooltips = build_tooltips(&groups, local, x_scale, y_scale, &self.x_axis, &self.y_axis);
        HoverFrame {
            pointer: Some(local),
            groups,
            tooltips,
        }
    }
}

fn data_bounds(series: &[Series]) -> (Option<Range>, Option<Range>) {
    let mut x_range: Option<Range> = None;
    let mut y_range: Option<Range> = None;
    for series in series {
        if let Some(bounds) = series.x_bounds() {
            x_range = Some(match x_range {
                None => bounds,
                Some(existing) => Range::union(existing, bounds).unwrap_or(existing),
            });
        }
        if let Some(bounds) = series.y_bounds() {
            y_range = Some(match y_range {
                None => bounds,
                Some(existing) => Range::union(existing, bounds).unwrap_or(existing),
            });
        }
    }
    (x_range, y_range)
}

/// Builder for configuring a chart before construction.
#[derive(Debug, Clone)]
pub struct LineChartBuilder {
    config: ChartConfig,
    x_axis: AxisConfig,
    y_axis: AxisConfig,
    series: Vec<Series>,
}

impl Default for LineChartBuilder {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            x_axis: AxisConfig::years(),
            y_axis: AxisConfig::magnitudes(),
            series: Vec::new(),
        }
    }
}

impl LineChartBuilder {
    /// Set the layout.
    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the X axis configuration.
    pub fn x_axis(mut self, axis: AxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    /// Set the Y axis configuration.
    pub fn y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    /// Add a series to the chart.
    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Add several series to the chart.
    pub fn series_list(mut self, series: impl IntoIterator<Item = Series>) -> Self {
        self.series.extend(series);
        self
    }

    /// Build the chart.
    ///
    /// Tick counts come from the layout and override those of the axes.
    pub fn build(self) -> LineChart {
        let (x_domain, y_domain) = data_bounds(&self.series);
        let transform = Transform::new(self.config.plot_rect(), x_domain, y_domain);
        tracing::trace!(
            series = self.series.len(),
            ?x_domain,
            ?y_domain,
            "built line chart"
        );
        LineChart {
            x_axis: self.x_axis.with_tick_count(self.config.x_ticks),
            y_axis: self.y_axis.with_tick_count(self.config.y_ticks),
            config: self.config,
            series: self.series,
            transform,
        }
    }
}
