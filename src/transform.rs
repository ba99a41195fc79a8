//! Coordinate transforms between data, plot-local and chart space.

use crate::geom::{ScreenPoint, ScreenRect};
use crate::scale::LinearScale;
use crate::view::Range;

/// Transform from data coordinates into plot-local screen coordinates.
///
/// The x scale maps years onto `[0, plot width]`, the y scale maps values
/// onto `[plot height, 0]` so larger values sit higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    plot: ScreenRect,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl Transform {
    /// Create a transform for the given plot rectangle and data domains.
    ///
    /// `None` domains produce constant-zero scales.
    pub fn new(plot: ScreenRect, x_domain: Option<Range>, y_domain: Option<Range>) -> Self {
        let width = plot.width().max(0.0);
        let height = plot.height().max(0.0);
        Self {
            plot,
            x_scale: LinearScale::new(x_domain, [0.0, width]),
            y_scale: LinearScale::new(y_domain, [height, 0.0]),
        }
    }

    /// Plot rectangle in chart coordinates.
    pub fn plot(&self) -> ScreenRect {
        self.plot
    }

    /// Scale for the x axis.
    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    /// Scale for the y axis.
    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    /// Map a data point into plot-local coordinates.
    ///
    /// Missing or non-finite values have no screen position.
    pub fn data_to_screen(&self, x: f64, y: Option<f64>) -> Option<ScreenPoint> {
        let sx = self.x_scale.scale_opt(Some(x))?;
        let sy = self.y_scale.scale_opt(y)?;
        Some(ScreenPoint::new(sx, sy))
    }

    /// Map a plot-local point back into data space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> (f64, f64) {
        (self.x_scale.invert(point.x), self.y_scale.invert(point.y))
    }

    /// Convert a chart-space point into plot-local coordinates.
    pub fn chart_to_plot(&self, point: ScreenPoint) -> ScreenPoint {
        self.plot.to_local(point)
    }

    /// Convert a plot-local point into chart space.
    pub fn plot_to_chart(&self, point: ScreenPoint) -> ScreenPoint {
        point.offset(self.plot.min.x, self.plot.min.y)
    }

    /// Check whether a plot-local point lies inside the plot area.
    pub fn contains_local(&self, point: ScreenPoint) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x <= self.plot.width()
            && point.y <= self.plot.height()
    }
}
