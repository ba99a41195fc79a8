//! Closest-point resolution for pointer hover.
//!
//! A pointer position is snapped to the nearest year on the x scale and
//! every series contributes the point recorded for that year. Points landing
//! on the same pixel are grouped so one indicator can carry several tooltip
//! rows.

use crate::geom::ScreenPoint;
use crate::scale::LinearScale;
use crate::series::{DataPoint, Series, SeriesId};
use crate::style::Color;

/// Kind of element a pointer event originated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    /// A series line.
    Path,
    /// The transparent overlay covering the plot area.
    Rect,
    /// A point indicator.
    Circle,
    /// A text label.
    Text,
    /// Anything else.
    Other,
}

impl HoverTarget {
    /// Only line paths and the overlay rectangle start a resolution.
    pub fn is_resolvable(self) -> bool {
        matches!(self, Self::Path | Self::Rect)
    }
}

/// Pointer input in plot-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved over an element of the chart.
    Move {
        /// Pointer position relative to the plot area origin.
        position: ScreenPoint,
        /// Element the event originated on.
        target: HoverTarget,
    },
    /// The pointer left the chart.
    Leave,
}

impl PointerEvent {
    /// Move event over the plot overlay.
    pub fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: ScreenPoint::new(x, y),
            target: HoverTarget::Rect,
        }
    }

    /// Pointer position, if the event carries one.
    pub fn position(&self) -> Option<ScreenPoint> {
        match self {
            Self::Move { position, .. } => Some(*position),
            Self::Leave => None,
        }
    }
}

/// One series point inside a [`PointGroup`].
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedPoint {
    /// Series the point belongs to.
    pub series_id: SeriesId,
    /// Series color.
    pub color: Color,
    /// The data point itself.
    pub data: DataPoint,
}

/// Points of several series sharing one pixel position.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGroup {
    /// Group identifier derived from the pixel position.
    pub id: String,
    /// Snapped x pixel.
    pub x: f64,
    /// Y pixel.
    pub y: f64,
    /// Points in series order.
    pub points: Vec<GroupedPoint>,
}

impl PointGroup {
    /// Indicator position.
    pub fn position(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }
}

/// Groups in the order they were first created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointGroups {
    groups: Vec<PointGroup>,
}

impl PointGroups {
    /// Look up a group by identifier.
    pub fn get(&self, id: &str) -> Option<&PointGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    /// Iterate groups in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, PointGroup> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check whether no point was resolved.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn insert(&mut self, x: f64, y: f64, point: GroupedPoint) {
        let existing = self
            .groups
            .iter_mut()
            .find(|group| group.x.to_bits() == x.to_bits() && group.y.to_bits() == y.to_bits());
        match existing {
            Some(group) => group.points.push(point),
            None => self.groups.push(PointGroup {
                id: format!("{x}-{y}"),
                x,
                y,
                points: vec![point],
            }),
        }
    }
}

impl<'a> IntoIterator for &'a PointGroups {
    type Item = &'a PointGroup;
    type IntoIter = std::slice::Iter<'a, PointGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Year under a plot-local x pixel, rounded to the nearest integer.
pub fn snap_year(x_scale: &LinearScale, pixel: f64) -> Option<i32> {
    let year = x_scale.invert(pixel).round();
    if !year.is_finite() || year < f64::from(i32::MIN) || year > f64::from(i32::MAX) {
        return None;
    }
    Some(year as i32)
}

/// Resolve the series points closest to the pointer's x position.
///
/// Events that are not a move over a path or the overlay rectangle, missing
/// scales and empty series lists all resolve to no groups. A series without
/// a point at the snapped year, or whose value cannot be scaled, contributes
/// nothing.
pub fn resolve_closest_points(
    event: &PointerEvent,
    x_scale: Option<&LinearScale>,
    y_scale: Option<&LinearScale>,
    series: &[Series],
) -> PointGroups {
    let mut groups = PointGroups::default();
    let PointerEvent::Move { position, target } = *event else {
        return groups;
    };
    if !target.is_resolvable() {
        tracing::trace!("ignoring pointer over {:?}", target);
        return groups;
    }
    let (Some(x_scale), Some(y_scale)) = (x_scale, y_scale) else {
        return groups;
    };
    let Some(year) = snap_year(x_scale, position.x) else {
        return groups;
    };
    let x = x_scale.scale(f64::from(year));

    for series in series {
        let Some(point) = series.point_at(year) else {
            continue;
        };
        let Some(y) = y_scale.scale_opt(point.value_y) else {
            continue;
        };
        groups.insert(
            x,
            y,
            GroupedPoint {
                series_id: series.id().clone(),
                color: series.color(),
                data: point.clone(),
            },
        );
    }
    tracing::trace!(year, groups = groups.len(), "resolved hover");
    groups
}
