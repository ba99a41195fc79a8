//! Tooltip content derived from resolved hover groups.

use crate::axis::AxisConfig;
use crate::geom::ScreenPoint;
use crate::hover::{PointGroups, snap_year};
use crate::scale::LinearScale;
use crate::style::Color;

/// One line of a point tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    /// Color of the series the row describes.
    pub color: Color,
    /// Row text.
    pub text: String,
}

/// Tooltip attached to a point group indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTooltip {
    /// Identifier of the group.
    pub group_id: String,
    /// Indicator position in plot-local pixels.
    pub anchor: ScreenPoint,
    /// One row per grouped point, in series order.
    pub rows: Vec<TooltipRow>,
}

/// Label pinned to an axis edge.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTooltip {
    /// Position along the axis in plot-local pixels.
    pub position: f64,
    /// Formatted value.
    pub label: String,
}

/// All tooltips shown for one pointer position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltips {
    /// Point tooltips, one per group.
    pub points: Vec<PointTooltip>,
    /// Snapped year along the bottom edge.
    pub x_axis: Option<AxisTooltip>,
    /// Value under the pointer along the left edge.
    pub y_axis: Option<AxisTooltip>,
}

impl Tooltips {
    /// Check whether nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.x_axis.is_none() && self.y_axis.is_none()
    }
}

/// Build tooltips for a pointer position and its resolved groups.
///
/// Rows use the point's own text; points without text fall back to the y
/// formatter. The x tooltip sits on the snapped year, the y tooltip follows
/// the pointer.
pub fn build_tooltips(
    groups: &PointGroups,
    pointer: ScreenPoint,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    x_axis: &AxisConfig,
    y_axis: &AxisConfig,
) -> Tooltips {
    let points = groups
        .iter()
        .map(|group| PointTooltip {
            group_id: group.id.clone(),
            anchor: group.position(),
            rows: group
                .points
                .iter()
                .map(|point| TooltipRow {
                    color: point.color,
                    text: point.data.text.clone().unwrap_or_else(|| {
                        let value = point.data.value_y.map_or_else(String::new, |value| {
                            y_axis.formatter().format(value)
                        });
                        format!("{}: {value}", point.data.value_x)
                    }),
                })
                .collect(),
        })
        .collect();

    let x_tooltip = if x_scale.is_empty() {
        None
    } else {
        snap_year(x_scale, pointer.x).map(|year| {
            let year = f64::from(year);
            AxisTooltip {
                position: x_scale.scale(year),
                label: x_axis.formatter().format(year),
            }
        })
    };
    let y_tooltip = (!y_scale.is_empty()).then(|| AxisTooltip {
        position: pointer.y,
        label: y_axis.formatter().format(y_scale.invert(pointer.y)),
    });

    Tooltips {
        points,
        x_axis: x_tooltip,
        y_axis: y_tooltip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hover::{PointerEvent, resolve_closest_points};
    use crate::scale::build_linear_scale;
    use crate::series::{DataPoint, Series, SeriesMeta};

    #[test]
    fn tooltips_follow_groups_and_pointer() {
        let x = build_linear_scale([1960.0, 2020.0], [0.0, 600.0]);
        let y = build_linear_scale([0.0, 40_000.0], [200.0, 0.0]);
        let series = [Series::new(
            SeriesMeta::new("deu", "Germany", Color::BLACK),
            vec![
                DataPoint::new(1960, Some(20_000.0)).with_text("Germany 1960: 20000"),
                DataPoint::new(1961, Some(30_000.0)),
            ],
        )];
        let pointer = ScreenPoint::new(8.0, 50.0);
        let groups = resolve_closest_points(&PointerEvent::moved(8.0, 50.0), Some(&x), Some(&y), &series);
        let tooltips = build_tooltips(
            &groups,
            pointer,
            &x,
            &y,
            &AxisConfig::years(),
            &AxisConfig::magnitudes(),
        );

        assert_eq!(tooltips.points.len(), 1);
        assert_eq!(tooltips.points[0].rows[0].text, "1961: 30K");
        let x_tooltip = tooltips.x_axis.unwrap();
        assert_eq!(x_tooltip.label, "1961");
        assert!((x_tooltip.position - 10.0).abs() < 1e-9);
        let y_tooltip = tooltips.y_axis.unwrap();
        assert_eq!(y_tooltip.label, "30K");
        assert_eq!(y_tooltip.position, 50.0);
    }

    #[test]
    fn empty_scales_show_nothing() {
        let empty = build_linear_scale(Vec::<f64>::new(), [0.0, 100.0]);
        let tooltips = build_tooltips(
            &PointGroups::default(),
            ScreenPoint::new(5.0, 5.0),
            &empty,
            &empty,
            &AxisConfig::years(),
            &AxisConfig::magnitudes(),
        );
        assert!(tooltips.is_empty());
    }
}
