//! worldstats_plot is a headless chart model for per-country development
//! indicators (life expectancy, GDP, immunization) over 1960 to 2020.
//! It covers scales, formatting, hover resolution and series building; a
//! front end only has to draw what it returns.

#![forbid(unsafe_code)]

pub mod axis;
pub mod chart;
pub mod chart_data;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod geom;
pub mod hover;
pub mod interaction;
pub mod scale;
pub mod series;
pub mod state;
pub mod style;
pub mod tooltip;
pub mod transform;
pub mod view;

pub use axis::{AxisConfig, AxisFormatter, Tick, format_axis_tick};
pub use chart::{HoverFrame, LineChart, LineChartBuilder};
pub use chart_data::{PopupCharts, SelectedCountry, assign_colors, popup_charts};
pub use config::{AppConfig, ChartConfig};
pub use dataset::{Country, Dataset, MAX_YEAR, MIN_YEAR, Metric};
pub use error::{ConfigError, DatasetError};
pub use format::format_magnitude;
pub use geom::{ScreenPoint, ScreenRect};
pub use hover::{HoverTarget, PointGroup, PointGroups, PointerEvent, resolve_closest_points};
pub use interaction::HoverState;
pub use scale::{LinearScale, MAX_TICK_COUNT, build_linear_scale};
pub use series::{DataPoint, Series, SeriesId, SeriesMeta, build_series};
pub use state::{Action, AppState, Indicator};
pub use style::{Color, Palette};
pub use tooltip::Tooltips;
pub use transform::Transform;
pub use view::{Range, YearRange};
