//! Series sets for the popup charts of the selected countries.

use crate::axis::AxisConfig;
use crate::chart::LineChart;
use crate::config::AppConfig;
use crate::dataset::{Country, CountryInsights, Dataset, MIN_YEAR, Metric};
use crate::series::{Series, SeriesMeta, build_series};
use crate::state::AppState;
use crate::style::{ALL_COLOR, Color, FEMALE_COLOR, MALE_COLOR, Palette};
use crate::view::YearRange;

/// A selected country together with its chart color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedCountry<'a> {
    /// The country record.
    pub country: &'a Country,
    /// Line and legend color.
    pub color: Color,
    /// Legend text color readable on `color`.
    pub text_color: Color,
}

/// Give every country a palette color by selection order.
pub fn assign_colors<'a>(
    countries: impl IntoIterator<Item = &'a Country>,
    palette: &Palette,
) -> Vec<SelectedCountry<'a>> {
    countries
        .into_iter()
        .enumerate()
        .map(|(index, country)| {
            let color = palette.color(index);
            SelectedCountry {
                country,
                color,
                text_color: color.contrasting_text(),
            }
        })
        .collect()
}

fn metric_series(
    country: &Country,
    metric: Metric,
    label: String,
    color: Color,
    display: YearRange,
) -> Option<Series> {
    let values = country.values(metric)?;
    let meta = SeriesMeta::new(format!("{}-{}", country.code(), metric.key()), label, color)
        .with_unit(metric.unit());
    Some(build_series(meta, values.iter().copied(), MIN_YEAR, display))
}

/// Life expectancy series.
///
/// A single country shows its total, male and female curves; several
/// countries show one total curve each, in the country's color. Countries
/// without the metric contribute nothing.
pub fn life_expectancy_chart(selection: &[SelectedCountry<'_>], display: YearRange) -> Vec<Series> {
    match selection {
        [single] => {
            let country = single.country;
            let name = country.name();
            [
                (Metric::LifeExpAll, name.to_string(), ALL_COLOR),
                (Metric::LifeExpMale, format!("{name} (male)"), MALE_COLOR),
                (Metric::LifeExpFemale, format!("{name} (female)"), FEMALE_COLOR),
            ]
            .into_iter()
            .filter_map(|(metric, label, color)| metric_series(country, metric, label, color, display))
            .collect()
        }
        _ => indicator_chart(Metric::LifeExpAll, selection, display),
    }
}

/// One series per selected country for the given metric.
pub fn indicator_chart(
    metric: Metric,
    selection: &[SelectedCountry<'_>],
    display: YearRange,
) -> Vec<Series> {
    selection
        .iter()
        .filter_map(|selected| {
            let country = selected.country;
            metric_series(country, metric, country.name().to_string(), selected.color, display)
        })
        .collect()
}

/// Legend entry of a selected country.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Country code.
    pub code: String,
    /// Country name.
    pub name: String,
    /// Chart color.
    pub color: Color,
    /// Text color readable on `color`.
    pub text_color: Color,
}

/// Everything the popup shows for the current selection.
#[derive(Debug, Clone)]
pub struct PopupCharts {
    /// Country name when exactly one country is selected.
    pub title: Option<String>,
    /// Selected countries with their colors, in selection order.
    pub legend: Vec<LegendEntry>,
    /// Life expectancy chart.
    pub life_expectancy: LineChart,
    /// Chart of the active map indicator.
    pub indicator: LineChart,
    /// Insights when exactly one country is selected.
    pub insights: Option<CountryInsights>,
}

/// Build the popup for the current state, or `None` when nothing known is
/// selected.
///
/// Selected codes missing from the dataset are skipped.
pub fn popup_charts(state: &AppState, dataset: &Dataset, config: &AppConfig) -> Option<PopupCharts> {
    let countries: Vec<&Country> = state
        .selected()
        .iter()
        .filter_map(|code| {
            let country = dataset.country(code);
            if country.is_none() {
                tracing::warn!("selected country {} is not in the dataset", code);
            }
            country
        })
        .collect();
    if countries.is_empty() {
        return None;
    }
    let palette = config.palette();
    let selection = assign_colors(countries, &palette);
    let display = config.display_range;
    let metric = state.indicator().metric();
    let layout = config.popup_chart();

    let life_expectancy = LineChart::builder()
        .config(layout)
        .y_axis(
            AxisConfig::magnitudes()
                .with_title(Metric::LifeExpAll.label())
                .with_units(Metric::LifeExpAll.unit()),
        )
        .series_list(life_expectancy_chart(&selection, display))
        .build();
    let indicator = LineChart::builder()
        .config(layout)
        .y_axis(
            AxisConfig::magnitudes()
                .with_title(metric.label())
                .with_units(metric.unit()),
        )
        .series_list(indicator_chart(metric, &selection, display))
        .build();

    let single = match selection.as_slice() {
        [single] => Some(single.country),
        _ => None,
    };
    let legend = selection
        .iter()
        .map(|selected| LegendEntry {
            code: selected.country.code().to_string(),
            name: selected.country.name().to_string(),
            color: selected.color,
            text_color: selected.text_color,
        })
        .collect();

    Some(PopupCharts {
        title: single.map(|country| country.name().to_string()),
        legend,
        life_expectancy,
        indicator,
        insights: single.map(|country| country.insights(state.year(), metric)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;

    fn dataset() -> Dataset {
        Dataset::from_countries(vec![
            Country::new("DEU", "Germany")
                .with_metric(Metric::LifeExpAll, [69.3, 69.8])
                .with_metric(Metric::LifeExpMale, [66.5, 66.9])
                .with_metric(Metric::LifeExpFemale, [72.0, 72.6])
                .with_metric(Metric::GdpPerCapita, [None, Some(1_200.0)]),
            Country::new("TCD", "Chad").with_metric(Metric::LifeExpAll, [38.5, 38.9]),
        ])
    }

    #[test]
    fn single_country_gets_gender_series() {
        let dataset = dataset();
        let selection = assign_colors(dataset.country("DEU"), &Palette::default());
        let series = life_expectancy_chart(&selection, YearRange::full());
        let labels: Vec<_> = series.iter().map(Series::label).collect();
        assert_eq!(labels, ["Germany", "Germany (male)", "Germany (female)"]);
        assert_eq!(series[1].color(), MALE_COLOR);
        assert_eq!(series[0].id().as_str(), "DEU-lifeExpAll");
        assert_eq!(
            series[2].datapoints()[1].text.as_deref(),
            Some("Germany (female) 1961: 72.6 years")
        );
    }

    #[test]
    fn several_countries_get_palette_colors() {
        let dataset = dataset();
        let palette = Palette::new(vec![Color::BLACK, Color::WHITE]);
        let selection = assign_colors(dataset.countries(), &palette);
        assert_eq!(selection[1].text_color, Color::BLACK);
        let series = life_expectancy_chart(&selection, YearRange::full());
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].label(), "Chad");
        assert_eq!(series[1].color(), Color::WHITE);

        let gdp = indicator_chart(Metric::GdpPerCapita, &selection, YearRange::full());
        assert_eq!(gdp.len(), 1);
        assert_eq!(gdp[0].datapoints()[0].value_y, None);
    }

    #[test]
    fn popup_follows_state() {
        let dataset = dataset();
        let config = AppConfig::default();
        assert!(popup_charts(&AppState::new(), &dataset, &config).is_none());

        let state = AppState::new().apply(Action::ToggleCountry("DEU".into()));
        let popup = popup_charts(&state, &dataset, &config).unwrap();
        assert_eq!(popup.title.as_deref(), Some("Germany"));
        assert_eq!(popup.life_expectancy.series().len(), 3);
        assert_eq!(popup.indicator.series().len(), 1);
        assert_eq!(popup.life_expectancy.config().height, 250.0);
        assert_eq!(
            popup.life_expectancy.heading().as_deref(),
            Some("Life expectancy (years)")
        );
        assert_eq!(
            popup.indicator.heading().as_deref(),
            Some("GDP per capita (US$)")
        );
        assert!(popup.insights.is_some());

        let state = state
            .apply(Action::ToggleCountry("TCD".into()))
            .apply(Action::ToggleCountry("XXX".into()))
            .apply(Action::SwitchMetric);
        let popup = popup_charts(&state, &dataset, &config).unwrap();
        assert_eq!(popup.title, None);
        assert_eq!(popup.legend.len(), 2);
        assert_eq!(popup.legend[1].code, "TCD");
        assert!(popup.indicator.series().is_empty());
        assert_eq!(popup.indicator.heading().as_deref(), Some("Immunization (%)"));
        assert!(popup.insights.is_none());
    }
}
