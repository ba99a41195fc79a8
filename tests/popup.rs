// End-to-end: load a dataset fixture, select countries and hover the popup charts.

use worldstats_plot::dataset::{CorrelationLevel, CorrelationPair, Trend};
use worldstats_plot::{
    Action, AppConfig, AppState, Dataset, HoverState, Metric, PointerEvent, popup_charts,
};

fn fixture() -> Dataset {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/countryData.json");
    Dataset::load(path).expect("fixture loads")
}

#[test]
fn fixture_loads_and_validates() {
    let dataset = fixture();
    assert_eq!(dataset.len(), 3);

    let germany = dataset.country("DEU").unwrap();
    assert_eq!(germany.value(Metric::Gdp, 1960), None);
    assert_eq!(germany.value(Metric::Gdp, 1962), Some(1.2e11));
    assert_eq!(germany.value(Metric::ImmunDpt, 1963), Some(85.0));

    let france = dataset.country("FRA").unwrap();
    assert_eq!(
        france.correlation(CorrelationPair::LifeExpGdp).level(),
        CorrelationLevel::Unknown
    );

    let stats = dataset.global_stats().get(Metric::GdpPerCapita).unwrap();
    let first = stats.year(1960).unwrap();
    assert_eq!((first.min, first.max), (100.0, 1300.0));
    assert_eq!((stats.min, stats.max), (100.0, 1700.0));
}

#[test]
fn single_country_popup_has_insights() {
    let dataset = fixture();
    let config = AppConfig::default();
    let state = AppState::new()
        .apply(Action::ToggleCountry("DEU".into()))
        .apply(Action::SetYear(1961));

    let popup = popup_charts(&state, &dataset, &config).unwrap();
    let insights = popup.insights.as_ref().unwrap();
    assert_eq!(insights.name, "Germany");
    assert_eq!(insights.male_life_exp, Some(66.9));
    assert_eq!(insights.female_life_exp, Some(72.6));
    assert_eq!(insights.predictions.life_exp, Some(82.1));
    assert_eq!(insights.gdp_trend, Some(Trend::Falling));
    assert_eq!(insights.most_similar_life_exp.as_deref(), Some("FRA"));
    assert_eq!(insights.most_similar_indicator.as_deref(), Some("FRA"));
    assert_eq!(insights.correlation_level(), CorrelationLevel::High);

    let state = state.apply(Action::SwitchMetric);
    let popup = popup_charts(&state, &dataset, &config).unwrap();
    let insights = popup.insights.unwrap();
    assert_eq!(insights.correlation_level(), CorrelationLevel::Medium);
    assert_eq!(popup.indicator.series()[0].id().as_str(), "DEU-immunDpt");
    assert_eq!(popup.indicator.heading().as_deref(), Some("Immunization (%)"));
}

#[test]
fn hovering_popup_chart_snaps_to_years() {
    let dataset = fixture();
    let state = AppState::new().apply(Action::ToggleCountry("DEU".into()));
    let popup = popup_charts(&state, &dataset, &AppConfig::default()).unwrap();
    let chart = &popup.life_expectancy;

    let plot = chart.config().plot_rect();
    assert_eq!(plot.width(), 740.0);
    assert_eq!(plot.height(), 202.0);

    let mut hover = HoverState::new();
    // A third of the way across a 1960..=1963 axis is 1961.
    let event = PointerEvent::moved(plot.min.x + 250.0, plot.min.y + 100.0);
    assert!(hover.handle(chart, &event));
    let frame = hover.frame();
    assert_eq!(frame.groups.len(), 3);
    assert_eq!(frame.tooltips.x_axis.as_ref().unwrap().label, "1961");
    let texts: Vec<_> = frame
        .tooltips
        .points
        .iter()
        .map(|tooltip| tooltip.rows[0].text.as_str())
        .collect();
    assert_eq!(
        texts,
        [
            "Germany 1961: 69.8 years",
            "Germany (male) 1961: 66.9 years",
            "Germany (female) 1961: 72.6 years",
        ]
    );

    assert!(hover.handle(chart, &PointerEvent::Leave));
    assert!(hover.frame().is_empty());
}

#[test]
fn several_countries_share_the_charts() {
    let dataset = fixture();
    let state = AppState::new()
        .apply(Action::ToggleCountry("DEU".into()))
        .apply(Action::ToggleCountry("TCD".into()))
        .apply(Action::ToggleCountry("FRA".into()));
    let popup = popup_charts(&state, &dataset, &AppConfig::default()).unwrap();
    assert!(popup.title.is_none());
    assert!(popup.insights.is_none());
    let codes: Vec<_> = popup.legend.iter().map(|entry| entry.code.as_str()).collect();
    assert_eq!(codes, ["DEU", "TCD", "FRA"]);
    assert_eq!(popup.life_expectancy.series().len(), 3);
    assert_eq!(popup.indicator.series().len(), 3);

    let (_, y) = popup.life_expectancy.data_bounds();
    let y = y.unwrap();
    assert_eq!((y.min, y.max), (38.5, 70.5));
}
