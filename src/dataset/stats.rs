use serde::Deserialize;

use super::{Country, MIN_YEAR, Metric, year_index};
use crate::view::Range;

/// Value span of one metric across all countries for one year.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct YearStats {
    /// Smallest positive value, `-1` when no country has data.
    pub min: f64,
    /// Largest value, `-1` when no country has data.
    pub max: f64,
}

/// Yearly and overall value spans of one metric.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricStats {
    /// Per-year spans indexed by `year - MIN_YEAR`.
    #[serde(default)]
    pub yearly: Vec<YearStats>,
    /// Smallest positive yearly minimum.
    pub min: f64,
    /// Largest yearly maximum.
    pub max: f64,
}

impl MetricStats {
    /// Span for one year.
    pub fn year(&self, year: i32) -> Option<YearStats> {
        self.yearly.get(year_index(year)?).copied()
    }

    /// Overall span, when the metric has any positive data.
    pub fn domain(&self) -> Option<Range> {
        (self.min > 0.0 && self.max >= self.min).then(|| Range::new(self.min, self.max))
    }
}

/// Global statistics per metric, as shipped in the document's `globalStats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStats {
    life_exp_all: Option<MetricStats>,
    life_exp_male: Option<MetricStats>,
    life_exp_female: Option<MetricStats>,
    gdp: Option<MetricStats>,
    gdp_per_capita: Option<MetricStats>,
    immun_dpt: Option<MetricStats>,
}

impl GlobalStats {
    /// Compute statistics from country data.
    ///
    /// Yearly minimums only consider positive values; a year without any
    /// positive value records `-1`.
    pub fn compute(countries: &[Country]) -> Self {
        let mut stats = Self::default();
        for metric in Metric::ALL {
            *stats.slot_mut(metric) = compute_metric(countries, metric);
        }
        stats
    }

    /// Statistics for a metric.
    pub fn get(&self, metric: Metric) -> Option<&MetricStats> {
        match metric {
            Metric::LifeExpAll => self.life_exp_all.as_ref(),
            Metric::LifeExpMale => self.life_exp_male.as_ref(),
            Metric::LifeExpFemale => self.life_exp_female.as_ref(),
            Metric::Gdp => self.gdp.as_ref(),
            Metric::GdpPerCapita => self.gdp_per_capita.as_ref(),
            Metric::ImmunDpt => self.immun_dpt.as_ref(),
        }
    }

    /// Check whether no metric has statistics.
    pub fn is_empty(&self) -> bool {
        Metric::ALL.iter().all(|metric| self.get(*metric).is_none())
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut Option<MetricStats> {
        match metric {
            Metric::LifeExpAll => &mut self.life_exp_all,
            Metric::LifeExpMale => &mut self.life_exp_male,
            Metric::LifeExpFemale => &mut self.life_exp_female,
            Metric::Gdp => &mut self.gdp,
            Metric::GdpPerCapita => &mut self.gdp_per_capita,
            Metric::ImmunDpt => &mut self.immun_dpt,
        }
    }
}

fn compute_metric(countries: &[Country], metric: Metric) -> Option<MetricStats> {
    let years = countries
        .iter()
        .filter_map(|country| country.values(metric).map(<[_]>::len))
        .max()?;
    let yearly: Vec<YearStats> = (0..years)
        .map(|index| {
            let values = countries
                .iter()
                .filter_map(|country| country.values(metric)?.get(index).copied().flatten());
            let mut min: Option<f64> = None;
            let mut max: Option<f64> = None;
            for value in values {
                if value > 0.0 && min.is_none_or(|min| value < min) {
                    min = Some(value);
                }
                if max.is_none_or(|max| value > max) {
                    max = Some(value);
                }
            }
            YearStats {
                min: min.unwrap_or(-1.0),
                max: max.unwrap_or(-1.0),
            }
        })
        .collect();
    let min = yearly
        .iter()
        .map(|year| year.min)
        .filter(|min| *min > 0.0)
        .reduce(f64::min)
        .unwrap_or(-1.0);
    let max = yearly
        .iter()
        .map(|year| year.max)
        .reduce(f64::max)
        .unwrap_or(-1.0);
    tracing::trace!(
        "{} stats over {} years starting {}",
        metric.key(),
        yearly.len(),
        MIN_YEAR
    );
    Some(MetricStats { yearly, min, max })
}
