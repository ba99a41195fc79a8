use std::collections::BTreeMap;

use serde::Deserialize;

use super::insight::{Correlation, CorrelationPair, Predictions, SimilarityKind};
use super::{MIN_YEAR, Metric, YEAR_COUNT, year_index};
use crate::error::DatasetError;

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeature {
    #[serde(default)]
    pub(crate) properties: RawProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawProperties {
    #[serde(rename = "ADMIN")]
    name: Option<String>,
    #[serde(rename = "ISO_A3")]
    code: Option<String>,
    region: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    life_exp_all: Option<Vec<Option<f64>>>,
    life_exp_male: Option<Vec<Option<f64>>>,
    life_exp_female: Option<Vec<Option<f64>>>,
    gdp: Option<Vec<Option<f64>>>,
    gdp_per_capita: Option<Vec<Option<f64>>>,
    immun_dpt: Option<Vec<Option<f64>>>,
    life_exp_pred: Option<f64>,
    life_exp_female_pred: Option<f64>,
    life_exp_male_pred: Option<f64>,
    gdp_pred: Option<f64>,
    life_exp_sim: Option<BTreeMap<String, f64>>,
    gdp_sim: Option<BTreeMap<String, f64>>,
    immun_dpt_sim: Option<BTreeMap<String, f64>>,
    life_exp_gdp_corr_s: Option<f64>,
    life_exp_gdp_corr_p: Option<f64>,
    life_exp_immun_corr_s: Option<f64>,
    life_exp_immun_corr_p: Option<f64>,
}

/// Geographic label position of a country.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

/// One country with its indicator arrays and precomputed insights.
///
/// Indicator arrays are indexed by `year - MIN_YEAR`. Negative and
/// non-finite entries are stored as missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    code: String,
    name: String,
    region: Option<String>,
    position: Option<GeoPosition>,
    metrics: [Option<Vec<Option<f64>>>; 6],
    predictions: Predictions,
    similarity: [BTreeMap<String, f64>; 3],
    correlations: [Correlation; 2],
}

impl Country {
    /// Create a country with no indicator data.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            region: None,
            position: None,
            metrics: Default::default(),
            predictions: Predictions::default(),
            similarity: Default::default(),
            correlations: Default::default(),
        }
    }

    pub(crate) fn from_raw(index: usize, raw: RawProperties) -> Result<Self, DatasetError> {
        let code = raw
            .code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .ok_or(DatasetError::MissingCode { index })?;
        let name = raw.name.unwrap_or_else(|| code.clone());
        let position = match (raw.lon, raw.lat) {
            (Some(lon), Some(lat)) if lon.is_finite() && lat.is_finite() => {
                Some(GeoPosition { lon, lat })
            }
            _ => None,
        };
        let mut country = Self::new(code, name);
        country.region = raw.region;
        country.position = position;
        let arrays = [
            (Metric::LifeExpAll, raw.life_exp_all),
            (Metric::LifeExpMale, raw.life_exp_male),
            (Metric::LifeExpFemale, raw.life_exp_female),
            (Metric::Gdp, raw.gdp),
            (Metric::GdpPerCapita, raw.gdp_per_capita),
            (Metric::ImmunDpt, raw.immun_dpt),
        ];
        for (metric, values) in arrays {
            if let Some(values) = values {
                country = country.with_metric(metric, values);
            }
        }
        country.predictions = Predictions::new(
            raw.life_exp_pred,
            raw.life_exp_female_pred,
            raw.life_exp_male_pred,
            raw.gdp_pred,
        );
        let similarity = [
            (SimilarityKind::LifeExpectancy, raw.life_exp_sim),
            (SimilarityKind::Gdp, raw.gdp_sim),
            (SimilarityKind::Immunization, raw.immun_dpt_sim),
        ];
        for (kind, scores) in similarity {
            if let Some(scores) = scores {
                country = country.with_similarity(kind, scores);
            }
        }
        country.correlations = [
            Correlation::from_document(raw.life_exp_gdp_corr_s, raw.life_exp_gdp_corr_p),
            Correlation::from_document(raw.life_exp_immun_corr_s, raw.life_exp_immun_corr_p),
        ];
        Ok(country)
    }

    /// Set an indicator array, starting at `MIN_YEAR`.
    ///
    /// Entries beyond `MAX_YEAR` are dropped.
    pub fn with_metric<I, T>(mut self, metric: Metric, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<f64>>,
    {
        let mut values: Vec<Option<f64>> = values
            .into_iter()
            .map(|value| value.into().filter(|value| value.is_finite() && *value >= 0.0))
            .collect();
        if values.len() > YEAR_COUNT {
            tracing::warn!(
                "{} {} has {} entries, truncating to {}",
                self.code,
                metric.key(),
                values.len(),
                YEAR_COUNT
            );
            values.truncate(YEAR_COUNT);
        }
        self.metrics[metric.index()] = Some(values);
        self
    }

    /// Set the similarity scores towards other countries.
    pub fn with_similarity(mut self, kind: SimilarityKind, scores: BTreeMap<String, f64>) -> Self {
        self.similarity[kind.index()] = scores;
        self
    }

    /// Set a correlation between two indicators.
    pub fn with_correlation(mut self, pair: CorrelationPair, correlation: Correlation) -> Self {
        self.correlations[pair.index()] = correlation;
        self
    }

    /// Set the forecast values.
    pub fn with_predictions(mut self, predictions: Predictions) -> Self {
        self.predictions = predictions;
        self
    }

    /// Set the label position.
    pub fn with_position(mut self, position: GeoPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// ISO 3166-1 alpha-3 code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// World region, when known.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Label position, when known.
    pub fn position(&self) -> Option<GeoPosition> {
        self.position
    }

    /// Indicator array for a metric, `None` when the document omits it.
    pub fn values(&self, metric: Metric) -> Option<&[Option<f64>]> {
        self.metrics[metric.index()].as_deref()
    }

    /// Indicator value for a year.
    pub fn value(&self, metric: Metric, year: i32) -> Option<f64> {
        let index = year_index(year)?;
        self.values(metric)?.get(index).copied().flatten()
    }

    /// Most recent year with a value, together with that value.
    pub fn latest(&self, metric: Metric) -> Option<(i32, f64)> {
        let values = self.values(metric)?;
        values
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, value)| {
                let year = MIN_YEAR.checked_add(i32::try_from(index).ok()?)?;
                value.map(|value| (year, value))
            })
    }

    /// Forecast values.
    pub fn predictions(&self) -> &Predictions {
        &self.predictions
    }

    /// Similarity scores towards other countries, keyed by country code.
    pub fn similarity(&self, kind: SimilarityKind) -> &BTreeMap<String, f64> {
        &self.similarity[kind.index()]
    }

    /// Most similar other country and its score.
    ///
    /// The country itself is never returned; ties keep the smallest code.
    pub fn most_similar(&self, kind: SimilarityKind) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (code, score) in self.similarity(kind) {
            if code == &self.code || !score.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, best)| *score > best) {
                best = Some((code.as_str(), *score));
            }
        }
        best
    }

    /// Correlation between two indicators of this country.
    pub fn correlation(&self, pair: CorrelationPair) -> Correlation {
        self.correlations[pair.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MAX_YEAR;

    fn raw(json: &str) -> RawProperties {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn negative_and_missing_entries_become_none() {
        let country = Country::from_raw(
            0,
            raw(r#"{ "ISO_A3": "ABW", "gdp": [-1, 2000, null, 2500] }"#),
        )
        .unwrap();
        assert_eq!(country.name(), "ABW");
        assert_eq!(country.values(Metric::Gdp).unwrap(), &[None, Some(2000.0), None, Some(2500.0)]);
        assert_eq!(country.value(Metric::Gdp, 1960), None);
        assert_eq!(country.value(Metric::Gdp, 1961), Some(2000.0));
        assert_eq!(country.value(Metric::Gdp, 1959), None);
        assert_eq!(country.value(Metric::ImmunDpt, 1961), None);
        assert_eq!(country.latest(Metric::Gdp), Some((1963, 2500.0)));
    }

    #[test]
    fn long_arrays_are_truncated() {
        let values = vec![1.0; YEAR_COUNT + 9];
        let country = Country::new("ABW", "Aruba").with_metric(Metric::LifeExpAll, values);
        assert_eq!(country.values(Metric::LifeExpAll).unwrap().len(), YEAR_COUNT);
        assert_eq!(country.value(Metric::LifeExpAll, MAX_YEAR), Some(1.0));
    }

    #[test]
    fn missing_code_is_rejected() {
        let error = Country::from_raw(4, raw(r#"{ "ADMIN": "Nowhere", "ISO_A3": " " }"#)).unwrap_err();
        assert!(matches!(error, DatasetError::MissingCode { index: 4 }));
    }

    #[test]
    fn most_similar_skips_self() {
        let scores = BTreeMap::from([
            ("DEU".to_string(), 1.0),
            ("AUT".to_string(), 0.97),
            ("CHE".to_string(), 0.99),
            ("FRA".to_string(), 0.99),
        ]);
        let country = Country::new("DEU", "Germany").with_similarity(SimilarityKind::Gdp, scores);
        assert_eq!(country.most_similar(SimilarityKind::Gdp), Some(("CHE", 0.99)));
        assert_eq!(country.most_similar(SimilarityKind::Immunization), None);
    }

    #[test]
    fn reads_scalar_properties() {
        let country = Country::from_raw(
            0,
            raw(r#"{ "ISO_A3": "DEU", "ADMIN": "Germany", "region": "Europe & Central Asia",
                     "lat": 51.0, "lon": 10.0, "lifeExpPred": 82.1, "gdpPred": -1,
                     "lifeExpGdpCorrS": 0.93, "lifeExpGdpCorrP": 0.88 }"#),
        )
        .unwrap();
        assert_eq!(country.region(), Some("Europe & Central Asia"));
        assert_eq!(country.position(), Some(GeoPosition { lon: 10.0, lat: 51.0 }));
        assert_eq!(country.predictions().life_exp, Some(82.1));
        assert_eq!(country.predictions().gdp_per_capita, None);
        assert_eq!(country.correlation(CorrelationPair::LifeExpGdp).spearman, Some(0.93));
    }
}
