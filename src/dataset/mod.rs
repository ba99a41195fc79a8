//! Country dataset loading and indicator access.
//!
//! The input document is a GeoJSON-like feature collection whose feature
//! `properties` carry year-indexed indicator arrays (index `year - MIN_YEAR`),
//! scalar predictions, similarity maps and correlation coefficients. It may
//! be wrapped together with precomputed global statistics:
//!
//! ```json
//! { "globalStats": { ... }, "geojson": { "type": "FeatureCollection", "features": [ ... ] } }
//! ```
//!
//! or be a bare feature collection. The document is validated once here;
//! the rest of the crate works with [`Country`] records and never re-checks
//! the raw shape.

mod country;
mod insight;
mod stats;

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::DatasetError;

pub use country::{Country, GeoPosition};
pub use insight::{
    Correlation, CorrelationLevel, CorrelationPair, CountryInsights, PREDICTION_YEAR, Predictions,
    SimilarityKind, Trend,
};
pub use stats::{GlobalStats, MetricStats, YearStats};

use country::RawFeature;

/// First year covered by the indicator arrays.
pub const MIN_YEAR: i32 = 1960;
/// Last year covered by the indicator arrays.
pub const MAX_YEAR: i32 = 2020;
/// Number of yearly entries in a complete indicator array.
pub const YEAR_COUNT: usize = (MAX_YEAR - MIN_YEAR + 1) as usize;

/// Year-offset index of a year, or `None` outside `[MIN_YEAR, MAX_YEAR]`.
pub fn year_index(year: i32) -> Option<usize> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    usize::try_from(year - MIN_YEAR).ok()
}

/// Indicator recorded per country and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Life expectancy at birth, total population.
    LifeExpAll,
    /// Life expectancy at birth, male.
    LifeExpMale,
    /// Life expectancy at birth, female.
    LifeExpFemale,
    /// Gross domestic product, current US$.
    Gdp,
    /// GDP per capita, current US$.
    GdpPerCapita,
    /// DPT immunization rate of children, percent.
    ImmunDpt,
}

impl Metric {
    /// Every metric in document order.
    pub const ALL: [Metric; 6] = [
        Self::LifeExpAll,
        Self::LifeExpMale,
        Self::LifeExpFemale,
        Self::Gdp,
        Self::GdpPerCapita,
        Self::ImmunDpt,
    ];

    /// Property key in the input document.
    pub fn key(self) -> &'static str {
        match self {
            Self::LifeExpAll => "lifeExpAll",
            Self::LifeExpMale => "lifeExpMale",
            Self::LifeExpFemale => "lifeExpFemale",
            Self::Gdp => "gdp",
            Self::GdpPerCapita => "gdpPerCapita",
            Self::ImmunDpt => "immunDpt",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::LifeExpAll => "Life expectancy",
            Self::LifeExpMale => "Life expectancy (male)",
            Self::LifeExpFemale => "Life expectancy (female)",
            Self::Gdp => "GDP",
            Self::GdpPerCapita => "GDP per capita",
            Self::ImmunDpt => "Immunization",
        }
    }

    /// Unit appended to values in tooltips.
    pub fn unit(self) -> &'static str {
        match self {
            Self::LifeExpAll | Self::LifeExpMale | Self::LifeExpFemale => "years",
            Self::Gdp | Self::GdpPerCapita => "US$",
            Self::ImmunDpt => "%",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(rename = "globalStats")]
    global_stats: Option<GlobalStats>,
    geojson: Option<RawCollection>,
    features: Option<Vec<RawFeature>>,
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

/// Validated set of countries with global per-year statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    countries: Vec<Country>,
    global_stats: GlobalStats,
}

impl Dataset {
    /// Build a dataset from validated countries, computing global statistics.
    pub fn from_countries(countries: Vec<Country>) -> Self {
        let global_stats = GlobalStats::compute(&countries);
        Self {
            countries,
            global_stats,
        }
    }

    /// Parse a dataset document.
    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let document: RawDocument = serde_json::from_str(text)?;
        Self::from_document(document)
    }

    /// Parse a dataset document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, DatasetError> {
        let document: RawDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Read and parse a dataset file.
    ///
    /// Failures are logged before being returned; there is no retry.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading dataset");
        let result = std::fs::read_to_string(path)
            .map_err(|source| DatasetError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|text| Self::from_json_str(&text));
        if let Err(error) = &result {
            tracing::error!("Could not load data: {}", error);
        }
        result
    }

    fn from_document(document: RawDocument) -> Result<Self, DatasetError> {
        let features = match (document.geojson, document.features) {
            (Some(collection), _) => collection.features,
            (None, Some(features)) => features,
            (None, None) => return Err(DatasetError::MissingFeatures),
        };
        let countries = features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| Country::from_raw(index, feature.properties))
            .collect::<Result<Vec<_>, _>>()?;
        let global_stats = match document.global_stats {
            Some(stats) if !stats.is_empty() => stats,
            _ => {
                tracing::debug!("document has no global stats, computing them");
                GlobalStats::compute(&countries)
            }
        };
        tracing::debug!("Loaded {} countries", countries.len());
        Ok(Self {
            countries,
            global_stats,
        })
    }

    /// Access all countries in document order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Look up a country by ISO 3166-1 alpha-3 code.
    pub fn country(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|country| country.code() == code)
    }

    /// Access the global per-year statistics.
    pub fn global_stats(&self) -> &GlobalStats {
        &self.global_stats
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Check whether the dataset holds no countries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
