//! Precomputed per-country insights: forecasts, similarity, correlation.

use super::{Country, MAX_YEAR, Metric};

/// Year the forecasts in the document refer to.
pub const PREDICTION_YEAR: i32 = 2030;

/// Indicator used to compare countries with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimilarityKind {
    /// Life expectancy trajectories.
    LifeExpectancy,
    /// GDP trajectories.
    Gdp,
    /// DPT immunization trajectories.
    Immunization,
}

impl SimilarityKind {
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Similarity used next to a map indicator.
    pub fn for_indicator(metric: Metric) -> Self {
        match metric {
            Metric::ImmunDpt => Self::Immunization,
            _ => Self::Gdp,
        }
    }
}

/// Pair of indicators with a correlation coefficient in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrelationPair {
    /// Life expectancy against GDP per capita.
    LifeExpGdp,
    /// Life expectancy against DPT immunization.
    LifeExpImmunization,
}

impl CorrelationPair {
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Correlation shown next to a map indicator.
    pub fn for_indicator(metric: Metric) -> Self {
        match metric {
            Metric::ImmunDpt => Self::LifeExpImmunization,
            _ => Self::LifeExpGdp,
        }
    }
}

/// Strength bucket of a rank correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrelationLevel {
    /// Spearman coefficient of at least 0.8.
    High,
    /// Spearman coefficient above 0.5 and below 0.8.
    Medium,
    /// Spearman coefficient of 0.5 or less.
    Low,
    /// No coefficient available.
    Unknown,
}

impl CorrelationLevel {
    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High Correlation",
            Self::Medium => "Medium Correlation",
            Self::Low => "Low Correlation",
            Self::Unknown => "Unknown Correlation",
        }
    }
}

/// Spearman and Pearson coefficients between two indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Correlation {
    /// Spearman rank coefficient.
    pub spearman: Option<f64>,
    /// Pearson coefficient.
    pub pearson: Option<f64>,
}

impl Correlation {
    /// Create a correlation from known coefficients.
    pub fn new(spearman: f64, pearson: f64) -> Self {
        Self {
            spearman: Some(spearman),
            pearson: Some(pearson),
        }
    }

    /// Read coefficients as stored in the document, where exactly `-1`
    /// marks a coefficient that could not be computed.
    pub(crate) fn from_document(spearman: Option<f64>, pearson: Option<f64>) -> Self {
        let known = |value: Option<f64>| value.filter(|value| value.is_finite() && *value != -1.0);
        Self {
            spearman: known(spearman),
            pearson: known(pearson),
        }
    }

    /// Strength bucket of the Spearman coefficient.
    pub fn level(&self) -> CorrelationLevel {
        match self.spearman {
            None => CorrelationLevel::Unknown,
            Some(value) if value >= 0.8 => CorrelationLevel::High,
            Some(value) if value > 0.5 => CorrelationLevel::Medium,
            Some(_) => CorrelationLevel::Low,
        }
    }
}

/// Ten-year forecasts stored with each country.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Predictions {
    /// Life expectancy, total population.
    pub life_exp: Option<f64>,
    /// Life expectancy, female.
    pub life_exp_female: Option<f64>,
    /// Life expectancy, male.
    pub life_exp_male: Option<f64>,
    /// GDP per capita.
    pub gdp_per_capita: Option<f64>,
}

impl Predictions {
    /// Create forecasts; negative values mark a failed forecast and are dropped.
    pub fn new(
        life_exp: Option<f64>,
        life_exp_female: Option<f64>,
        life_exp_male: Option<f64>,
        gdp_per_capita: Option<f64>,
    ) -> Self {
        let known = |value: Option<f64>| value.filter(|value| value.is_finite() && *value >= 0.0);
        Self {
            life_exp: known(life_exp),
            life_exp_female: known(life_exp_female),
            life_exp_male: known(life_exp_male),
            gdp_per_capita: known(gdp_per_capita),
        }
    }
}

/// Direction of a forecast relative to the last observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    /// Forecast at or above the current value.
    Rising,
    /// Forecast below the current value.
    Falling,
}

impl Trend {
    /// Compare a forecast against the current value.
    pub fn between(current: Option<f64>, forecast: Option<f64>) -> Option<Self> {
        let (current, forecast) = (current?, forecast?);
        Some(if forecast >= current {
            Self::Rising
        } else {
            Self::Falling
        })
    }
}

/// Summary shown for a single selected country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryInsights {
    /// Country name.
    pub name: String,
    /// Male life expectancy in the displayed year.
    pub male_life_exp: Option<f64>,
    /// Female life expectancy in the displayed year.
    pub female_life_exp: Option<f64>,
    /// Forecasts for [`PREDICTION_YEAR`].
    pub predictions: Predictions,
    /// GDP per capita forecast against the latest observation.
    pub gdp_trend: Option<Trend>,
    /// Country with the most similar life expectancy trajectory.
    pub most_similar_life_exp: Option<String>,
    /// Country most similar on the selected map indicator.
    pub most_similar_indicator: Option<String>,
    /// Correlation between life expectancy and the selected indicator.
    pub correlation: Correlation,
}

impl CountryInsights {
    /// Strength bucket of [`CountryInsights::correlation`].
    pub fn correlation_level(&self) -> CorrelationLevel {
        self.correlation.level()
    }
}

impl Country {
    /// Insights for the popup of a single country.
    ///
    /// Life expectancies are read at `year`; the GDP trend compares the
    /// forecast with the value at `MAX_YEAR`, or the latest value before it.
    pub fn insights(&self, year: i32, indicator: Metric) -> CountryInsights {
        let gdp_now = self
            .value(Metric::GdpPerCapita, MAX_YEAR)
            .or_else(|| self.latest(Metric::GdpPerCapita).map(|(_, value)| value));
        let similar = |kind| self.most_similar(kind).map(|(code, _)| code.to_string());
        CountryInsights {
            name: self.name().to_string(),
            male_life_exp: self.value(Metric::LifeExpMale, year),
            female_life_exp: self.value(Metric::LifeExpFemale, year),
            predictions: *self.predictions(),
            gdp_trend: Trend::between(gdp_now, self.predictions().gdp_per_capita),
            most_similar_life_exp: similar(SimilarityKind::LifeExpectancy),
            most_similar_indicator: similar(SimilarityKind::for_indicator(indicator)),
            correlation: self.correlation(CorrelationPair::for_indicator(indicator)),
        }
    }
}
