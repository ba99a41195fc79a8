//! Application state and the actions that update it.
//!
//! State is never mutated from the outside: every change goes through
//! [`AppState::apply`], which consumes the old state and returns the next.

use crate::dataset::{MAX_YEAR, MIN_YEAR, Metric};
use crate::interaction::toggle_country;

/// Indicator used to color the map and drive the second popup chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// GDP per capita.
    #[default]
    GdpPerCapita,
    /// DPT immunization rate.
    Immunization,
}

impl Indicator {
    /// Metric backing the indicator.
    pub fn metric(self) -> Metric {
        match self {
            Self::GdpPerCapita => Metric::GdpPerCapita,
            Self::Immunization => Metric::ImmunDpt,
        }
    }

    /// The other indicator.
    pub fn toggled(self) -> Self {
        match self {
            Self::GdpPerCapita => Self::Immunization,
            Self::Immunization => Self::GdpPerCapita,
        }
    }
}

/// Discrete state change requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select a country, or deselect it when already selected.
    ToggleCountry(String),
    /// Clear the selection.
    DeselectAll,
    /// Switch between the two map indicators.
    SwitchMetric,
    /// Show another year.
    SetYear(i32),
}

/// Year, selection and map indicator shown by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    year: i32,
    selected: Vec<String>,
    indicator: Indicator,
}

impl AppState {
    /// Initial state: latest year, nothing selected, GDP per capita.
    pub fn new() -> Self {
        Self {
            year: MAX_YEAR,
            selected: Vec::new(),
            indicator: Indicator::default(),
        }
    }

    /// Apply an action and return the next state.
    pub fn apply(mut self, action: Action) -> Self {
        tracing::debug!(?action, "applying action");
        match action {
            Action::ToggleCountry(code) => toggle_country(&mut self.selected, &code),
            Action::DeselectAll => self.selected.clear(),
            Action::SwitchMetric => self.indicator = self.indicator.toggled(),
            Action::SetYear(year) => self.year = year.clamp(MIN_YEAR, MAX_YEAR),
        }
        self
    }

    /// Displayed year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Selected country codes in selection order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Check whether a country is selected.
    pub fn is_selected(&self, code: &str) -> bool {
        self.selected.iter().any(|selected| selected == code)
    }

    /// Active map indicator.
    pub fn indicator(&self) -> Indicator {
        self.indicator
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_selection() {
        let state = AppState::new()
            .apply(Action::ToggleCountry("DEU".into()))
            .apply(Action::ToggleCountry("FRA".into()));
        assert_eq!(state.selected(), ["DEU", "FRA"]);
        let state = state.apply(Action::ToggleCountry("DEU".into()));
        assert_eq!(state.selected(), ["FRA"]);
        let state = state.apply(Action::ToggleCountry("DEU".into()));
        assert_eq!(state.selected(), ["FRA", "DEU"]);
        assert!(state.is_selected("DEU"));
        assert!(state.apply(Action::DeselectAll).selected().is_empty());
    }

    #[test]
    fn switch_metric_alternates() {
        let state = AppState::new();
        assert_eq!(state.indicator(), Indicator::GdpPerCapita);
        let state = state.apply(Action::SwitchMetric);
        assert_eq!(state.indicator(), Indicator::Immunization);
        assert_eq!(state.indicator().metric(), Metric::ImmunDpt);
        let state = state.apply(Action::SwitchMetric);
        assert_eq!(state.indicator(), Indicator::GdpPerCapita);
    }

    #[test]
    fn set_year_clamps() {
        let state = AppState::new();
        assert_eq!(state.year(), 2020);
        assert_eq!(state.clone().apply(Action::SetYear(1990)).year(), 1990);
        assert_eq!(state.clone().apply(Action::SetYear(1900)).year(), MIN_YEAR);
        assert_eq!(state.apply(Action::SetYear(2100)).year(), MAX_YEAR);
    }
}
