use ft_core::{COUNTRIES, CURRENCIES, Country, Currency, DATE_FORMATS, DateFormat, Family, Profile};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SettingsOptions {
    pub countries: &'static [Country],
    pub currencies: &'static [Currency],
    pub date_formats: &'static [DateFormat],
    pub themes: Vec<&'static str>,
    pub periods: Vec<&'static str>,
}

impl Default for SettingsOptions {
    fn default() -> Self {
        Self {
            countries: COUNTRIES,
            currencies: CURRENCIES,
            date_formats: DATE_FORMATS,
            themes: ft_core::Theme::ALL.iter().map(|t| t.as_str()).collect(),
            periods: ft_core::ReportingPeriod::ALL
                .iter()
                .map(|p| p.as_str())
                .collect(),
        }
    }
}

/// Everything the settings page edits, plus the selectable options
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub profile: Profile,
    pub household: Family,
    pub options: SettingsOptions,
}
