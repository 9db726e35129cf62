use serde::Deserialize;

/// Household location and display preferences
#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub country: String,
    pub currency: String,
    pub date_format: String,
}
