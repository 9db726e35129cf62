use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateHouseholdRequest {
    pub name: String,
}
