//! Family entity - the household (tenant) shared by its members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_COUNTRY: &str = "US";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_DATE_FORMAT: &str = "%m-%d-%Y";
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub currency: String,
    pub date_format: String,
    pub timezone: String,
    pub locale: String,
    /// Incremented on every write
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Family {
    /// Household created alongside the first member at registration
    pub fn for_new_member(first_name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: Self::default_name(first_name),
            country: DEFAULT_COUNTRY.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn default_name(first_name: &str) -> String {
        let first_name = first_name.trim();
        if first_name.is_empty() {
            "My Household".to_string()
        } else {
            format!("{first_name}'s Household")
        }
    }
}
