//! Countries, currencies and date formats offered during onboarding and in
//! settings. Location choices carry their own currency and date format
//! defaults, which is why a few date formats only appear via a country.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
    pub date_format: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateFormat {
    pub format: &'static str,
    pub label: &'static str,
    pub example: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "US", name: "United States", currency: "USD", date_format: "%m-%d-%Y" },
    Country { code: "GB", name: "United Kingdom", currency: "GBP", date_format: "%d-%m-%Y" },
    Country { code: "CA", name: "Canada", currency: "CAD", date_format: "%Y-%m-%d" },
    Country { code: "AU", name: "Australia", currency: "AUD", date_format: "%d-%m-%Y" },
    Country { code: "DE", name: "Germany", currency: "EUR", date_format: "%d.%m.%Y" },
    Country { code: "FR", name: "France", currency: "EUR", date_format: "%d/%m/%Y" },
    Country { code: "JP", name: "Japan", currency: "JPY", date_format: "%Y/%m/%d" },
    Country { code: "IN", name: "India", currency: "INR", date_format: "%d-%m-%Y" },
];

pub const CURRENCIES: &[Currency] = &[
    Currency { code: "USD", name: "US Dollar", symbol: "$" },
    Currency { code: "EUR", name: "Euro", symbol: "€" },
    Currency { code: "GBP", name: "British Pound", symbol: "£" },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "CA$" },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "A$" },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥" },
    Currency { code: "INR", name: "Indian Rupee", symbol: "₹" },
];

pub const DATE_FORMATS: &[DateFormat] = &[
    DateFormat { format: "%m-%d-%Y", label: "MM-DD-YYYY", example: "01-31-2025" },
    DateFormat { format: "%d-%m-%Y", label: "DD-MM-YYYY", example: "31-01-2025" },
    DateFormat { format: "%Y-%m-%d", label: "YYYY-MM-DD", example: "2025-01-31" },
    DateFormat { format: "%d/%m/%Y", label: "DD/MM/YYYY", example: "31/01/2025" },
    DateFormat { format: "%m/%d/%Y", label: "MM/DD/YYYY", example: "01/31/2025" },
];

pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code == code)
}

pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Accepts the selectable formats plus any format a country defaults to
pub fn is_known_date_format(format: &str) -> bool {
    DATE_FORMATS.iter().any(|f| f.format == format)
        || COUNTRIES.iter().any(|c| c.date_format == format)
}
