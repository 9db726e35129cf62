use crate::{ReportingPeriod, Role, Theme};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Member.as_str(), "member");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("member").unwrap(), Role::Member);
    assert!(Role::from_str("owner").is_err());
}

#[test]
fn test_role_default_is_member() {
    assert_eq!(Role::default(), Role::Member);
}

#[test]
fn test_theme_round_trips_through_database_string() {
    for theme in Theme::ALL {
        assert_eq!(Theme::from_str(theme.as_str()).unwrap(), theme);
    }
    assert!(Theme::from_str("sepia").is_err());
}

#[test]
fn test_reporting_period_default_is_monthly() {
    assert_eq!(ReportingPeriod::default(), ReportingPeriod::Monthly);
    assert_eq!(
        ReportingPeriod::from_str("quarterly").unwrap(),
        ReportingPeriod::Quarterly
    );
    assert!(ReportingPeriod::from_str("daily").is_err());
}
