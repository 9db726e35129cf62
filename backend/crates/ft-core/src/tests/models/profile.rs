use crate::{Family, Profile, Role};

use chrono::Utc;
use uuid::Uuid;

fn member() -> Profile {
    Profile::new(
        Uuid::new_v4(),
        "ada@example.com".to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
        Role::Member,
        Uuid::new_v4(),
    )
}

#[test]
fn test_new_profile_is_not_onboarded() {
    let profile = member();

    assert!(!profile.is_onboarded());
    assert!(profile.active);
    assert!(!profile.is_admin());
}

#[test]
fn test_onboarded_at_marks_profile_onboarded() {
    let mut profile = member();
    profile.onboarded_at = Some(Utc::now());

    assert!(profile.is_onboarded());
}

#[test]
fn test_scope_pairs_user_with_family() {
    let profile = member();
    let scope = profile.scope();

    assert_eq!(scope.user_id, profile.id);
    assert!(scope.owns(profile.family_id));
    assert!(!scope.owns(Uuid::new_v4()));
}

#[test]
fn test_full_name() {
    assert_eq!(member().full_name(), "Ada Lovelace");
}

#[test]
fn test_new_family_uses_first_name_and_defaults() {
    let family = Family::for_new_member("  Ada ");

    assert_eq!(family.name, "Ada's Household");
    assert_eq!(family.country, "US");
    assert_eq!(family.currency, "USD");
    assert_eq!(family.date_format, "%m-%d-%Y");
    assert_eq!(family.version, 1);
    assert_eq!(Family::default_name(""), "My Household");
}
