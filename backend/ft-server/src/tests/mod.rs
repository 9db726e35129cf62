mod wizard;

use ft_core::{Identity, OnboardingStep, Profile, Role};

use chrono::Utc;
use uuid::Uuid;

pub(crate) fn identity() -> Identity {
    Identity::new(Uuid::new_v4(), "sam@example.com")
}

pub(crate) fn profile_for(identity: &Identity, role: Role, onboarded: bool) -> Profile {
    let mut profile = Profile::new(
        identity.id,
        identity.email.clone(),
        "Sam".to_string(),
        "Rivera".to_string(),
        role,
        Uuid::new_v4(),
    );
    if onboarded {
        profile.onboarding_step = OnboardingStep::Complete;
        profile.set_onboarding_preferences_at = Some(Utc::now());
        profile.onboarded_at = Some(Utc::now());
    }
    profile
}
