//! Profile entity - the application-level user record.

use crate::{OnboardingStep, ReportingPeriod, Role, TenantScope, Theme};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One per identity, sharing its id. Created together with the identity
/// during provisioning and never deleted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub family_id: Uuid,
    pub active: bool,
    pub theme: Theme,
    pub default_period: ReportingPeriod,
    /// Furthest wizard step this member may submit
    pub onboarding_step: OnboardingStep,
    pub set_onboarding_preferences_at: Option<DateTime<Utc>>,
    /// Set exactly once when the wizard completes; never cleared
    pub onboarded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a freshly provisioned, not yet onboarded profile
    pub fn new(
        id: Uuid,
        email: String,
        first_name: String,
        last_name: String,
        role: Role,
        family_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            first_name,
            last_name,
            role,
            family_id,
            active: true,
            theme: Theme::default(),
            default_period: ReportingPeriod::default(),
            onboarding_step: OnboardingStep::FIRST,
            set_onboarding_preferences_at: None,
            onboarded_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_onboarded(&self) -> bool {
        self.onboarded_at.is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn scope(&self) -> TenantScope {
        TenantScope::new(self.id, self.family_id)
    }
}
