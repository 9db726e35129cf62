//! Route access decisions.
//!
//! `decide` is a pure function of the request path, the resolved identity
//! and its profile. Rules are evaluated in a fixed order and the first
//! match wins:
//!
//! 1. public paths are always allowed
//! 2. anonymous callers go to the login page
//! 3. session exit paths are allowed for any identity, profile or not
//! 4. an identity without a profile goes to login with `profile_missing`
//! 5. onboarded users are kept out of the onboarding wizard
//! 6. dashboard paths require onboarding, then any role the path demands
//! 7. everything else is allowed

use ft_core::{Identity, ONBOARDING_PREFIX, Profile, Role};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROFILE_MISSING_REDIRECT: &str = "/login?error=profile_missing";
pub const UNAUTHORIZED_REDIRECT: &str = "/dashboard?error=unauthorized";

pub const PUBLIC_PATHS: &[&str] = &["/login", "/register", "/confirm-signup", "/auth/callback"];

/// Reachable by any signed-in identity, even one whose profile is missing
pub const SESSION_EXIT_PATHS: &[&str] = &["/logout"];

/// Path prefixes restricted to a single role
pub const ROLE_GATED_PATHS: &[(&str, Role)] = &[("/dashboard/admin", Role::Admin)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    ProfileMissing,
    AlreadyOnboarded,
    OnboardingIncomplete,
    Forbidden,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::ProfileMissing => "profile_missing",
            Self::AlreadyOnboarded => "already_onboarded",
            Self::OnboardingIncomplete => "onboarding_incomplete",
            Self::Forbidden => "forbidden",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect {
        to: &'static str,
        reason: DenyReason,
    },
}

impl Decision {
    fn redirect(to: &'static str, reason: DenyReason) -> Self {
        Self::Redirect { to, reason }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Drop the query string and any trailing slash (the root stays "/")
pub fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// `path` equals `prefix` or lies below it; "/dashboards" is not under "/dashboard"
pub fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn is_public(path: &str) -> bool {
    let path = normalize(path);
    PUBLIC_PATHS.iter().any(|public| is_under(path, public))
}

pub fn is_session_exit(path: &str) -> bool {
    let path = normalize(path);
    SESSION_EXIT_PATHS.iter().any(|exit| is_under(path, exit))
}

/// Whether `decide` looks at the profile for this path
pub fn needs_profile(path: &str) -> bool {
    !is_public(path) && !is_session_exit(path)
}

fn required_role(path: &str) -> Option<Role> {
    ROLE_GATED_PATHS
        .iter()
        .find(|(prefix, _)| is_under(path, prefix))
        .map(|(_, role)| *role)
}

pub fn decide(path: &str, identity: Option<&Identity>, profile: Option<&Profile>) -> Decision {
    let path = normalize(path);

    if is_public(path) {
        return Decision::Allow;
    }

    if identity.is_none() {
        return Decision::redirect(LOGIN_PATH, DenyReason::Unauthenticated);
    }

    if is_session_exit(path) {
        return Decision::Allow;
    }

    let Some(profile) = profile else {
        return Decision::redirect(PROFILE_MISSING_REDIRECT, DenyReason::ProfileMissing);
    };

    if is_under(path, ONBOARDING_PREFIX) && profile.is_onboarded() {
        return Decision::redirect(DASHBOARD_PATH, DenyReason::AlreadyOnboarded);
    }

    if is_under(path, DASHBOARD_PATH) {
        if !profile.is_onboarded() {
            return Decision::redirect(
                ft_core::OnboardingStep::FIRST.path(),
                DenyReason::OnboardingIncomplete,
            );
        }

        if let Some(role) = required_role(path)
            && !profile.has_role(role)
        {
            return Decision::redirect(UNAUTHORIZED_REDIRECT, DenyReason::Forbidden);
        }
    }

    Decision::Allow
}
