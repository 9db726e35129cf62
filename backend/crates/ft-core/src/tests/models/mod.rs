mod onboarding_step;
mod profile;
mod role;
