use crate::OnboardingStep;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_each_step_when_numbered_then_positions_are_one_through_five() {
    let numbers: Vec<usize> = OnboardingStep::ALL.iter().map(|s| s.number()).collect();

    assert_that!(numbers, eq(&vec![1, 2, 3, 4, 5]));
}

#[test]
fn given_household_when_walking_forward_then_visits_steps_in_order() {
    let mut step = OnboardingStep::FIRST;
    let mut visited = vec![step];

    while let Some(next) = step.next() {
        visited.push(next);
        step = next;
    }

    assert_that!(visited, eq(&OnboardingStep::ALL.to_vec()));
    assert_that!(step.is_last(), eq(true));
}

#[test]
fn given_first_step_when_previous_then_none() {
    assert_that!(OnboardingStep::Household.previous(), none());
    assert_that!(
        OnboardingStep::Location.previous(),
        some(eq(OnboardingStep::Household))
    );
    assert_that!(
        OnboardingStep::Complete.previous(),
        some(eq(OnboardingStep::Theme))
    );
}

#[test]
fn given_step_when_path_then_lives_under_onboarding_prefix() {
    for step in OnboardingStep::ALL {
        assert_that!(
            step.path(),
            eq(format!("{}/{}", crate::ONBOARDING_PREFIX, step.as_str()).as_str())
        );
    }
}

#[test]
fn given_unknown_segment_when_parsed_then_error() {
    assert_that!(OnboardingStep::from_str("billing"), err(anything()));
    assert_that!(
        OnboardingStep::from_str("theme"),
        ok(eq(&OnboardingStep::Theme))
    );
}
