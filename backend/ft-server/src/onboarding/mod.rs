pub mod wizard;

pub use wizard::{OnboardingWizard, StepOutcome, StepSubmission, WizardError};
