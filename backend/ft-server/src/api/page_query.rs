use serde::Deserialize;

/// `?error=<code>` echoed back by page view-models after a redirect
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub error: Option<String>,
}

impl PageQuery {
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_deref().and_then(error_message)
    }
}

/// Text for the error codes the server itself redirects with
pub fn error_message(code: &str) -> Option<&'static str> {
    match code {
        "profile_missing" => Some("We could not load your profile. Please sign in again."),
        "verification_failed" => {
            Some("Email verification failed. The link may be invalid or expired.")
        }
        "unauthorized" => Some("You do not have permission to view that page."),
        _ => None,
    }
}
