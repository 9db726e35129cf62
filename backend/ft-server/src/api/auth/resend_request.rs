use serde::Deserialize;

/// Resend the signup confirmation email
#[derive(Debug, Deserialize)]
pub struct ResendRequest {
    pub email: String,
}
