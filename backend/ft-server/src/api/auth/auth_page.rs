use serde::Serialize;

/// View-model for the public credential pages
#[derive(Debug, Serialize)]
pub struct AuthPage {
    pub page: &'static str,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<&'static str>,
}
