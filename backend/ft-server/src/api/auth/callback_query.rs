use serde::Deserialize;

/// Query of the link sent in the verification email
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub token_hash: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
