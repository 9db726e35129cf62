use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateThemeRequest {
    pub theme: String,
}
