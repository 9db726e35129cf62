use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DashboardUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: &'static str,
}

/// View-model for the dashboard landing page
#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub user: DashboardUser,
    pub household_id: Uuid,
    pub nav: Vec<NavLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<&'static str>,
}
