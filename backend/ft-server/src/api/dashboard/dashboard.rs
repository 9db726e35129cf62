use crate::api::dashboard::dashboard_page::{DashboardPage, DashboardUser, NavLink};
use crate::api::extractors::current_user::CurrentUser;
use crate::api::page_query::PageQuery;
use crate::gate::access_gate::DASHBOARD_PATH;

use axum::{Json, extract::Query, response::Redirect};

/// GET /
pub async fn root() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}

/// GET /dashboard
pub async fn dashboard(user: CurrentUser, Query(query): Query<PageQuery>) -> Json<DashboardPage> {
    let profile = user.profile;

    let mut nav = vec![
        NavLink {
            label: "Overview",
            path: DASHBOARD_PATH,
        },
        NavLink {
            label: "Settings",
            path: "/dashboard/settings",
        },
    ];
    if profile.is_admin() {
        nav.push(NavLink {
            label: "Members",
            path: "/dashboard/admin/members",
        });
    }

    let error_message = query.error_message();
    Json(DashboardPage {
        user: DashboardUser {
            id: profile.id,
            name: profile.full_name(),
            role: profile.role.as_str(),
            email: user.identity.email,
        },
        household_id: profile.family_id,
        nav,
        error: query.error,
        error_message,
    })
}
