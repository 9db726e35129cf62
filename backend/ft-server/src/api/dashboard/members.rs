use crate::api::dashboard::member_dto::{MemberDto, MemberListResponse};
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::state::AppState;

use ft_db::UserRepository;

use axum::{Json, extract::State};

/// GET /dashboard/admin/members
///
/// Role gating happens in the access gate; the handler only lists the
/// caller's own household.
pub async fn list_members(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<MemberListResponse>> {
    let profile = user.profile;

    let members = UserRepository::new(state.pool.clone())
        .list_by_family(profile.family_id)
        .await
        .map_err(|e| ApiError::store("list_members", profile.id, e))?;

    Ok(Json(MemberListResponse {
        members: members.into_iter().map(MemberDto::from).collect(),
    }))
}
