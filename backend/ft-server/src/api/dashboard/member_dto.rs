use ft_core::Profile;

use serde::Serialize;
use uuid::Uuid;

/// One household member as listed to admins
#[derive(Debug, Serialize)]
pub struct MemberDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: &'static str,
    pub active: bool,
    pub onboarded: bool,
    pub joined_at: i64,
}

impl From<Profile> for MemberDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            role: profile.role.as_str(),
            active: profile.active,
            onboarded: profile.is_onboarded(),
            joined_at: profile.created_at.timestamp(),
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberDto>,
}
