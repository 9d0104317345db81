use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire form of the closed team role set.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeamRoleDto {
    Manager,
    Member,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTeamDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddTeamMemberDto {
    pub email: String,
    /// Role to enroll with. Defaults to `member`.
    #[serde(default)]
    pub role: Option<TeamRoleDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamMemberDto {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub role: TeamRoleDto,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub joined_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamDetailDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub members: Vec<TeamMemberDto>,
}
