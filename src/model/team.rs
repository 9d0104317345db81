//! Team domain models and parameters.
//!
//! Defines team-related domain models and parameter types for team and
//! membership operations.

use chrono::{DateTime, Utc};
use entity::team_member::TeamRole;

use crate::dto::team::{TeamDetailDto, TeamDto, TeamMemberDto, TeamRoleDto};

/// Team of users who coordinate meeting polls together.
///
/// Tracks the team's name, optional description, and which user created it.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    /// Unique identifier for the team.
    pub id: i32,
    /// Name of the team.
    pub name: String,
    /// Optional description of the team.
    pub description: Option<String>,
    /// ID of the user who created the team.
    pub creator_id: i32,
    /// Timestamp when the team was created.
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Team` - The converted team domain model
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            creator_id: entity.creator_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the team domain model to a DTO for API responses.
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            description: self.description,
            creator_id: self.creator_id,
            created_at: self.created_at,
        }
    }
}

/// Team member enriched with user identity, as produced by the membership join.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMemberInfo {
    /// ID of the member's user account.
    pub user_id: i32,
    /// Display name of the member.
    pub name: String,
    /// Email address of the member.
    pub email: String,
    /// Role of the member within the team.
    pub role: TeamRole,
    /// Timestamp when the member joined the team.
    pub joined_at: DateTime<Utc>,
}

impl TeamMemberInfo {
    /// Converts the member domain model to a DTO for API responses.
    pub fn into_dto(self) -> TeamMemberDto {
        TeamMemberDto {
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            role: team_role_to_dto(self.role),
            joined_at: self.joined_at,
        }
    }
}

/// Team together with its full membership roster.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWithMembers {
    /// The team itself.
    pub team: Team,
    /// All current members, managers first then by join time.
    pub members: Vec<TeamMemberInfo>,
}

impl TeamWithMembers {
    /// Converts the team and its roster to a detail DTO for API responses.
    pub fn into_dto(self) -> TeamDetailDto {
        TeamDetailDto {
            id: self.team.id,
            name: self.team.name,
            description: self.team.description,
            creator_id: self.team.creator_id,
            created_at: self.team.created_at,
            members: self.members.into_iter().map(|m| m.into_dto()).collect(),
        }
    }
}

/// Parameters for creating a new team.
///
/// The creator is enrolled as a manager in the same transaction that creates
/// the team row.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    /// Name of the team.
    pub name: String,
    /// Optional description of the team.
    pub description: Option<String>,
    /// ID of the user creating the team.
    pub creator_id: i32,
}

/// Parameters for updating a team's name and description.
///
/// Both fields replace the stored values; a `None` description clears it.
#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    /// ID of the team to update.
    pub id: i32,
    /// New name for the team.
    pub name: String,
    /// New description (None clears the stored description).
    pub description: Option<String>,
}

/// Parameters for enrolling a user into a team by email.
#[derive(Debug, Clone)]
pub struct AddTeamMemberParams {
    /// ID of the team to enroll into.
    pub team_id: i32,
    /// Email address of the user to enroll.
    pub email: String,
    /// Role to enroll the user with.
    pub role: TeamRole,
}

/// Maps the wire role enum to the stored role enum.
pub fn team_role_from_dto(role: TeamRoleDto) -> TeamRole {
    match role {
        TeamRoleDto::Manager => TeamRole::Manager,
        TeamRoleDto::Member => TeamRole::Member,
    }
}

/// Maps the stored role enum to the wire role enum.
pub fn team_role_to_dto(role: TeamRole) -> TeamRoleDto {
    match role {
        TeamRole::Manager => TeamRoleDto::Manager,
        TeamRole::Member => TeamRoleDto::Member,
    }
}
