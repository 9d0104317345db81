//! Team service for team and membership business logic.
//!
//! This module provides the `TeamService` for team lifecycle and roster
//! management: creating teams, listing and updating them, enrolling members
//! by email, and the removal rules that keep every team managed. Departing
//! members lose their responses in the team's open polls; closed polls keep
//! their history.

use entity::{notification::NotificationKind, team_member::TeamRole};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        notification::NotificationRepository, response::PollResponseRepository,
        team::TeamRepository, team_member::TeamMemberRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        notification::CreateNotificationParams,
        team::{
            AddTeamMemberParams, CreateTeamParams, Team, TeamMemberInfo, TeamWithMembers,
            UpdateTeamParams,
        },
    },
};

/// Service providing business logic for teams and their memberships.
pub struct TeamService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    /// Creates a new TeamService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TeamService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team and enrolls the creator as its first manager.
    ///
    /// # Arguments
    /// - `param` - Create parameters with name, description, and creator
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(AppError::DbErr)` - Database error; nothing is persisted
    pub async fn create_team(&self, param: CreateTeamParams) -> Result<Team, AppError> {
        let team_repo = TeamRepository::new(self.db);

        Ok(team_repo.create(param).await?)
    }

    /// Lists the teams a user belongs to, alphabetically.
    ///
    /// # Arguments
    /// - `user_id` - User whose teams to list
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - Teams the user is a member of, possibly empty
    pub async fn get_teams_for_user(&self, user_id: i32) -> Result<Vec<Team>, AppError> {
        let team_repo = TeamRepository::new(self.db);

        Ok(team_repo.get_all_for_user(user_id).await?)
    }

    /// Retrieves a team with its roster, managers first.
    ///
    /// # Arguments
    /// - `team_id` - Team to fetch
    ///
    /// # Returns
    /// - `Ok(TeamWithMembers)` - The team and its members
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn get_team_detail(&self, team_id: i32) -> Result<TeamWithMembers, AppError> {
        let team = self.require_team(team_id).await?;

        let member_repo = TeamMemberRepository::new(self.db);
        let members = member_repo.get_members_with_users(team_id).await?;

        Ok(TeamWithMembers { team, members })
    }

    /// Updates a team's name and description.
    ///
    /// # Arguments
    /// - `param` - Update parameters with id, new name, and new description
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn update_team(&self, param: UpdateTeamParams) -> Result<Team, AppError> {
        self.require_team(param.id).await?;

        let team_repo = TeamRepository::new(self.db);

        Ok(team_repo.update(param).await?)
    }

    /// Deletes a team together with its polls, slots, responses, and roster.
    ///
    /// # Arguments
    /// - `team_id` - Team to delete
    ///
    /// # Returns
    /// - `Ok(())` - Team and all dependent rows removed
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn delete_team(&self, team_id: i32) -> Result<(), AppError> {
        self.require_team(team_id).await?;

        let team_repo = TeamRepository::new(self.db);
        team_repo.delete(team_id).await?;

        Ok(())
    }

    /// Enrolls a user into a team by email.
    ///
    /// The enrolled user receives a `team_member_added` notification; a
    /// failed notification write is logged and does not fail the enrollment.
    ///
    /// # Arguments
    /// - `param` - Enrollment parameters with team, email, and role
    ///
    /// # Returns
    /// - `Ok(TeamMemberInfo)` - The new roster entry
    /// - `Err(AppError::NotFound)` - Unknown team or no user with that email
    /// - `Err(AppError::BadRequest)` - User is already a member
    pub async fn add_member(&self, param: AddTeamMemberParams) -> Result<TeamMemberInfo, AppError> {
        let team = self.require_team(param.team_id).await?;

        let user_repo = UserRepository::new(self.db);
        let member_repo = TeamMemberRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let user = user_repo
            .find_by_email(&param.email)
            .await?
            .ok_or_else(|| AppError::NotFound("No user with that email".to_string()))?;

        if member_repo.find(team.id, user.id).await?.is_some() {
            return Err(AppError::BadRequest(
                "User is already a member of this team".to_string(),
            ));
        }

        let membership = member_repo.create(team.id, user.id, param.role).await?;

        let notification = CreateNotificationParams {
            user_id: user.id,
            kind: NotificationKind::TeamMemberAdded,
            title: format!("Added to team: {}", team.name),
            message: format!("You were added to '{}'.", team.name),
            related_id: Some(team.id),
        };
        if let Err(e) = notification_repo.create(notification).await {
            tracing::error!("Failed to record enrollment notification for user {}: {}", user.id, e);
        }

        Ok(TeamMemberInfo {
            user_id: user.id,
            name: user.name,
            email: user.email,
            role: membership.role,
            joined_at: membership.joined_at,
        })
    }

    /// Removes a member from a team.
    ///
    /// Managers cannot remove themselves this way; they leave instead. The
    /// departing member's responses in the team's open polls are removed,
    /// closed polls keep theirs.
    ///
    /// # Arguments
    /// - `team_id` - Team to remove from
    /// - `target_user_id` - Member being removed
    /// - `acting_user_id` - Manager performing the removal
    ///
    /// # Returns
    /// - `Ok(())` - Membership and open-poll responses removed
    /// - `Err(AppError::BadRequest)` - Attempted self-removal
    /// - `Err(AppError::NotFound)` - Target is not a member
    pub async fn remove_member(
        &self,
        team_id: i32,
        target_user_id: i32,
        acting_user_id: i32,
    ) -> Result<(), AppError> {
        if target_user_id == acting_user_id {
            return Err(AppError::BadRequest(
                "Use leave to remove yourself from a team".to_string(),
            ));
        }

        let member_repo = TeamMemberRepository::new(self.db);
        let response_repo = PollResponseRepository::new(self.db);

        if member_repo.find(team_id, target_user_id).await?.is_none() {
            return Err(AppError::NotFound(
                "User is not a member of this team".to_string(),
            ));
        }

        member_repo.delete(team_id, target_user_id).await?;
        response_repo
            .delete_for_user_in_open_polls(team_id, target_user_id)
            .await?;

        Ok(())
    }

    /// Removes the caller's own membership from a team.
    ///
    /// The last manager cannot leave; another manager has to be added first.
    /// The departing member's responses in the team's open polls are removed.
    ///
    /// # Arguments
    /// - `team_id` - Team to leave
    /// - `user_id` - Departing user
    ///
    /// # Returns
    /// - `Ok(())` - Membership and open-poll responses removed
    /// - `Err(AppError::NotFound)` - Caller is not a member
    /// - `Err(AppError::BadRequest)` - Caller is the last manager
    pub async fn leave_team(&self, team_id: i32, user_id: i32) -> Result<(), AppError> {
        let member_repo = TeamMemberRepository::new(self.db);
        let response_repo = PollResponseRepository::new(self.db);

        let membership = member_repo
            .find(team_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("You are not a member of this team".to_string()))?;

        if membership.role == TeamRole::Manager && member_repo.count_managers(team_id).await? <= 1 {
            return Err(AppError::BadRequest(
                "A team needs at least one manager; add another manager first".to_string(),
            ));
        }

        member_repo.delete(team_id, user_id).await?;
        response_repo
            .delete_for_user_in_open_polls(team_id, user_id)
            .await?;

        Ok(())
    }

    /// Fetches a team or fails with a not-found error.
    async fn require_team(&self, team_id: i32) -> Result<Team, AppError> {
        let team_repo = TeamRepository::new(self.db);

        team_repo
            .get_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }
}
