//! Team membership repository for database operations.
//!
//! This module provides the `TeamMemberRepository` for managing membership rows.
//! It handles enrollment, role lookups for authorization checks, roster queries
//! enriched with user identity, and member removal.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::team_member::TeamRole;

use crate::model::team::TeamMemberInfo;

/// Repository providing database operations for team membership.
pub struct TeamMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamMemberRepository<'a> {
    /// Creates a new TeamMemberRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a user into a team with the given role.
    ///
    /// The (team_id, user_id) pair carries a unique constraint, so enrolling
    /// an existing member surfaces as a database error.
    ///
    /// # Arguments
    /// - `team_id` - ID of the team to enroll into
    /// - `user_id` - ID of the user to enroll
    /// - `role` - Role to enroll the user with
    ///
    /// # Returns
    /// - `Ok(Model)` - The created membership row
    /// - `Err(DbErr)` - Database error, including duplicate enrollment
    pub async fn create(
        &self,
        team_id: i32,
        user_id: i32,
        role: TeamRole,
    ) -> Result<entity::team_member::Model, DbErr> {
        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the membership row for a user in a team.
    ///
    /// Used for membership and role checks during authorization.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The user is a member of the team
    /// - `Ok(None)` - The user is not a member
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets the team roster enriched with user identity.
    ///
    /// Rows are ordered managers first, then by join time ("manager" sorts
    /// before "member" in the stored role strings).
    ///
    /// # Arguments
    /// - `team_id` - ID of the team whose roster to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<TeamMemberInfo>)` - Member rows joined with user name and email
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_members_with_users(
        &self,
        team_id: i32,
    ) -> Result<Vec<TeamMemberInfo>, DbErr> {
        let rows = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::team_member::Column::Role)
            .order_by_asc(entity::team_member::Column::JoinedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, user)| {
                user.map(|user| TeamMemberInfo {
                    user_id: member.user_id,
                    name: user.name,
                    email: user.email,
                    role: member.role,
                    joined_at: member.joined_at,
                })
            })
            .collect())
    }

    /// Gets the user ids of every member of a team.
    ///
    /// Used for notification fan-out on poll creation and closure.
    pub async fn get_member_user_ids(&self, team_id: i32) -> Result<Vec<i32>, DbErr> {
        let members = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(|m| m.user_id).collect())
    }

    /// Counts the managers of a team.
    ///
    /// Used to stop the last manager from leaving a team.
    pub async fn count_managers(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::Role.eq(TeamRole::Manager))
            .count(self.db)
            .await
    }

    /// Removes a membership row.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed (or none existed)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, team_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
