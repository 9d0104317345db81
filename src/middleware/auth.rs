use entity::team_member::TeamRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::{team_member::TeamMemberRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// A requirement a request must satisfy before its handler runs.
pub enum Permission {
    /// Caller must belong to the given team in any role.
    TeamMember(i32),
    /// Caller must hold the manager role in the given team.
    TeamManager(i32),
}

/// Guard that resolves the authenticated user and checks team permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and verifies every listed permission.
    ///
    /// An empty permission list only requires a valid login.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user with all permissions satisfied
    /// - `Err(AuthError::UserNotInSession)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - A team permission was not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let member_repo = TeamMemberRepository::new(self.db);
        for permission in permissions {
            match permission {
                Permission::TeamMember(team_id) => {
                    if member_repo.find(*team_id, user_id).await?.is_none() {
                        return Err(AuthError::AccessDenied.into());
                    }
                }
                Permission::TeamManager(team_id) => {
                    let Some(membership) = member_repo.find(*team_id, user_id).await? else {
                        return Err(AuthError::AccessDenied.into());
                    };
                    if membership.role != TeamRole::Manager {
                        return Err(AuthError::AccessDenied.into());
                    }
                }
            }
        }

        Ok(user)
    }
}
