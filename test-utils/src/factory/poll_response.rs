//! Poll response factory for creating test response entities.
//!
//! Responses are inserted directly, without the conflict-update path the
//! response repository uses. Tests exercising the upsert should go through
//! the repository instead.

use entity::poll_response::Availability;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test poll responses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity::poll_response::Availability;
/// use test_utils::factory::poll_response::PollResponseFactory;
///
/// let response = PollResponseFactory::new(&db, poll.id, slot.id, user.id)
///     .availability(Availability::Maybe)
///     .build()
///     .await?;
/// ```
pub struct PollResponseFactory<'a> {
    db: &'a DatabaseConnection,
    poll_id: i32,
    slot_id: i32,
    user_id: i32,
    availability: Availability,
}

impl<'a> PollResponseFactory<'a> {
    /// Creates a new PollResponseFactory with default values.
    ///
    /// Defaults:
    /// - availability: `Availability::Available`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `poll_id` - Poll the response belongs to
    /// - `slot_id` - Slot being responded to
    /// - `user_id` - Responding participant
    ///
    /// # Returns
    /// - `PollResponseFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, poll_id: i32, slot_id: i32, user_id: i32) -> Self {
        Self {
            db,
            poll_id,
            slot_id,
            user_id,
            availability: Availability::Available,
        }
    }

    /// Sets the availability value.
    ///
    /// # Arguments
    /// - `availability` - Availability to record
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Builds and inserts the response entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::poll_response::Model)` - Created response entity
    /// - `Err(DbErr)` - Database error during insert (including unique
    ///   violations when the (user, slot) pair already has a response)
    pub async fn build(self) -> Result<entity::poll_response::Model, DbErr> {
        entity::poll_response::ActiveModel {
            id: ActiveValue::NotSet,
            poll_id: ActiveValue::Set(self.poll_id),
            slot_id: ActiveValue::Set(self.slot_id),
            user_id: ActiveValue::Set(self.user_id),
            availability: ActiveValue::Set(self.availability),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `available` response for the given (poll, slot, user).
///
/// Shorthand for `PollResponseFactory::new(db, poll_id, slot_id, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `poll_id` - Poll the response belongs to
/// - `slot_id` - Slot being responded to
/// - `user_id` - Responding participant
///
/// # Returns
/// - `Ok(entity::poll_response::Model)` - Created response entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_poll_response(
    db: &DatabaseConnection,
    poll_id: i32,
    slot_id: i32,
    user_id: i32,
) -> Result<entity::poll_response::Model, DbErr> {
    PollResponseFactory::new(db, poll_id, slot_id, user_id)
        .build()
        .await
}

/// Creates a response with a specific availability value.
///
/// # Arguments
/// - `db` - Database connection
/// - `poll_id` - Poll the response belongs to
/// - `slot_id` - Slot being responded to
/// - `user_id` - Responding participant
/// - `availability` - Availability to record
///
/// # Returns
/// - `Ok(entity::poll_response::Model)` - Created response entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_poll_response_with(
    db: &DatabaseConnection,
    poll_id: i32,
    slot_id: i32,
    user_id: i32,
    availability: Availability,
) -> Result<entity::poll_response::Model, DbErr> {
    PollResponseFactory::new(db, poll_id, slot_id, user_id)
        .availability(availability)
        .build()
        .await
}
