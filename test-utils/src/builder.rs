use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Team, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Team)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Vector of CREATE INDEX statements to execute after table creation.
    ///
    /// Entity models cannot express composite unique constraints, so the indexes the
    /// migrations declare (and that the upsert write paths rely on) are added here
    /// explicitly.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a CREATE INDEX statement to run after the tables are created.
    ///
    /// Use this for composite unique indexes that the entity schema cannot express.
    /// The convenience table methods below already include the indexes their tables
    /// need.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement to execute during `build()`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds all tables required for team operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Team
    /// - TeamMember (with its unique (team_id, user_id) index)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_team_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_team_tables(self) -> Self {
        self.with_table(User)
            .with_table(Team)
            .with_table(TeamMember)
            .with_index(team_member_unique_index())
    }

    /// Adds all tables required for poll operations.
    ///
    /// This convenience method adds the team tables plus:
    /// - Poll
    /// - PollSlot (with its unique (poll_id, slot_date, start_time) index)
    /// - PollResponse (with its unique (user_id, slot_id) index)
    ///
    /// The response upsert conflicts on the (user_id, slot_id) index, so use this
    /// method (or add the index yourself) when testing response writes.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_poll_tables(self) -> Self {
        self.with_team_tables()
            .with_table(Poll)
            .with_table(PollSlot)
            .with_table(PollResponse)
            .with_index(poll_slot_unique_index())
            .with_index(poll_response_unique_index())
    }

    /// Adds all tables required for notification operations.
    ///
    /// Equivalent to `with_poll_tables()` followed by `with_table(Notification)`,
    /// since notifications are produced by poll and team operations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_notification_tables(self) -> Self {
        self.with_poll_tables().with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements that were added via `with_table()`, then all CREATE INDEX
    /// statements. Tables are created in the order they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

fn team_member_unique_index() -> IndexCreateStatement {
    Index::create()
        .unique()
        .name("idx_team_member_unique")
        .table(TeamMember)
        .col(entity::team_member::Column::TeamId)
        .col(entity::team_member::Column::UserId)
        .to_owned()
}

fn poll_slot_unique_index() -> IndexCreateStatement {
    Index::create()
        .unique()
        .name("idx_poll_slot_unique")
        .table(PollSlot)
        .col(entity::poll_slot::Column::PollId)
        .col(entity::poll_slot::Column::SlotDate)
        .col(entity::poll_slot::Column::StartTime)
        .to_owned()
}

fn poll_response_unique_index() -> IndexCreateStatement {
    Index::create()
        .unique()
        .name("idx_poll_response_unique")
        .table(PollResponse)
        .col(entity::poll_response::Column::UserId)
        .col(entity::poll_response::Column::SlotId)
        .to_owned()
}
