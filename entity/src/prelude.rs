pub use super::notification::Entity as Notification;
pub use super::poll::Entity as Poll;
pub use super::poll_response::Entity as PollResponse;
pub use super::poll_slot::Entity as PollSlot;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::user::Entity as User;
