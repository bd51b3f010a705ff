mod group;
mod organization;
mod ticket;
mod topic;
mod user;

pub use group::Group;
pub use organization::Organization;
pub use ticket::{CustomFieldValue, Ticket};
pub use topic::Topic;
pub use user::User;
