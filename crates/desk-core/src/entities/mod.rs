//! Entity structs for studydesk domain objects.
//!
//! Field names match the backend's `tasks` and `profiles` tables so rows
//! deserialize without any mapping layer.

mod profile;
mod task;

pub use profile::Profile;
pub use task::{NewTask, Task, validate_title};
