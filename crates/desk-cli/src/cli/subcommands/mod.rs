pub mod auth;
pub mod task;

pub use auth::AuthCommands;
pub use task::TaskCommands;
