//! # desk-store
//!
//! Task persistence for studydesk.
//!
//! - [`TaskStore`]: the async persistence contract
//! - [`RestStore`]: the implementation over the backend's REST endpoint
//! - [`TaskBoard`]: the in-memory collection plus fetch/create/update/delete
//!   actions, re-fetching after every successful mutation
//! - [`TaskUpdate`]: partial updates that send only changed columns

pub mod error;
pub mod rest;
pub mod service;
pub mod store;
mod test_support;
pub mod updates;

pub use error::StoreError;
pub use rest::RestStore;
pub use service::TaskBoard;
pub use store::TaskStore;
pub use updates::{TaskUpdate, TaskUpdateBuilder};
