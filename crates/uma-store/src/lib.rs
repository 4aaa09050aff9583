//! In-memory user store for the User Management API.
//!
//! Holds the user model, the seed records and the read-only repository the
//! HTTP layer queries.

pub mod models;
pub mod repositories;
pub mod seed;

pub use models::User;
pub use repositories::user::UserRepository;

use thiserror::Error;

/// Errors raised when records are accepted into a repository.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record failed validation
    #[error("record at index {index} is invalid: {source}")]
    InvalidRecord {
        /// Position of the rejected record in the input
        index: usize,
        /// Constraints the record failed
        #[source]
        source: validator::ValidationErrors,
    },
}
