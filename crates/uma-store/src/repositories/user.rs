use validator::Validate;

use crate::{StoreError, models::User, seed::seed_users};

/// Read-only, ordered collection of users.
///
/// Records are fixed at construction; the repository exposes no way to change
/// them afterwards, so it can be shared across request tasks without locking.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    users: Vec<User>,
}

impl UserRepository {
    /// Repository holding the fixed seed records.
    pub fn seeded() -> Self {
        Self { users: seed_users() }
    }

    /// Accept `users` in order, validating every record first.
    pub fn try_from_records(users: Vec<User>) -> Result<Self, StoreError> {
        for (index, user) in users.iter().enumerate() {
            user.validate()
                .map_err(|source| StoreError::InvalidRecord { index, source })?;
        }

        Ok(Self { users })
    }

    /// All users in insertion order.
    pub fn list_all(&self) -> &[User] {
        &self.users
    }

    /// First user whose identifier equals `id`, scanning in insertion order.
    pub fn find_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|user| user.id() == Some(id))
    }
}
