use std::sync::Arc;

use uma_store::UserRepository;

use crate::{ApiConfig, config::Environment};

#[derive(Clone, Debug)]
pub struct ApiState {
    pub users: Arc<UserRepository>,
    pub environment: Environment,
}

impl ApiState {
    /// Build the state around an already populated repository.
    pub fn new(config: &ApiConfig, users: UserRepository) -> Self {
        tracing::debug!(
            users = users.list_all().len(),
            "User repository loaded"
        );

        Self {
            users: Arc::new(users),
            environment: config.env,
        }
    }
}
