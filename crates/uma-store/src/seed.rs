use crate::models::User;

/// Records every repository built with [`crate::UserRepository::seeded`] starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Alice Johnson", "alice.johnson@example.com"),
        User::new(2, "Bob Smith", "bob.smith@example.com"),
        User::new(3, "Charlie Brown", "charlie.brown@example.com"),
    ]
}
