//! Service-specific tests


use shared::UserId;

/// Shorthand for building user ids in tests
pub fn uid(id: &str) -> UserId {
    UserId::from(id)
}
