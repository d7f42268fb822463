//! User preference storage port
//!
//! Defines the interface for user records and preference updates. The
//! store assigns sequential identifiers starting at 1 and never reuses
//! them.

use async_trait::async_trait;
use domain::{NewUser, User, UserPreferences};

use crate::error::ApplicationError;

/// Port for user storage operations
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get a user by id; absence is a valid outcome, not an error
    async fn get_user(&self, id: u64) -> Result<Option<User>, ApplicationError>;

    /// Create a user, assigning the next sequential id
    async fn create_user(&self, new_user: NewUser) -> Result<User, ApplicationError>;

    /// Replace a user's preferences wholesale (no merging)
    ///
    /// Fails with [`ApplicationError::NotFound`] when the id is absent; a
    /// failed update mutates nothing.
    async fn update_preferences(
        &self,
        id: u64,
        preferences: UserPreferences,
    ) -> Result<User, ApplicationError>;
}
