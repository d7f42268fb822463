//! In-memory user store
//!
//! Process-local storage backing the [`UserStore`] port. Records live in
//! a `HashMap` behind a `parking_lot` lock; ids are sequential starting
//! at 1 and are never reused, even after a failed update.

use std::collections::HashMap;

use application::{ApplicationError, UserStore};
use async_trait::async_trait;
use domain::{NewUser, User, UserPreferences};
use parking_lot::RwLock;

struct Inner {
    users: HashMap<u64, User>,
    next_id: u64,
}

/// In-memory [`UserStore`] implementation
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl std::fmt::Debug for MemoryUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("MemoryUserStore")
            .field("users", &inner.users.len())
            .field("next_id", &inner.next_id)
            .finish()
    }
}

impl MemoryUserStore {
    /// Create an empty store; the first created user gets id 1
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_user(&self, id: u64) -> Result<Option<User>, ApplicationError> {
        Ok(self.inner.read().users.get(&id).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, ApplicationError> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let user = new_user.into_user(id);
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update_preferences(
        &self,
        id: u64,
        preferences: UserPreferences,
    ) -> Result<User, ApplicationError> {
        let mut inner = self.inner.write();
        let user = inner
            .users
            .get_mut(&id)
            .ok_or_else(|| ApplicationError::NotFound(format!("User {id}")))?;
        user.preferences = preferences;
        Ok(user.clone())
    }
}
