use crate::core::error::UserError;
use crate::models::user::{NewUser, User};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory user directory
///
/// Mirrors the `users` table: rows keyed by id plus a unique index on email.
/// Emails compare byte-for-byte, like a plain `UNIQUE` column.
pub struct UserDirectory {
    users: DashMap<Uuid, Arc<User>>,
    emails: DashMap<String, Uuid>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            emails: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: DashMap::with_capacity(capacity),
            emails: DashMap::with_capacity(capacity),
        }
    }

    /// Create a user from registration input
    /// Fails if the email is already taken
    pub fn register(&self, new_user: NewUser) -> Result<Arc<User>, UserError> {
        // The email shard stays locked until the row is in place,
        // so two racing registrations cannot both claim it.
        match self.emails.entry(new_user.email.clone()) {
            Entry::Occupied(_) => Err(UserError::DuplicateEmail(new_user.email)),
            Entry::Vacant(slot) => {
                let user = Arc::new(User::new(new_user));
                self.users.insert(user.id, Arc::clone(&user));
                slot.insert(user.id);
                Ok(user)
            }
        }
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<User>> {
        self.users.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn get_by_email(&self, email: &str) -> Option<Arc<User>> {
        let id = *self.emails.get(email)?.value();
        self.get(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
