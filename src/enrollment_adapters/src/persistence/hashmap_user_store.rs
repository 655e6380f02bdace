use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use enrollment_core::{User, UserId, UserStore, UserStoreError};

#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, User>,
    // normalized email -> id
    email_index: HashMap<String, UserId>,
}

/// In-memory user store. Clones share the same underlying data.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.by_id.is_empty()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.email_index.contains_key(user.email().as_str()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        if users.by_id.contains_key(user.id()) {
            return Err(UserStoreError::UnexpectedError(format!(
                "identifier {} is already in use",
                user.id()
            )));
        }

        users
            .email_index
            .insert(user.email().as_str().to_string(), user.id().clone());
        users.by_id.insert(user.id().clone(), user);
        Ok(())
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.by_id.get(id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .email_index
            .get(email)
            .and_then(|id| users.by_id.get(id))
            .cloned())
    }

    async fn clear(&self) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        users.by_id.clear();
        users.email_index.clear();
        Ok(())
    }
}
