//! User entity and its public projection.

use serde::{Deserialize, Serialize};

/// User account as held by the persistence layer
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    /// Hash produced by the external password hasher
    pub password_hash: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("login", &self.login)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl User {
    /// Projects the user onto the fields safe to return to clients
    pub fn public_view(&self) -> PublicUser {
        PublicUser::from(self)
    }
}

/// User fields that may leave the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub login: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            login: user.login.clone(),
            email: user.email.clone(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
        }
    }
}
