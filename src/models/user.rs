use crate::core::error::UserError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Account role. Stored as a varchar, restricted to these four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Pilot,
    ShopManager,
    Technician,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Pilot, Role::ShopManager, Role::Technician, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Pilot => "pilot",
            Role::ShopManager => "shop_manager",
            Role::Technician => "technician",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UserError::InvalidRole(s.to_string()))
    }
}

/// Opaque credential material. Never the plaintext password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Registration input
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: PasswordHash,
    pub name: String,
    pub role: Role,
}

/// A row of the `users` table
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: PasswordHash,
    pub name: String,
    pub role: Role,
    created_at: DateTime<Utc>,
}

impl User {
    /// Assigns a fresh id and stamps the creation time
    pub fn new(new_user: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            name: new_user.name,
            role: new_user.role,
            created_at: Utc::now(),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, role: Role) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: PasswordHash::new("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"),
            name: "Amelia Earhart".to_string(),
            role,
        }
    }

    #[test]
    fn test_role_parses_all_four_values() {
        assert_eq!("pilot".parse::<Role>().unwrap(), Role::Pilot);
        assert_eq!("shop_manager".parse::<Role>().unwrap(), Role::ShopManager);
        assert_eq!("technician".parse::<Role>().unwrap(), Role::Technician);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn test_role_rejects_other_values() {
        for value in ["", "Pilot", "shop-manager", "mechanic", "admin "] {
            assert_eq!(
                value.parse::<Role>(),
                Err(UserError::InvalidRole(value.to_string())),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_role_serde_matches_column_values() {
        assert_eq!(serde_json::to_string(&Role::ShopManager).unwrap(), "\"shop_manager\"");
        let role: Role = serde_json::from_str("\"technician\"").unwrap();
        assert_eq!(role, Role::Technician);
        assert!(serde_json::from_str::<Role>("\"owner\"").is_err());
    }

    #[test]
    fn test_password_hash_is_redacted() {
        let hash = PasswordHash::new("secret-hash");
        assert_eq!(format!("{hash:?}"), "PasswordHash(<redacted>)");
        assert_eq!(hash.expose(), "secret-hash");
    }

    #[test]
    fn test_serialized_user_omits_password_hash() {
        let user = User::new(new_user("amelia@example.com", Role::Pilot));
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "amelia@example.com");
        assert_eq!(json["role"], "pilot");
        assert!(json.get("created_at").is_some());
    }

    #[test]
    fn test_new_user_gets_unique_id_and_timestamp() {
        let before = Utc::now();
        let a = User::new(new_user("a@example.com", Role::Admin));
        let b = User::new(new_user("b@example.com", Role::Admin));

        assert_ne!(a.id, b.id);
        assert!(a.created_at() >= before);
    }
}
