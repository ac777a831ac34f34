use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::session::Role;

/// The current user's profile.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub specialization_id: Option<i64>,
}

/// A specialization lookup row.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Specialization {
    pub id: i64,
    pub name: String,
}

/// Account creation payload. The portal registers patients and doctors;
/// admin accounts are provisioned elsewhere.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct RegisterProfile {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
}

impl RegisterProfile {
    pub fn validate(&self) -> Result<(), Error> {
        if self.role == Role::Admin {
            return Err(Error::Validation {
                message: "Admin accounts cannot self-register".to_string(),
            });
        }
        for (field, value) in [
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
            ("phone", &self.phone),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation {
                    message: format!("{field} is required"),
                });
            }
        }
        Ok(())
    }
}
