//! User records returned by the authentication flow

use serde::{Deserialize, Serialize};

/// The user shape embedded in a successful login payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}
