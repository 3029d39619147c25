//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Phone, UserId};

/// A storefront account.
///
/// This is the wire shape returned by the auth endpoints. The password
/// hash lives only inside the storage layer and is never part of any
/// serialized user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID, assigned sequentially.
    pub id: UserId,
    /// Login identifier; unique across accounts.
    pub phone: Phone,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}
