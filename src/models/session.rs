use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// A signed-in login, looked up by its access token together with the user it
/// belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub login_at: DateTime<Utc>,
    pub logout_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Once `logout_at` is set the session never becomes valid again.
    pub fn is_active(&self) -> bool {
        self.logout_at.is_none()
    }
}
