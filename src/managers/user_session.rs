//! User Session for Classifieds.
//!
//! Holds the signed-in user for the lifetime of the process. Nothing is
//! verified and nothing is persisted.

use tracing::info;

use crate::types::user::User;

/// Trait defining user session operations.
pub trait UserSessionTrait {
    fn login(&mut self, user: User);
    fn logout(&mut self);
    fn current_user(&self) -> Option<&User>;
    fn is_logged_in(&self) -> bool;
    fn is_admin(&self) -> bool;
}

/// In-memory user session.
#[derive(Debug, Default)]
pub struct UserSession {
    user: Option<User>,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserSessionTrait for UserSession {
    /// Signs `user` in, replacing anyone already signed in.
    fn login(&mut self, user: User) {
        info!(user_id = %user.id, admin = user.is_admin, "user logged in");
        self.user = Some(user);
    }

    fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "user logged out");
        }
    }

    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}
