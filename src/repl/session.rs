//! Per-run session state

use std::time::{Duration, Instant};

use crate::insights::usage_summary;
use crate::storage::UserProfile;

/// State owned by one interactive run
#[derive(Debug)]
pub struct SessionContext {
    started_at: Instant,
    user: Option<UserProfile>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(started_at: Instant) -> Self {
        SessionContext {
            started_at,
            user: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// "You've used HealthBot for Xm Ys today"
    pub fn usage_summary(&self) -> String {
        usage_summary(self.elapsed())
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: UserProfile) {
        tracing::info!(student_id = %user.student_id, "Session user established");
        self.user = Some(user);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
