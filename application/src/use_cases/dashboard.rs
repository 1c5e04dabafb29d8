//! Dashboard use case: per-user feedback summary.

use crate::ports::helpdesk_repository::{HelpdeskRepository, RepositoryError};
use helpdesk_domain::{FeedbackStats, RecentFeedback};
use std::sync::Arc;

/// Number of feedback entries shown on the dashboard
pub const RECENT_FEEDBACK_LIMIT: usize = 5;

/// Everything the dashboard shows for one user
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOutput {
    pub user: String,
    pub stats: FeedbackStats,
    pub recent: Vec<RecentFeedback>,
}

#[derive(Clone)]
pub struct DashboardUseCase {
    repository: Arc<dyn HelpdeskRepository>,
}

impl DashboardUseCase {
    pub fn new(repository: Arc<dyn HelpdeskRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user: &str) -> Result<DashboardOutput, RepositoryError> {
        let stats = self.repository.feedback_stats(user).await?;
        let recent = self
            .repository
            .recent_feedback(user, RECENT_FEEDBACK_LIMIT)
            .await?;
        Ok(DashboardOutput {
            user: user.to_string(),
            stats,
            recent,
        })
    }
}
