//! Publication workflow transition rules.
//!
//! State legality is a pure function of `(current status, action)`. Caller
//! permissions are enforced upstream by the permission resolver; this
//! module only answers whether a transition is legal and what it leads to.

use serde::{Deserialize, Serialize};
use std::fmt;

use atrium_core::AppError;

use super::status::PostStatus;

/// Actions that move a post through its publication lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowAction {
    /// Author hands a draft to editorial review.
    SubmitReview,
    /// Reviewer accepts the post; it goes live.
    Approve,
    /// Reviewer sends the post back with an optional reason.
    Reject,
    /// Retire a published or rejected post.
    Archive,
    /// Publish directly, bypassing review.
    Publish,
}

impl WorkflowAction {
    /// The source states from which this action is legal.
    pub fn allowed_from(&self) -> &'static [PostStatus] {
        match self {
            Self::SubmitReview => &[PostStatus::Draft],
            Self::Approve => &[PostStatus::Review],
            Self::Reject => &[PostStatus::Review],
            Self::Archive => &[PostStatus::Published, PostStatus::Rejected],
            Self::Publish => &[PostStatus::Draft, PostStatus::Review],
        }
    }

    /// The state this action leads to.
    pub fn target(&self) -> PostStatus {
        match self {
            Self::SubmitReview => PostStatus::Review,
            Self::Approve => PostStatus::Published,
            Self::Reject => PostStatus::Rejected,
            Self::Archive => PostStatus::Archived,
            Self::Publish => PostStatus::Published,
        }
    }

    /// Whether this action makes the post publicly visible, which stamps
    /// `published_at`.
    pub fn publishes(&self) -> bool {
        self.target() == PostStatus::Published
    }

    /// Check legality against the current status and return the target
    /// state, or a validation error naming the required source state(s).
    pub fn apply(&self, current: PostStatus) -> Result<PostStatus, AppError> {
        if self.allowed_from().contains(&current) {
            return Ok(self.target());
        }
        let required: Vec<&str> = self.allowed_from().iter().map(|s| s.as_str()).collect();
        Err(AppError::validation(format!(
            "Cannot {self} a {current} post; requires status {}",
            required.join(" or ")
        )))
    }
}

impl fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SubmitReview => "submit-review",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Archive => "archive",
            Self::Publish => "publish",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [PostStatus; 5] = [
        PostStatus::Draft,
        PostStatus::Review,
        PostStatus::Published,
        PostStatus::Rejected,
        PostStatus::Archived,
    ];

    const ALL_ACTIONS: [WorkflowAction; 5] = [
        WorkflowAction::SubmitReview,
        WorkflowAction::Approve,
        WorkflowAction::Reject,
        WorkflowAction::Archive,
        WorkflowAction::Publish,
    ];

    /// The legal transition table, exactly as specified.
    fn is_legal(from: PostStatus, action: WorkflowAction) -> bool {
        matches!(
            (from, action),
            (PostStatus::Draft, WorkflowAction::SubmitReview)
                | (PostStatus::Review, WorkflowAction::Approve)
                | (PostStatus::Review, WorkflowAction::Reject)
                | (PostStatus::Published, WorkflowAction::Archive)
                | (PostStatus::Rejected, WorkflowAction::Archive)
                | (PostStatus::Draft, WorkflowAction::Publish)
                | (PostStatus::Review, WorkflowAction::Publish)
        )
    }

    #[test]
    fn test_every_pair_matches_the_table() {
        for from in ALL_STATUSES {
            for action in ALL_ACTIONS {
                let result = action.apply(from);
                if is_legal(from, action) {
                    assert_eq!(result.unwrap(), action.target(), "{from} -> {action}");
                } else {
                    assert!(result.is_err(), "{from} -> {action} should be illegal");
                }
            }
        }
    }

    #[test]
    fn test_illegal_transition_names_required_state() {
        let err = WorkflowAction::Approve.apply(PostStatus::Draft).unwrap_err();
        assert!(err.message.contains("review"));

        let err = WorkflowAction::Archive.apply(PostStatus::Draft).unwrap_err();
        assert!(err.message.contains("published or rejected"));
    }

    #[test]
    fn test_publish_edges_stamp_published_at() {
        assert!(WorkflowAction::Approve.publishes());
        assert!(WorkflowAction::Publish.publishes());
        assert!(!WorkflowAction::SubmitReview.publishes());
        assert!(!WorkflowAction::Reject.publishes());
        assert!(!WorkflowAction::Archive.publishes());
    }
}
