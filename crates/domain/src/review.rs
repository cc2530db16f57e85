//! Review: a user's text review of a point of sale, subject to peer approval.

use serde::{Deserialize, Serialize};

use crate::approval::ApprovalConfig;
use crate::entity::Identifiable;
use crate::error::{CoffeeError, ValidationError};
use crate::id::{PosId, ReviewId, UserId};

/// A review of a point of sale. At most one per `(pos_id, author_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Option<ReviewId>,
    pub pos_id: PosId,
    pub author_id: UserId,
    pub review: String,
    pub approval_count: u32,
    pub approved: bool,
}

impl Identifiable for Review {
    type Id = ReviewId;
    const NAME: &'static str = "Review";

    fn id(&self) -> Option<ReviewId> {
        self.id
    }
}

impl Review {
    /// Create a builder for constructing a [`Review`].
    #[must_use]
    pub fn builder(pos_id: PosId, author_id: UserId) -> ReviewBuilder {
        ReviewBuilder {
            id: None,
            pos_id,
            author_id,
            review: None,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoffeeError::Validation`] when the review text is blank.
    pub fn validate(&self) -> Result<(), CoffeeError> {
        if self.review.trim().is_empty() {
            return Err(ValidationError::EmptyField("review").into());
        }
        Ok(())
    }

    /// Record one approval by `approver`.
    ///
    /// `approved` becomes `true` once the count reaches
    /// [`ApprovalConfig::min_count`] and stays so.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SelfApproval`] when `approver` wrote this
    /// review.
    pub fn approve(
        &mut self,
        approver: UserId,
        config: &ApprovalConfig,
    ) -> Result<(), ValidationError> {
        if approver == self.author_id {
            return Err(ValidationError::SelfApproval);
        }
        self.approval_count = self.approval_count.saturating_add(1);
        self.approved = config.is_approved(self.approval_count);
        Ok(())
    }
}

/// Step-by-step builder for [`Review`].
#[derive(Debug)]
pub struct ReviewBuilder {
    id: Option<ReviewId>,
    pos_id: PosId,
    author_id: UserId,
    review: Option<String>,
}

impl ReviewBuilder {
    #[must_use]
    pub fn id(mut self, id: ReviewId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn review(mut self, review: impl Into<String>) -> Self {
        self.review = Some(review.into());
        self
    }

    /// Consume the builder, validate, and return an unapproved [`Review`].
    ///
    /// # Errors
    ///
    /// Returns [`CoffeeError::Validation`] if the review text is missing.
    pub fn build(self) -> Result<Review, CoffeeError> {
        let review = Review {
            id: self.id,
            pos_id: self.pos_id,
            author_id: self.author_id,
            review: self.review.unwrap_or_default(),
            approval_count: 0,
            approved: false,
        };
        review.validate()?;
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review() -> Review {
        Review::builder(PosId::new(1), UserId::new(1))
            .review("Great coffee")
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_unapproved_review() {
        let review = review();
        assert!(review.id().is_none());
        assert_eq!(review.approval_count, 0);
        assert!(!review.approved);
    }

    #[test]
    fn should_reject_blank_review_text() {
        let result = Review::builder(PosId::new(1), UserId::new(1))
            .review("   ")
            .build();
        assert!(matches!(
            result,
            Err(CoffeeError::Validation(ValidationError::EmptyField("review")))
        ));
    }

    #[test]
    fn should_reject_self_approval() {
        let mut review = review();
        let config = ApprovalConfig::new(1).unwrap();
        let result = review.approve(UserId::new(1), &config);
        assert_eq!(result, Err(ValidationError::SelfApproval));
        assert_eq!(review.approval_count, 0);
    }

    #[test]
    fn should_become_approved_when_count_reaches_minimum() {
        let mut review = review();
        let config = ApprovalConfig::new(2).unwrap();

        review.approve(UserId::new(2), &config).unwrap();
        assert_eq!(review.approval_count, 1);
        assert!(!review.approved);

        review.approve(UserId::new(3), &config).unwrap();
        assert_eq!(review.approval_count, 2);
        assert!(review.approved);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let mut review = review();
        review.id = Some(ReviewId::new(42));
        let json = serde_json::to_string(&review).unwrap();
        let parsed: Review = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, review);
    }
}
