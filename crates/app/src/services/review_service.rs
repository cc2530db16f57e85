//! Review service: submission and peer approval of reviews.

use campuscoffee_domain::approval::ApprovalConfig;
use campuscoffee_domain::entity::Identifiable;
use campuscoffee_domain::error::{CoffeeError, ValidationError};
use campuscoffee_domain::id::{PosId, ReviewId, UserId};
use campuscoffee_domain::review::Review;
use campuscoffee_domain::user::User;

use crate::ports::CrudRepository;
use crate::services::CrudService;

/// Application service for review use-cases.
///
/// Generic CRUD stays available through [`crud`](Self::crud) and
/// [`users`](Self::users).
pub struct ReviewService<R, U> {
    reviews: CrudService<Review, R>,
    users: CrudService<User, U>,
    approval: ApprovalConfig,
}

impl<R, U> ReviewService<R, U>
where
    R: CrudRepository<Review>,
    U: CrudRepository<User>,
{
    /// Create a new service from its collaborators and approval settings.
    pub fn new(
        reviews: CrudService<Review, R>,
        users: CrudService<User, U>,
        approval: ApprovalConfig,
    ) -> Self {
        Self {
            reviews,
            users,
            approval,
        }
    }

    /// Generic operations on reviews.
    #[must_use]
    pub fn crud(&self) -> &CrudService<Review, R> {
        &self.reviews
    }

    /// Generic operations on users.
    #[must_use]
    pub fn users(&self) -> &CrudService<User, U> {
        &self.users
    }

    /// Approval settings in effect.
    #[must_use]
    pub fn approval(&self) -> ApprovalConfig {
        self.approval
    }

    /// List the reviews of one point of sale.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_by_pos(&self, pos_id: PosId) -> Result<Vec<Review>, CoffeeError> {
        let all = self.reviews.get_all().await?;
        Ok(all
            .into_iter()
            .filter(|review| review.pos_id == pos_id)
            .collect())
    }

    /// Submit a new review. Approval state is reset.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdAlreadySet`] if `review` already has an
    /// id, [`CoffeeError::Validation`] if invariants fail,
    /// [`CoffeeError::NotFound`] if the author does not exist, or
    /// [`CoffeeError::Duplication`] if the author already reviewed this
    /// point of sale.
    pub async fn create(&self, mut review: Review) -> Result<Review, CoffeeError> {
        if review.id().is_some() {
            return Err(ValidationError::IdAlreadySet(Review::NAME).into());
        }
        review.validate()?;
        self.users.get_by_id(review.author_id).await?;

        review.approval_count = 0;
        review.approved = false;
        self.reviews.upsert(review).await
    }

    /// Record an approval of `review_id` by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CoffeeError::NotFound`] if the user or the review does not
    /// exist, or [`ValidationError::SelfApproval`] if the user wrote the
    /// review.
    pub async fn approve(
        &self,
        review_id: ReviewId,
        user_id: UserId,
    ) -> Result<Review, CoffeeError> {
        self.users.get_by_id(user_id).await?;
        let mut review = self.reviews.get_by_id(review_id).await?;

        if let Err(err) = review.approve(user_id, &self.approval) {
            tracing::warn!(%review_id, %user_id, error = %err, "approval rejected");
            return Err(err.into());
        }
        tracing::debug!(
            %review_id,
            %user_id,
            approval_count = review.approval_count,
            approved = review.approved,
            "review approved"
        );
        self.reviews.upsert(review).await
    }
}
