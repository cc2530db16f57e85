//! `SQLite` implementation of [`CrudRepository`] for [`Review`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use campuscoffee_app::ports::CrudRepository;
use campuscoffee_domain::entity::Identifiable;
use campuscoffee_domain::error::{CoffeeError, NotFoundError};
use campuscoffee_domain::id::{PosId, ReviewId, UserId};
use campuscoffee_domain::review::Review;
use campuscoffee_domain::user::User;

use crate::error::{StorageError, write_error};

/// Wrapper for converting database rows into domain [`Review`].
struct Wrapper(Review);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let approval_count: i64 = row.try_get("approval_count")?;
        let approval_count =
            u32::try_from(approval_count).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Review {
            id: Some(ReviewId::new(row.try_get("id")?)),
            pos_id: PosId::new(row.try_get("pos_id")?),
            author_id: UserId::new(row.try_get("author_id")?),
            review: row.try_get("review")?,
            approval_count,
            approved: row.try_get("approved")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO reviews (pos_id, author_id, review, approval_count, approved) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reviews ORDER BY id";
const UPDATE: &str = "UPDATE reviews SET pos_id = ?, author_id = ?, review = ?, approval_count = ?, approved = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";
const DELETE_ALL: &str = "DELETE FROM reviews";

/// A write referencing a missing author surfaces as a missing [`User`].
fn map_write_error(err: sqlx::Error, review: &Review) -> CoffeeError {
    if let sqlx::Error::Database(db) = &err
        && db.is_foreign_key_violation()
    {
        return NotFoundError::by_id(User::NAME, review.author_id).into();
    }
    write_error(err, Review::NAME, |field| match field {
        "pos_id, author_id" => format!("{}, {}", review.pos_id, review.author_id),
        _ => String::new(),
    })
}

/// `SQLite`-backed review repository.
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CrudRepository<Review> for SqliteReviewRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, CoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(&self, id: ReviewId) -> impl Future<Output = Result<Review, CoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            row.map(|w| w.0)
                .ok_or_else(|| NotFoundError::by_id(Review::NAME, id).into())
        }
    }

    fn upsert(&self, mut review: Review) -> impl Future<Output = Result<Review, CoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            match review.id {
                None => {
                    let result = sqlx::query(INSERT)
                        .bind(review.pos_id.get())
                        .bind(review.author_id.get())
                        .bind(&review.review)
                        .bind(i64::from(review.approval_count))
                        .bind(review.approved)
                        .execute(&pool)
                        .await
                        .map_err(|err| map_write_error(err, &review))?;
                    review.id = Some(ReviewId::new(result.last_insert_rowid()));
                }
                Some(id) => {
                    let result = sqlx::query(UPDATE)
                        .bind(review.pos_id.get())
                        .bind(review.author_id.get())
                        .bind(&review.review)
                        .bind(i64::from(review.approval_count))
                        .bind(review.approved)
                        .bind(id.get())
                        .execute(&pool)
                        .await
                        .map_err(|err| map_write_error(err, &review))?;
                    if result.rows_affected() == 0 {
                        return Err(NotFoundError::by_id(Review::NAME, id).into());
                    }
                }
            }
            Ok(review)
        }
    }

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), CoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::by_id(Review::NAME, id).into());
            }
            Ok(())
        }
    }

    fn clear(&self) -> impl Future<Output = Result<(), CoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_ALL)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use crate::user_repo::SqliteUserRepository;

    struct Fixture {
        reviews: SqliteReviewRepository,
        users: SqliteUserRepository,
    }

    async fn setup() -> Fixture {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        Fixture {
            reviews: SqliteReviewRepository::new(db.pool().clone()),
            users: SqliteUserRepository::new(db.pool().clone()),
        }
    }

    impl Fixture {
        async fn author(&self, login_name: &str) -> UserId {
            let user = User::builder()
                .login_name(login_name)
                .email_address(format!("{login_name}@uni-heidelberg.de"))
                .build()
                .unwrap();
            self.users.upsert(user).await.unwrap().id.unwrap()
        }
    }

    fn test_review(pos: i64, author_id: UserId, text: &str) -> Review {
        Review::builder(PosId::new(pos), author_id)
            .review(text)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_assign_id_and_keep_fields_when_inserting() {
        let fx = setup().await;
        let author = fx.author("jane").await;

        let created = fx
            .reviews
            .upsert(test_review(1, author, "Great coffee"))
            .await
            .unwrap();

        assert!(created.id.is_some());
        assert_eq!(created.review, "Great coffee");
        let fetched = fx.reviews.get_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_roundtrip_approval_state() {
        let fx = setup().await;
        let author = fx.author("jane").await;
        let mut review = fx
            .reviews
            .upsert(test_review(1, author, "Great coffee"))
            .await
            .unwrap();

        review.approval_count = 3;
        review.approved = true;
        fx.reviews.upsert(review.clone()).await.unwrap();

        let fetched = fx.reviews.get_by_id(review.id.unwrap()).await.unwrap();
        assert_eq!(fetched.approval_count, 3);
        assert!(fetched.approved);
    }

    #[tokio::test]
    async fn should_return_not_found_when_review_missing() {
        let fx = setup().await;
        let result = fx.reviews.get_by_id(ReviewId::new(102)).await;
        assert!(matches!(
            result,
            Err(CoffeeError::NotFound(NotFoundError { entity: "Review", .. }))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_review() {
        let fx = setup().await;
        let author = fx.author("jane").await;
        let mut review = test_review(1, author, "x");
        review.id = Some(ReviewId::new(102));

        let result = fx.reviews.upsert(review).await;

        assert!(matches!(result, Err(CoffeeError::NotFound(_))));
        assert!(fx.reviews.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_duplicate_review_of_same_pos() {
        let fx = setup().await;
        let author = fx.author("jane").await;
        fx.reviews
            .upsert(test_review(1, author, "Great coffee"))
            .await
            .unwrap();

        let result = fx.reviews.upsert(test_review(1, author, "Again")).await;

        let err = match result {
            Err(CoffeeError::Duplication(err)) => err,
            other => panic!("expected duplication error, got {other:?}"),
        };
        assert_eq!(err.entity, "Review");
        assert_eq!(err.field, "pos_id, author_id");
        assert_eq!(err.value, format!("1, {author}"));
    }

    #[tokio::test]
    async fn should_report_missing_author_as_not_found_user() {
        let fx = setup().await;

        let result = fx
            .reviews
            .upsert(test_review(1, UserId::new(99), "Great coffee"))
            .await;

        assert!(matches!(
            result,
            Err(CoffeeError::NotFound(NotFoundError { entity: "User", .. }))
        ));
    }

    #[tokio::test]
    async fn should_list_reviews_in_id_order() {
        let fx = setup().await;
        let jane = fx.author("jane").await;
        let john = fx.author("john").await;
        fx.reviews.upsert(test_review(1, jane, "first")).await.unwrap();
        fx.reviews.upsert(test_review(1, john, "second")).await.unwrap();

        let all = fx.reviews.get_all().await.unwrap();
        let texts: Vec<&str> = all.iter().map(|r| r.review.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn should_delete_review_when_exists() {
        let fx = setup().await;
        let author = fx.author("jane").await;
        let id = fx
            .reviews
            .upsert(test_review(1, author, "x"))
            .await
            .unwrap()
            .id
            .unwrap();

        fx.reviews.delete(id).await.unwrap();

        assert!(matches!(
            fx.reviews.delete(id).await,
            Err(CoffeeError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_remove_reviews_when_author_is_deleted() {
        let fx = setup().await;
        let author = fx.author("jane").await;
        fx.reviews.upsert(test_review(1, author, "x")).await.unwrap();

        fx.users.delete(author).await.unwrap();

        assert!(fx.reviews.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_clear_all_reviews() {
        let fx = setup().await;
        let author = fx.author("jane").await;
        fx.reviews.upsert(test_review(1, author, "x")).await.unwrap();
        fx.reviews.upsert(test_review(2, author, "y")).await.unwrap();

        fx.reviews.clear().await.unwrap();

        assert!(fx.reviews.get_all().await.unwrap().is_empty());
        assert_eq!(fx.users.get_all().await.unwrap().len(), 1);
    }
}
