use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::{PostgresPersistence, map_insert_error},
    app_error::{AppError, AppResult},
    application::use_cases::contacts::{
        CONTACT_DUPLICATE_MESSAGE, ContactRepo, NewContactSubmission,
    },
    domain::entities::contact::ContactSubmission,
};

fn row_to_submission(row: sqlx::postgres::PgRow) -> ContactSubmission {
    ContactSubmission {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        phone: row.get("phone"),
        organization: row.get("organization"),
        website_url: row.get("website_url"),
        interests: row.get("interests"),
        message: row.get("message"),
        receive_updates: row.get("receive_updates"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl ContactRepo for PostgresPersistence {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<ContactSubmission>> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, email, phone, organization, website_url, interests, message, receive_updates, created_at FROM contact_submissions WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(row.map(row_to_submission))
    }

    async fn insert(&self, submission: &NewContactSubmission) -> AppResult<ContactSubmission> {
        let id = Uuid::new_v4();
        let row = sqlx::query(
            r#"
            INSERT INTO contact_submissions
                (id, first_name, last_name, email, phone, organization, website_url, interests, message, receive_updates)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, first_name, last_name, email, phone, organization, website_url, interests, message, receive_updates, created_at
            "#,
        )
        .bind(id)
        .bind(&submission.first_name)
        .bind(&submission.last_name)
        .bind(&submission.email)
        .bind(&submission.phone)
        .bind(&submission.organization)
        .bind(&submission.website_url)
        .bind(&submission.interests)
        .bind(&submission.message)
        .bind(submission.receive_updates)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_insert_error(err, CONTACT_DUPLICATE_MESSAGE))?;
        Ok(row_to_submission(row))
    }

    async fn list_newest_first(&self) -> AppResult<Vec<ContactSubmission>> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, email, phone, organization, website_url, interests, message, receive_updates, created_at FROM contact_submissions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(rows.into_iter().map(row_to_submission).collect())
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(count)
    }
}
