use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::{PostgresPersistence, map_insert_error},
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{NewSignup, WAITLIST_DUPLICATE_MESSAGE, WaitlistRepo},
    domain::entities::waitlist::{WaitlistCollection, WaitlistEntry},
};

// Every query filters on the collection slug, so the entry is rebuilt from
// the collection the caller asked for rather than re-parsed from the row.
fn row_to_entry(collection: WaitlistCollection, row: sqlx::postgres::PgRow) -> WaitlistEntry {
    WaitlistEntry {
        id: row.get("id"),
        collection,
        email: row.get("email"),
        name: row.get("name"),
        avatar_url: row.get("avatar_url"),
        is_oauth: row.get("is_oauth"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn find_by_email(
        &self,
        collection: WaitlistCollection,
        email: &str,
    ) -> AppResult<Option<WaitlistEntry>> {
        let row = sqlx::query(
            "SELECT id, email, name, avatar_url, is_oauth, created_at FROM waitlist_entries WHERE collection = $1 AND email = $2",
        )
        .bind(collection.as_ref())
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(row.map(|row| row_to_entry(collection, row)))
    }

    async fn insert(
        &self,
        collection: WaitlistCollection,
        signup: &NewSignup,
    ) -> AppResult<WaitlistEntry> {
        let id = Uuid::new_v4();
        let row = sqlx::query(
            r#"
            INSERT INTO waitlist_entries (id, collection, email, name, avatar_url, is_oauth)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, name, avatar_url, is_oauth, created_at
            "#,
        )
        .bind(id)
        .bind(collection.as_ref())
        .bind(&signup.email)
        .bind(&signup.name)
        .bind(&signup.avatar_url)
        .bind(signup.source.is_oauth())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_insert_error(err, WAITLIST_DUPLICATE_MESSAGE))?;
        Ok(row_to_entry(collection, row))
    }

    async fn list_newest_first(
        &self,
        collection: WaitlistCollection,
    ) -> AppResult<Vec<WaitlistEntry>> {
        let rows = sqlx::query(
            "SELECT id, email, name, avatar_url, is_oauth, created_at FROM waitlist_entries WHERE collection = $1 ORDER BY created_at DESC",
        )
        .bind(collection.as_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(rows
            .into_iter()
            .map(|row| row_to_entry(collection, row))
            .collect())
    }

    async fn count(&self, collection: WaitlistCollection) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM waitlist_entries WHERE collection = $1")
                .bind(collection.as_ref())
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::from)?;
        Ok(count)
    }
}
