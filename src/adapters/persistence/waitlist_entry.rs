use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct WaitlistEntryDb {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

impl From<WaitlistEntryDb> for WaitlistEntry {
    fn from(row: WaitlistEntryDb) -> Self {
        WaitlistEntry {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let row = sqlx::query_as::<_, WaitlistEntryDb>(
            "SELECT id, full_name, email, created_at FROM waitlist WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.map(WaitlistEntry::from))
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let row = sqlx::query_as::<_, WaitlistEntryDb>(
            r#"
            INSERT INTO waitlist (id, full_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, email, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&entry.full_name)
        .bind(&entry.email)
        .fetch_one(self.pool())
        .await
        .map_err(|err| match AppError::from(err) {
            // email is the only unique column
            AppError::Conflict(_) => AppError::email_taken(),
            other => other,
        })?;
        Ok(row.into())
    }
}
