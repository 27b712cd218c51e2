//! Database row types. These map directly to SQLite rows; ids and
//! timestamps stay as text until converted into chirpy-types models.
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use chirpy_types::models::{Chirp, User};

pub struct UserRow {
    pub id: String,
    pub email: String,
    pub hashed_password: String,
    pub created_at: String,
    pub updated_at: String,
}

pub struct ChirpRow {
    pub id: String,
    pub body: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<UserRow> for User {
    type Error = anyhow::Error;

    fn try_from(row: UserRow) -> Result<Self> {
        Ok(User {
            id: parse_id(&row.id)?,
            email: row.email,
            hashed_password: row.hashed_password,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

impl TryFrom<ChirpRow> for Chirp {
    type Error = anyhow::Error;

    fn try_from(row: ChirpRow) -> Result<Self> {
        Ok(Chirp {
            id: parse_id(&row.id)?,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
            body: row.body,
            user_id: parse_id(&row.user_id)?,
        })
    }
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let ts = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("corrupt timestamp '{}'", raw))?;
    Ok(ts.with_timezone(&Utc))
}

fn parse_id(raw: &str) -> Result<Uuid> {
    raw.parse().with_context(|| format!("corrupt id '{}'", raw))
}
