use anyhow::Result;
use chrono::Utc;
use rusqlite::{Connection, Row};
use uuid::Uuid;

use chirpy_types::models::{Chirp, User};

use crate::Database;
use crate::models::{ChirpRow, UserRow, format_timestamp};

const USER_COLUMNS: &str = "id, email, hashed_password, created_at, updated_at";
const CHIRP_COLUMNS: &str = "id, body, user_id, created_at, updated_at";

impl Database {
    // -- Users --

    pub fn create_user(&self, email: &str, hashed_password: &str) -> Result<User> {
        let id = Uuid::new_v4().to_string();
        let now = format_timestamp(Utc::now());

        let row = self.with_conn(|conn| {
            let row = conn.query_row(
                &format!(
                    "INSERT INTO users (id, email, hashed_password, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?4)
                     RETURNING {USER_COLUMNS}"
                ),
                (&id, email, hashed_password, &now),
                user_row,
            )?;
            Ok(row)
        })?;

        row.try_into()
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.with_conn(|conn| query_user(conn, email))?
            .map(User::try_from)
            .transpose()
    }

    /// Deletes every user; their chirps go with them. Returns the number of users removed.
    pub fn delete_all_users(&self) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM users", [])?))
    }

    // -- Chirps --

    pub fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp> {
        let id = Uuid::new_v4().to_string();
        let now = format_timestamp(Utc::now());

        let row = self.with_conn(|conn| {
            let row = conn.query_row(
                &format!(
                    "INSERT INTO chirps (id, body, user_id, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?4)
                     RETURNING {CHIRP_COLUMNS}"
                ),
                (&id, body, user_id.to_string(), &now),
                chirp_row,
            )?;
            Ok(row)
        })?;

        row.try_into()
    }

    /// All chirps, oldest first.
    pub fn get_chirps(&self) -> Result<Vec<Chirp>> {
        let rows = self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {CHIRP_COLUMNS} FROM chirps ORDER BY created_at ASC, rowid ASC"
            ))?;

            let rows = stmt
                .query_map([], chirp_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })?;

        rows.into_iter().map(Chirp::try_from).collect()
    }

    pub fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {CHIRP_COLUMNS} FROM chirps WHERE id = ?1"),
                [id.to_string()],
                chirp_row,
            )
            .optional()
        })?
        .map(Chirp::try_from)
        .transpose()
    }
}

fn query_user(conn: &Connection, email: &str) -> Result<Option<UserRow>> {
    conn.query_row(
        &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1"),
        [email],
        user_row,
    )
    .optional()
}

fn user_row(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        email: row.get(1)?,
        hashed_password: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

fn chirp_row(row: &Row<'_>) -> rusqlite::Result<ChirpRow> {
    Ok(ChirpRow {
        id: row.get(0)?,
        body: row.get(1)?,
        user_id: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
