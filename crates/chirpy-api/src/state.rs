use std::sync::Arc;

use tracing::error;

use chirpy_crypto::PasswordCodec;
use chirpy_db::Database;

use crate::error::ApiError;
use crate::metrics::RequestCounter;

/// Platform value that unlocks destructive admin operations.
pub const DEV_PLATFORM: &str = "dev";

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub passwords: PasswordCodec,
    pub hits: RequestCounter,
    pub platform: String,
}

impl AppStateInner {
    pub fn new(db: Database, passwords: PasswordCodec, platform: impl Into<String>) -> Self {
        Self {
            db,
            passwords,
            hits: RequestCounter::new(),
            platform: platform.into(),
        }
    }

    pub fn is_dev(&self) -> bool {
        self.platform == DEV_PLATFORM
    }
}

/// Run store or hashing work off the async runtime.
pub async fn blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(f).await.map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        anyhow::Error::from(e)
    })?;

    Ok(result?)
}
