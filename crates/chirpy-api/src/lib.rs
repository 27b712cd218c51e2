pub mod admin;
pub mod chirps;
pub mod error;
pub mod health;
pub mod metrics;
pub mod moderation;
pub mod router;
pub mod state;
pub mod users;

pub use router::router;
pub use state::{AppState, AppStateInner};
