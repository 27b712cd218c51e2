pub mod password;

pub use password::{PasswordCodec, PasswordError};
