//! Authentication Module
//!
//! Google OAuth 認証関連の機能

pub mod oauth_token;

pub use oauth_token::{authorize, AuthError};
