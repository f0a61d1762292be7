//! Google OAuth Token
//!
//! ローカルに保存された OAuth トークンの読み込みと更新
//!
//! トークンファイルは `access_token`, `refresh_token`, `client_id`,
//! `client_secret`, `token_uri`, `expiry` を持つ JSON。期限切れで
//! refresh_token がある場合のみ1回だけ更新し、同じパスに書き戻す。

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::adapter::http;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// 認証エラー
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Google Drive token not found at {}", .0.display())]
    CredentialNotFound(PathBuf),

    #[error("Invalid token file {}: {reason}", path.display())]
    InvalidCredential { path: PathBuf, reason: String },

    #[error("Token file has no access token and no refresh token")]
    MissingAccessToken,

    #[error("Failed to refresh access token: {0}")]
    RefreshFailed(String),
}

/// 保存されたトークン
///
/// 知らないフィールドは `extra` に保持し、書き戻すときにそのまま残す
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StoredToken {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
    /// RFC 3339。読めない形式なら期限不明として扱う
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StoredToken {
    fn expiry_time(&self) -> Option<DateTime<Utc>> {
        self.expiry
            .as_deref()
            .and_then(|expiry| DateTime::parse_from_rfc3339(expiry).ok())
            .map(|expiry| expiry.with_timezone(&Utc))
    }

    fn has_access_token(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }

    /// アクセストークンが期限切れ（または存在しない）かどうか
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        if !self.has_access_token() {
            return true;
        }
        matches!(self.expiry_time(), Some(expiry) if expiry <= now)
    }

    /// 更新が必要で、かつ更新できるかどうか
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.is_expired(now)
            && self
                .refresh_token
                .as_deref()
                .is_some_and(|token| !token.is_empty())
    }

    pub fn token_uri(&self) -> &str {
        self.token_uri.as_deref().unwrap_or(DEFAULT_TOKEN_URI)
    }
}

/// トークンエンドポイントの応答
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RefreshedToken {
    pub access_token: String,
    /// 有効期間（秒）
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Trait for the OAuth refresh_token grant
/// This enables mocking in tests while using the real endpoint in production
#[cfg_attr(test, automock)]
pub trait TokenRefresher: Send + Sync {
    fn refresh(
        &self,
        token_uri: &str,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> Result<RefreshedToken>;
}

/// ureq によるトークン更新
pub struct UreqTokenRefresher {
    agent: ureq::Agent,
}

impl UreqTokenRefresher {
    pub fn new() -> Self {
        Self {
            agent: http::agent(),
        }
    }
}

impl Default for UreqTokenRefresher {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenRefresher for UreqTokenRefresher {
    fn refresh(
        &self,
        token_uri: &str,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> Result<RefreshedToken> {
        let response = self
            .agent
            .post(token_uri)
            .send_form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .map_err(http::describe_error)?;

        response
            .into_json::<RefreshedToken>()
            .context("Failed to parse token endpoint response")
    }
}

/// トークンファイルを読み込む
pub fn load_token(path: &Path) -> Result<StoredToken> {
    if !path.exists() {
        return Err(AuthError::CredentialNotFound(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read token file: {}", path.display()))?;

    serde_json::from_str(&content).map_err(|e| {
        AuthError::InvalidCredential {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// トークンファイルを書き戻す
pub fn save_token(path: &Path, token: &StoredToken) -> Result<()> {
    let json = serde_json::to_string(token).context("Failed to serialize token")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write token file: {}", path.display()))
}

/// 有効なアクセストークンを取得する
///
/// 期限切れで refresh_token があれば1回だけ更新し、更新後のトークンを同じパスに保存する。
/// 再試行はしない
///
/// # Errors
///
/// - トークンファイルが無い: [`AuthError::CredentialNotFound`]
/// - JSON として読めない: [`AuthError::InvalidCredential`]
/// - 更新に失敗: [`AuthError::RefreshFailed`]
/// - アクセストークンが得られない: [`AuthError::MissingAccessToken`]
pub fn authorize_with(
    path: &Path,
    refresher: &dyn TokenRefresher,
    now: DateTime<Utc>,
) -> Result<String> {
    let mut token = load_token(path)?;

    if token.needs_refresh(now) {
        info!("Access token expired, refreshing");
        let refreshed = refresher
            .refresh(
                token.token_uri(),
                token.client_id.as_deref().unwrap_or_default(),
                token.client_secret.as_deref().unwrap_or_default(),
                token.refresh_token.as_deref().unwrap_or_default(),
            )
            .map_err(|e| AuthError::RefreshFailed(format!("{:#}", e)))?;

        token.access_token = Some(refreshed.access_token);
        token.expiry = refreshed
            .expires_in
            .map(|seconds| (now + Duration::seconds(seconds)).to_rfc3339());

        save_token(path, &token)?;
        info!("Saved refreshed token to {}", path.display());
    }

    match token.access_token {
        Some(access_token) if !access_token.is_empty() => Ok(access_token),
        _ => Err(AuthError::MissingAccessToken.into()),
    }
}

/// 有効なアクセストークンを取得する（本番用のトークン更新を使う）
pub async fn authorize(path: &Path) -> Result<String> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || {
        authorize_with(&path, &UreqTokenRefresher::new(), Utc::now())
    })
    .await
    .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn write_token(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("token.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_missing_token_file() {
        let refresher = MockTokenRefresher::new();
        let result = authorize_with(Path::new("/nonexistent/token.json"), &refresher, now());

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuthError>(),
            Some(AuthError::CredentialNotFound(_))
        ));
        assert!(err.to_string().contains("/nonexistent/token.json"));
    }

    #[test]
    fn test_invalid_token_file() {
        let dir = TempDir::new().unwrap();
        let path = write_token(&dir, "not json");
        let refresher = MockTokenRefresher::new();

        let err = authorize_with(&path, &refresher, now()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuthError>(),
            Some(AuthError::InvalidCredential { .. })
        ));
    }

    #[test]
    fn test_valid_token_is_not_refreshed() {
        let dir = TempDir::new().unwrap();
        let json = r#"{"access_token":"ya29.valid","refresh_token":"1//r","client_id":"cid","client_secret":"secret","expiry":"2025-06-01T13:00:00Z"}"#;
        let path = write_token(&dir, json);
        let mut refresher = MockTokenRefresher::new();
        refresher.expect_refresh().never();

        let access_token = authorize_with(&path, &refresher, now()).unwrap();

        assert_eq!(access_token, "ya29.valid");
        assert_eq!(fs::read_to_string(&path).unwrap(), json);
    }

    #[test]
    fn test_token_without_expiry_is_used_as_is() {
        let dir = TempDir::new().unwrap();
        let path = write_token(&dir, r#"{"access_token":"ya29.noexpiry","refresh_token":"1//r"}"#);
        let mut refresher = MockTokenRefresher::new();
        refresher.expect_refresh().never();

        assert_eq!(
            authorize_with(&path, &refresher, now()).unwrap(),
            "ya29.noexpiry"
        );
    }

    #[test]
    fn test_expired_token_is_refreshed_and_saved() {
        let dir = TempDir::new().unwrap();
        let path = write_token(
            &dir,
            r#"{"access_token":"ya29.old","refresh_token":"1//r","client_id":"cid","client_secret":"secret","expiry":"2025-06-01T11:00:00Z","scopes":["drive"]}"#,
        );

        let mut refresher = MockTokenRefresher::new();
        refresher
            .expect_refresh()
            .withf(|uri, client_id, client_secret, refresh_token| {
                uri == DEFAULT_TOKEN_URI
                    && client_id == "cid"
                    && client_secret == "secret"
                    && refresh_token == "1//r"
            })
            .times(1)
            .returning(|_, _, _, _| {
                Ok(RefreshedToken {
                    access_token: "ya29.new".to_string(),
                    expires_in: Some(3600),
                })
            });

        let access_token = authorize_with(&path, &refresher, now()).unwrap();
        assert_eq!(access_token, "ya29.new");

        let saved = load_token(&path).unwrap();
        assert_eq!(saved.access_token.as_deref(), Some("ya29.new"));
        assert_eq!(saved.refresh_token.as_deref(), Some("1//r"));
        assert_eq!(saved.expiry_time(), Some(now() + Duration::seconds(3600)));
        assert_eq!(saved.extra.get("scopes"), Some(&serde_json::json!(["drive"])));
    }

    #[test]
    fn test_expired_token_without_refresh_token_is_used_as_is() {
        let dir = TempDir::new().unwrap();
        let path = write_token(
            &dir,
            r#"{"access_token":"ya29.old","expiry":"2025-06-01T11:00:00Z"}"#,
        );
        let mut refresher = MockTokenRefresher::new();
        refresher.expect_refresh().never();

        assert_eq!(authorize_with(&path, &refresher, now()).unwrap(), "ya29.old");
    }

    #[test]
    fn test_refresh_failure() {
        let dir = TempDir::new().unwrap();
        let path = write_token(
            &dir,
            r#"{"access_token":"ya29.old","refresh_token":"1//r","expiry":"2025-06-01T11:00:00Z"}"#,
        );
        let mut refresher = MockTokenRefresher::new();
        refresher
            .expect_refresh()
            .times(1)
            .returning(|_, _, _, _| anyhow::bail!("HTTP 400: invalid_grant"));

        let err = authorize_with(&path, &refresher, now()).unwrap_err();
        match err.downcast_ref::<AuthError>() {
            Some(AuthError::RefreshFailed(reason)) => assert!(reason.contains("invalid_grant")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_access_token_and_refresh_token() {
        let dir = TempDir::new().unwrap();
        let path = write_token(&dir, r#"{"client_id":"cid"}"#);
        let refresher = MockTokenRefresher::new();

        let err = authorize_with(&path, &refresher, now()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuthError>(),
            Some(AuthError::MissingAccessToken)
        ));
    }

    #[test]
    fn test_is_expired() {
        let mut token = StoredToken {
            access_token: Some("ya29".to_string()),
            expiry: Some("2025-06-01T12:00:00+00:00".to_string()),
            ..Default::default()
        };
        assert!(token.is_expired(now()));

        token.expiry = Some("2025-06-01T12:00:01Z".to_string());
        assert!(!token.is_expired(now()));

        token.expiry = Some("not a date".to_string());
        assert!(!token.is_expired(now()));

        token.access_token = None;
        assert!(token.is_expired(now()));
    }

    #[test]
    fn test_token_uri_default() {
        let token = StoredToken::default();
        assert_eq!(token.token_uri(), DEFAULT_TOKEN_URI);
    }
}
