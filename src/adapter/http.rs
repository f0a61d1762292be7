//! HTTP helpers
//!
//! ureq の共通処理

use anyhow::anyhow;

/// ureq のエラーを、ステータスとレスポンス本文を含むエラーに変換する
pub fn describe_error(err: ureq::Error) -> anyhow::Error {
    match err {
        ureq::Error::Status(code, response) => {
            let body = response
                .into_string()
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            anyhow!("HTTP {}: {}", code, body.trim())
        }
        ureq::Error::Transport(transport) => anyhow!("HTTP transport error: {}", transport),
    }
}

/// 共通のエージェント
pub fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .user_agent(concat!("feedsync/", env!("CARGO_PKG_VERSION")))
        .build()
}
