//! エラー型定義

use thiserror::Error;

/// リモートAPI呼び出しの失敗
///
/// Displayはそのまま画面に出すメッセージになる。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 接続失敗など、レスポンスが得られなかった
    #[error("{0}")]
    Network(String),

    /// 200以外のステータス
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// ボディがJSONとして解釈できない
    #[error("Invalid response: {0}")]
    Parse(String),
}

impl ApiError {
    /// ステータスとボディから生成（`{"error": "..."}` があればそれを使う）
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<crate::types::RemoteErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Request failed".to_string());
        ApiError::Status { status, message }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_shows_message_only() {
        let error = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(error.to_string(), "Failed to fetch");
    }

    #[test]
    fn test_status_error_uses_remote_body() {
        let error = ApiError::from_status(400, r#"{"error": "Missing URL"}"#);
        assert_eq!(
            error,
            ApiError::Status { status: 400, message: "Missing URL".to_string() }
        );
        assert_eq!(error.to_string(), "Missing URL (HTTP 400)");
    }

    #[test]
    fn test_status_error_without_body() {
        let error = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(error.to_string(), "Request failed (HTTP 502)");
    }

    #[test]
    fn test_api_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: ApiError = json_error.into();
        assert!(matches!(error, ApiError::Parse(_)));
        assert!(error.to_string().starts_with("Invalid response"));
    }
}
