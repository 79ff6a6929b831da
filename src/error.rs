use axum::http::StatusCode;
use thiserror::Error;

/// Classified failure for a translation request. Each variant maps to a
/// fixed user-facing status and message; the raw source error is kept for
/// logging and for the development-mode `details` field only.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("DeepSeek API key is not configured")]
    ApiKeyMissing,
    /// Upstream answered with a non-success HTTP status.
    #[error("DeepSeek API returned status {0}")]
    UpstreamStatus(u16),
    /// No HTTP response at all: connection refused, DNS failure, timeout.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{0}")]
    Internal(String),
}

impl TranslateError {
    /// User-facing status code and message. The message strings are the
    /// wire contract; anything else about the failure stays server-side.
    pub fn classify(&self) -> (StatusCode, String) {
        match self {
            TranslateError::UpstreamStatus(401) => {
                (StatusCode::UNAUTHORIZED, "API密钥无效或过期".to_string())
            }
            TranslateError::UpstreamStatus(429) => (
                StatusCode::TOO_MANY_REQUESTS,
                "请求过于频繁，请稍后重试".to_string(),
            ),
            TranslateError::UpstreamStatus(status) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("翻译API错误: {}", status),
            ),
            TranslateError::Network(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "网络连接失败，请检查网络设置".to_string(),
            ),
            TranslateError::ApiKeyMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "API密钥未配置".to_string(),
            ),
            TranslateError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "翻译服务暂时不可用".to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_statuses_map_to_fixed_messages() {
        let (status, message) = TranslateError::UpstreamStatus(401).classify();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "API密钥无效或过期");

        let (status, message) = TranslateError::UpstreamStatus(429).classify();
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(message, "请求过于频繁，请稍后重试");

        let (status, message) = TranslateError::UpstreamStatus(503).classify();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "翻译API错误: 503");
    }

    #[test]
    fn configuration_and_internal_errors_stay_generic() {
        let (status, message) = TranslateError::ApiKeyMissing.classify();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "API密钥未配置");

        let (status, message) =
            TranslateError::Internal("broken payload".to_string()).classify();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "翻译服务暂时不可用");
    }
}
