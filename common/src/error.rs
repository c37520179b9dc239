//! エラー型定義

use thiserror::Error;

/// 失敗の分類（ユーザー通知の区別に使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// ファイル未選択
    Validation,
    /// 送信中の再送信
    Busy,
    /// バックエンドに到達できない
    Transport,
    /// バックエンドが2xx以外を返した
    Http,
    /// 2xxだが本文がJSONオブジェクトでない
    MalformedResponse,
}

/// 検出リクエストのエラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectError {
    #[error("Please select an image")]
    NoFileSelected,

    #[error("A detection request is already in progress")]
    Busy,

    #[error("Backend not running. Please start the API. ({0})")]
    Transport(String),

    #[error("Image could not be processed (HTTP {status}){}. Try a JPG/PNG image.", reason_suffix(.reason))]
    Http { status: u16, reason: Option<String> },

    #[error("Unexpected response from the detection API: {0}")]
    MalformedResponse(String),
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(": {}", reason.trim_end_matches('.')),
        None => String::new(),
    }
}

impl DetectError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DetectError::NoFileSelected => FailureKind::Validation,
            DetectError::Busy => FailureKind::Busy,
            DetectError::Transport(_) => FailureKind::Transport,
            DetectError::Http { .. } => FailureKind::Http,
            DetectError::MalformedResponse(_) => FailureKind::MalformedResponse,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, DetectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_file() {
        assert_eq!(DetectError::NoFileSelected.to_string(), "Please select an image");
    }

    #[test]
    fn test_error_display_transport() {
        let error = DetectError::Transport("connection refused".to_string());
        let display = error.to_string();
        assert!(display.starts_with("Backend not running. Please start the API."));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_display_http_with_reason() {
        let error = DetectError::Http { status: 400, reason: Some("Invalid image".to_string()) };
        assert_eq!(
            error.to_string(),
            "Image could not be processed (HTTP 400): Invalid image. Try a JPG/PNG image."
        );
    }

    #[test]
    fn test_error_display_http_reason_with_period() {
        let error = DetectError::Http { status: 400, reason: Some("Invalid image.".to_string()) };
        assert_eq!(
            error.to_string(),
            "Image could not be processed (HTTP 400): Invalid image. Try a JPG/PNG image."
        );
    }

    #[test]
    fn test_error_display_http_without_reason() {
        let error = DetectError::Http { status: 500, reason: None };
        assert_eq!(error.to_string(), "Image could not be processed (HTTP 500). Try a JPG/PNG image.");
    }

    #[test]
    fn test_http_message_differs_from_transport() {
        let http = DetectError::Http { status: 502, reason: None }.to_string();
        let transport = DetectError::Transport("timeout".to_string()).to_string();
        assert!(!http.contains("Backend not running"));
        assert_ne!(http, transport);
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(DetectError::NoFileSelected.kind(), FailureKind::Validation);
        assert_eq!(DetectError::Busy.kind(), FailureKind::Busy);
        assert_eq!(DetectError::Transport(String::new()).kind(), FailureKind::Transport);
        assert_eq!(DetectError::Http { status: 404, reason: None }.kind(), FailureKind::Http);
        assert_eq!(
            DetectError::MalformedResponse(String::new()).kind(),
            FailureKind::MalformedResponse
        );
    }

    #[test]
    fn test_error_debug() {
        let error = DetectError::MalformedResponse("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("MalformedResponse"));
        assert!(debug.contains("テスト"));
    }
}
