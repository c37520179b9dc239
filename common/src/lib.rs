//! cane-scan Common Library
//!
//! CLIとWeb(WASM)で共有される型とアップロードセッション

pub mod types;
pub mod report;
pub mod error;
pub mod response;
pub mod session;

pub use types::{DetectionResult, UNKNOWN_SENTINEL};
pub use report::DetectionReport;
pub use error::{DetectError, FailureKind, Result};
pub use response::{extract_reason, interpret_response};
pub use session::{Submission, SubmitTicket, UploadSession};

/// 検出APIの既定エンドポイント
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/detect";

/// multipartフォームの画像フィールド名（バックエンドの `request.files["image"]` と一致させる）
pub const IMAGE_FIELD: &str = "image";
