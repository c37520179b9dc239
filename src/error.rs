use cane_scan_common::DetectError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaneScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaneScanError>;
