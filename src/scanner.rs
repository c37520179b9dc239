//! 画像ファイルの読み込み
//!
//! 存在チェックのみ行い、中身の検証はバックエンドに任せる。

use crate::error::{CaneScanError, Result};
use std::path::{Path, PathBuf};

/// 送信対象として選択された画像
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

const IMAGE_MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// 画像を読み込む
///
/// ファイルが存在しなければ `Ok(None)`（未選択と同じ扱い）。
pub fn load_image(path: &Path) -> Result<Option<SelectedImage>> {
    if !path.is_file() {
        return Ok(None);
    }

    let bytes = std::fs::read(path)
        .map_err(|e| CaneScanError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Some(SelectedImage {
        path: path.to_path_buf(),
        file_name,
        mime_type: mime_type_for(path),
        bytes,
    }))
}

/// 拡張子からContent-Typeを決める（大文字小文字は区別しない）
pub fn mime_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
        return FALLBACK_MIME_TYPE;
    };

    IMAGE_MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_MIME_TYPE)
}
