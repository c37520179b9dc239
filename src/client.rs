//! 検出APIクライアント
//!
//! 画像を multipart/form-data（フィールド名 `image`）で1回だけPOSTする。
//! リトライはしない。

use crate::error::Result;
use crate::scanner::SelectedImage;
use cane_scan_common::{interpret_response, DetectError, DetectionResult, IMAGE_FIELD};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// 解釈前のレスポンス
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub struct DetectClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DetectClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 画像を送信してステータスと本文を返す
    ///
    /// 接続失敗・タイムアウト・本文の読み取り失敗は `DetectError::Transport`。
    pub async fn send_raw(&self, image: &SelectedImage) -> std::result::Result<RawResponse, DetectError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime_type)
            .map_err(|e| DetectError::Transport(format!("invalid content type: {}", e)))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        log::debug!("POST {} ({}, {} bytes)", self.endpoint, image.file_name, image.bytes.len());

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| transport_error(&e))?;

        Ok(RawResponse { status, body })
    }

    /// 画像を送信して検出結果を返す
    pub async fn detect(&self, image: &SelectedImage) -> std::result::Result<DetectionResult, DetectError> {
        let raw = match self.send_raw(image).await {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Fetch failed: {}", e);
                return Err(e);
            }
        };

        if !(200..300).contains(&raw.status) {
            log::error!("API error ({}): {}", raw.status, raw.body);
        }

        let result = interpret_response(raw.status, &raw.body)?;
        log::debug!("API RESPONSE: {:?}", result);
        Ok(result)
    }
}

fn transport_error(error: &reqwest::Error) -> DetectError {
    let detail = if error.is_timeout() {
        format!("request timed out: {}", error)
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    };
    DetectError::Transport(detail)
}
