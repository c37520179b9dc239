//! CLI版のアップロード操作
//!
//! `UploadSession` を端末から操作する。プレビューは画像パス。

use crate::client::{DetectClient, RawResponse};
use crate::error::Result;
use crate::scanner::{load_image, SelectedImage};
use cane_scan_common::{interpret_response, DetectionReport, Submission, UploadSession};
use std::path::{Path, PathBuf};

pub type CliSession = UploadSession<SelectedImage, PathBuf>;

/// 画像を選択する（存在しなければ選択状態は変わらない）
pub fn select(session: &mut CliSession, path: &Path) -> Result<()> {
    let image = load_image(path)?;
    if image.is_none() {
        log::warn!("画像が見つかりません: {}", path.display());
    }

    if let Some(previous) = session.select(image, |image| image.path.clone()) {
        log::debug!("プレビュー差し替え: {}", previous.display());
    }
    Ok(())
}

/// 選択中の画像を送信し、表示結果を返す
pub async fn submit(session: &mut CliSession, client: &DetectClient) -> Result<DetectionReport> {
    let Submission { ticket, file } = session.begin_submit()?;
    let outcome = client.detect(&file).await;
    let report = session.complete(ticket, outcome)?;
    Ok(report.clone())
}

/// 選択中の画像を送信し、解釈前のレスポンスを返す
///
/// 2xx以外や不正な本文もそのまま返す。通信自体の失敗のみエラー。
pub async fn submit_raw(session: &mut CliSession, client: &DetectClient) -> Result<RawResponse> {
    let Submission { ticket, file } = session.begin_submit()?;
    let raw = match client.send_raw(&file).await {
        Ok(raw) => raw,
        Err(e) => {
            // 送信中状態を解除するだけ（エラーはeと同じ）
            session.complete(ticket, Err(e.clone())).ok();
            return Err(e.into());
        }
    };

    let outcome = interpret_response(raw.status, &raw.body);
    if let Err(e) = session.complete(ticket, outcome) {
        log::debug!("{}", e);
    }
    Ok(raw)
}
