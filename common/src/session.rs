//! アップロードセッション
//!
//! 1画面分の状態（選択ファイル・プレビュー・ポップアップ表示・送信中フラグ・表示結果）を
//! 1つのインスタンスで保持し、3つの操作を公開する:
//! - `select`: ファイル選択（プレビュー差し替え）
//! - `begin_submit` / `complete`: 送信（通信そのものは呼び出し側が行う）
//! - `close_popup`: ポップアップを閉じる
//!
//! `F` は選択ファイル、`P` はプレビューハンドル（ブラウザではObject URL）。

use crate::error::{DetectError, Result};
use crate::report::DetectionReport;
use crate::types::DetectionResult;

/// 送信中リクエストの引換券
///
/// `begin_submit` でのみ発行され、`complete` で消費される。
#[derive(Debug)]
#[must_use = "送信結果は complete() に渡す必要があります"]
pub struct SubmitTicket {
    _private: (),
}

/// 送信開始時に呼び出し側へ渡すもの
#[derive(Debug)]
pub struct Submission<F> {
    pub ticket: SubmitTicket,
    pub file: F,
}

/// 1画面分のアップロード状態
#[derive(Debug)]
pub struct UploadSession<F, P> {
    file: Option<F>,
    preview: Option<P>,
    preview_visible: bool,
    popup_visible: bool,
    in_flight: bool,
    report: DetectionReport,
}

impl<F, P> Default for UploadSession<F, P> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            preview_visible: false,
            popup_visible: false,
            in_flight: false,
            report: DetectionReport::default(),
        }
    }
}

impl<F, P> UploadSession<F, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル選択
    ///
    /// ファイルがあればプレビューを作り直して表示し、差し替えられた古いプレビューを返す
    /// （呼び出し側で解放する）。`None` の場合は何も変更しない。
    pub fn select(&mut self, file: Option<F>, make_preview: impl FnOnce(&F) -> P) -> Option<P> {
        let file = file?;
        let preview = make_preview(&file);
        self.file = Some(file);
        self.preview_visible = true;
        self.preview.replace(preview)
    }

    /// 送信開始
    ///
    /// ファイル未選択なら `NoFileSelected`、送信中なら `Busy`。
    /// どちらの場合も通信を始めてはいけない。
    pub fn begin_submit(&mut self) -> Result<Submission<F>>
    where
        F: Clone,
    {
        let file = self.file.clone().ok_or(DetectError::NoFileSelected)?;
        if self.in_flight {
            return Err(DetectError::Busy);
        }
        self.in_flight = true;
        Ok(Submission {
            ticket: SubmitTicket { _private: () },
            file,
        })
    }

    /// 送信完了
    ///
    /// 成功時は表示結果を更新してポップアップを開く。
    /// 失敗時は表示結果・ポップアップに触れずにエラーを返す。
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<DetectionResult>,
    ) -> Result<&DetectionReport> {
        let SubmitTicket { _private: () } = ticket;
        self.in_flight = false;

        let result = outcome?;
        self.report = DetectionReport::from(&result);
        self.popup_visible = true;
        Ok(&self.report)
    }

    /// ポップアップを閉じる（何度呼んでも同じ）
    pub fn close_popup(&mut self) {
        self.popup_visible = false;
    }

    /// 画面破棄時にプレビューを取り出す
    pub fn teardown(self) -> Option<P> {
        self.preview
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&P> {
        self.preview.as_ref()
    }

    pub fn is_preview_visible(&self) -> bool {
        self.preview_visible
    }

    pub fn is_popup_visible(&self) -> bool {
        self.popup_visible
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn report(&self) -> &DetectionReport {
        &self.report
    }
}
