//! メインアプリケーションコンポーネント
//!
//! 画面全体で1つの `UploadSession` を持ち、表示用シグナルはそこから同期する。

use gloo::file::ObjectUrl;
use leptos::prelude::*;
use web_sys::File;
use cane_scan_common::{DetectionReport, Submission, UploadSession};
use crate::api::detect::post_image;
use crate::components::{
    header::Header,
    upload_area::UploadArea,
    detect_button::DetectButton,
    result_popup::ResultPopup,
};
use crate::config;

/// ブラウザ版のセッション（プレビューはObject URL、dropで解放される）
pub type BrowserSession = UploadSession<File, ObjectUrl>;

fn create_preview(file: &File) -> ObjectUrl {
    ObjectUrl::from(gloo::file::File::from(file.clone()))
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = StoredValue::new_local(BrowserSession::new());

    // 表示用の状態
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (popup_visible, set_popup_visible) = signal(false);
    let (is_busy, set_is_busy) = signal(false);
    let (report, set_report) = signal(DetectionReport::default());

    let sync = move || {
        session.with_value(|s| {
            set_preview_url.set(s.preview().map(|url| String::from(&**url)));
            set_popup_visible.set(s.is_popup_visible());
            set_is_busy.set(s.is_busy());
            set_report.set(s.report().clone());
        });
    };

    // ファイル選択ハンドラ
    let on_file_selected = move |file: Option<File>| {
        session.update_value(|s| {
            // 差し替えられた古いObject URLはここでdropされrevokeされる
            drop(s.select(file, create_preview));
        });
        sync();
    };

    // 送信ハンドラ
    let on_detect = move |_: ()| {
        let mut started = None;
        session.update_value(|s| started = Some(s.begin_submit()));

        let Submission { ticket, file } = match started {
            Some(Ok(submission)) => submission,
            Some(Err(e)) => {
                gloo::dialogs::alert(&e.to_string());
                return;
            }
            None => return,
        };
        sync();

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = post_image(config::endpoint(), &file).await;

            let mut failure = None;
            session.update_value(|s| {
                if let Err(e) = s.complete(ticket, outcome) {
                    failure = Some(e);
                }
            });
            sync();

            if let Some(e) = failure {
                gloo::dialogs::alert(&e.to_string());
            }
        });
    };

    // ポップアップを閉じる
    let on_close = move |_: ()| {
        session.update_value(|s| s.close_popup());
        sync();
    };

    on_cleanup(move || {
        session.update_value(|s| {
            drop(std::mem::take(s).teardown());
        });
    });

    view! {
        <div class="container">
            <Header />

            <UploadArea preview_url=preview_url on_file_selected=on_file_selected />

            <DetectButton is_busy=is_busy on_detect=on_detect />

            <Show when=move || popup_visible.get()>
                <ResultPopup report=report on_close=on_close />
            </Show>
        </div>
    }
}
