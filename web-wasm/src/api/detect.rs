//! 検出API連携
//!
//! FormData（フィールド名 `image`）で画像を1回POSTし、レスポンスを解釈する。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use cane_scan_common::{interpret_response, DetectError, DetectionResult, IMAGE_FIELD};

/// fetch呼び出し（ステータスと本文テキストを返す）
async fn fetch_detect(endpoint: &str, file: &File) -> Result<(u16, String), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())?;
    let body: &JsValue = &form;

    // Content-Typeはブラウザがboundary付きで設定する
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(body));

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// 画像を送信して検出結果を返す
///
/// # Returns
/// * `Err(DetectError::Transport)` - fetch自体の失敗（接続不可など）
/// * `Err(DetectError::Http)` - 2xx以外
/// * `Err(DetectError::MalformedResponse)` - 本文がJSONオブジェクトでない
pub async fn post_image(endpoint: &str, file: &File) -> Result<DetectionResult, DetectError> {
    let (status, text) = fetch_detect(endpoint, file).await.map_err(|e| {
        let detail = describe_js_error(&e);
        gloo::console::error!("Fetch failed:", detail.clone());
        DetectError::Transport(detail)
    })?;

    if !(200..300).contains(&status) {
        gloo::console::error!("API error:", text.clone());
    }

    let result = interpret_response(status, &text)?;
    gloo::console::log!("API RESPONSE:", format!("{:?}", result));
    Ok(result)
}

/// JsValueのエラーを表示用文字列にする
pub fn describe_js_error(error: &JsValue) -> String {
    if let Some(message) = error.as_string() {
        return message;
    }
    if let Some(err) = error.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", error)
}
