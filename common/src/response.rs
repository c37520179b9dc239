//! HTTPレスポンスの解釈
//!
//! ステータスと本文テキストから `DetectionResult` を取り出す。
//! ブラウザ版・CLI版の両方がこの関数で失敗を分類する。

use serde_json::Value;

use crate::error::{DetectError, Result};
use crate::types::DetectionResult;

/// エラー理由として表示する最大文字数
const MAX_REASON_CHARS: usize = 200;

/// ステータスコードと本文からレスポンスを解釈
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `body` - レスポンス本文
///
/// # Returns
/// * `Ok(DetectionResult)` - 2xxかつJSONオブジェクト
/// * `Err(DetectError::Http)` - 2xx以外
/// * `Err(DetectError::MalformedResponse)` - 2xxだがJSONオブジェクトでない
pub fn interpret_response(status: u16, body: &str) -> Result<DetectionResult> {
    if !(200..300).contains(&status) {
        return Err(DetectError::Http {
            status,
            reason: extract_reason(body),
        });
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| DetectError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(DetectError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_type_name(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| DetectError::MalformedResponse(e.to_string()))
}

/// エラー本文から短い理由を取り出す
///
/// `{"error": "..."}` 形式ならその文字列、そうでなければ本文テキストを切り詰めて返す
pub fn extract_reason(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        if let Some(Value::String(error)) = map.get("error") {
            let error = error.trim();
            return (!error.is_empty()).then(|| truncate(error));
        }
    }

    Some(truncate(trimmed))
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_REASON_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_REASON_CHARS).collect();
    short.push('…');
    short
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
