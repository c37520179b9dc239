//! 検出APIレスポンスの型定義
//!
//! `POST /detect` が返すJSONオブジェクトの正準形。
//! 全フィールド省略可能で、`null` は欠落と同じ扱い。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 値が解決できなかったことを示すサーバー側のセンチネル
pub const UNKNOWN_SENTINEL: &str = "UNKNOWN";

/// 検出APIのレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionResult {
    #[serde(deserialize_with = "truthy")]
    pub vehicle_detected: bool,

    #[serde(deserialize_with = "lenient_string")]
    pub vehicle_type: Option<String>,     // tractor / truck / bullock_cart

    #[serde(deserialize_with = "lenient_string")]
    pub vehicle_color: Option<String>,

    #[serde(deserialize_with = "truthy")]
    pub sugarcane_detected: bool,

    #[serde(deserialize_with = "truthy")]
    pub number_plate: bool,

    #[serde(deserialize_with = "lenient_string")]
    pub plate_text: Option<String>,       // OCR結果

    #[serde(deserialize_with = "lenient_string")]
    pub plate_color: Option<String>,
}

/// 表示に使える値か（空文字・センチネルは不可、値はそのまま返す）
pub fn usable(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != UNKNOWN_SENTINEL)
}

/// JSONの真偽判定（null/false/0/""は偽、それ以外は真）
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    // 偽値（false/0/""/null）は欠落と同じ
    if !is_truthy(&value) {
        return Ok(None);
    }
    Ok(match value {
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
