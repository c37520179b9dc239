//! 検出結果の表示ラベル
//!
//! レスポンスの各フィールドを、ポップアップに表示する文字列へ変換する。
//! 欠落・偽値・センチネルはすべて同じフォールバック表示になる。

use serde::{Deserialize, Serialize};

use crate::types::{usable, DetectionResult};

pub const NOT_DETECTED: &str = "Not Detected";
pub const NOT_AVAILABLE: &str = "N/A";
pub const PLATE_TEXT_UNCLEAR: &str = "Detected (Text unclear)";
pub const YES: &str = "Yes";
pub const NO: &str = "No";

/// ポップアップに表示する5項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub vehicle_type: String,
    pub vehicle_color: String,
    pub sugarcane: String,
    pub plate: String,
    pub plate_color: String,
}

impl Default for DetectionReport {
    /// 一度も結果を受け取っていない状態
    fn default() -> Self {
        Self::from(&DetectionResult::default())
    }
}

impl From<&DetectionResult> for DetectionReport {
    fn from(result: &DetectionResult) -> Self {
        let vehicle_type = if result.vehicle_detected {
            or_fallback(result.vehicle_type.as_deref(), NOT_DETECTED)
        } else {
            NOT_DETECTED.to_string()
        };

        let plate = if !result.number_plate {
            NOT_DETECTED.to_string()
        } else {
            or_fallback(result.plate_text.as_deref(), PLATE_TEXT_UNCLEAR)
        };

        Self {
            vehicle_type,
            vehicle_color: or_fallback(result.vehicle_color.as_deref(), NOT_AVAILABLE),
            sugarcane: if result.sugarcane_detected { YES } else { NO }.to_string(),
            plate,
            plate_color: or_fallback(result.plate_color.as_deref(), NOT_AVAILABLE),
        }
    }
}

impl DetectionReport {
    /// (ラベル, 値) の表示順リスト
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Vehicle Type", self.vehicle_type.as_str()),
            ("Vehicle Color", self.vehicle_color.as_str()),
            ("Sugarcane", self.sugarcane.as_str()),
            ("Number Plate", self.plate.as_str()),
            ("Plate Color", self.plate_color.as_str()),
        ]
    }
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    usable(value).unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_from(json: &str) -> DetectionReport {
        let result: DetectionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        DetectionReport::from(&result)
    }

    #[test]
    fn test_report_truck_example() {
        let report = report_from(
            r#"{"vehicle_detected": true, "vehicle_type": "Truck", "sugarcane_detected": false, "number_plate": "UNKNOWN", "plate_color": ""}"#,
        );
        assert_eq!(report.vehicle_type, "Truck");
        assert_eq!(report.sugarcane, "No");
        assert_eq!(report.plate, PLATE_TEXT_UNCLEAR);
        assert_eq!(report.plate_color, "N/A");
        assert_eq!(report.vehicle_color, "N/A");
    }

    #[test]
    fn test_report_all_values_verbatim() {
        let report = report_from(
            r#"{
                "vehicle_detected": true,
                "vehicle_type": "tractor",
                "vehicle_color": "blue",
                "sugarcane_detected": true,
                "number_plate": true,
                "plate_text": "UP32 AB 1234",
                "plate_color": "white"
            }"#,
        );
        assert_eq!(report.vehicle_type, "tractor");
        assert_eq!(report.vehicle_color, "blue");
        assert_eq!(report.sugarcane, "Yes");
        assert_eq!(report.plate, "UP32 AB 1234");
        assert_eq!(report.plate_color, "white");
    }

    #[test]
    fn test_report_absent_equals_falsy() {
        let absent = report_from("{}");
        let falsy = report_from(
            r#"{
                "vehicle_detected": false,
                "vehicle_type": "",
                "vehicle_color": "UNKNOWN",
                "sugarcane_detected": false,
                "number_plate": false,
                "plate_text": "",
                "plate_color": null
            }"#,
        );
        assert_eq!(absent, falsy);
        assert_eq!(absent.vehicle_type, NOT_DETECTED);
        assert_eq!(absent.vehicle_color, NOT_AVAILABLE);
        assert_eq!(absent.sugarcane, NO);
        assert_eq!(absent.plate, NOT_DETECTED);
        assert_eq!(absent.plate_color, NOT_AVAILABLE);
    }

    #[test]
    fn test_report_vehicle_type_ignored_when_not_detected() {
        let report = report_from(r#"{"vehicle_detected": false, "vehicle_type": "truck"}"#);
        assert_eq!(report.vehicle_type, NOT_DETECTED);
    }

    #[test]
    fn test_report_vehicle_detected_without_type() {
        let report = report_from(r#"{"vehicle_detected": true, "vehicle_type": null}"#);
        assert_eq!(report.vehicle_type, NOT_DETECTED);
    }

    #[test]
    fn test_report_plate_text_unknown() {
        let report = report_from(r#"{"number_plate": true, "plate_text": "UNKNOWN"}"#);
        assert_eq!(report.plate, PLATE_TEXT_UNCLEAR);
    }

    #[test]
    fn test_report_plate_text_without_plate_flag() {
        // フラグが偽ならOCR結果は表示しない
        let report = report_from(r#"{"number_plate": false, "plate_text": "KA01"}"#);
        assert_eq!(report.plate, NOT_DETECTED);
    }

    #[test]
    fn test_report_falsy_scalars_fall_back() {
        let report = report_from(
            r#"{
                "vehicle_detected": true,
                "vehicle_type": false,
                "vehicle_color": 0,
                "number_plate": true,
                "plate_text": 0,
                "plate_color": false
            }"#,
        );
        assert_eq!(report.vehicle_type, NOT_DETECTED);
        assert_eq!(report.vehicle_color, NOT_AVAILABLE);
        assert_eq!(report.plate, PLATE_TEXT_UNCLEAR);
        assert_eq!(report.plate_color, NOT_AVAILABLE);
    }

    #[test]
    fn test_report_values_not_trimmed() {
        let report = report_from(
            r#"{"number_plate": true, "plate_text": " KA 01 ", "plate_color": " UNKNOWN "}"#,
        );
        assert_eq!(report.plate, " KA 01 ");
        assert_eq!(report.plate_color, " UNKNOWN ");
    }

    #[test]
    fn test_report_rows_order() {
        let report = DetectionReport::default();
        let labels: Vec<&str> = report.rows().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["Vehicle Type", "Vehicle Color", "Sugarcane", "Number Plate", "Plate Color"]
        );
    }
}
