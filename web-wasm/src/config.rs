//! ビルド時設定

use cane_scan_common::DEFAULT_ENDPOINT;

/// 検出APIのURL
///
/// ビルド時の環境変数 `CANE_SCAN_ENDPOINT` で上書きできる。
pub fn endpoint() -> &'static str {
    resolve(option_env!("CANE_SCAN_ENDPOINT"))
}

fn resolve(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default() {
        assert_eq!(resolve(None), "http://127.0.0.1:5000/detect");
        assert_eq!(resolve(Some("  ")), "http://127.0.0.1:5000/detect");
    }

    #[test]
    fn test_resolve_configured() {
        assert_eq!(resolve(Some("http://10.0.0.5:5000/detect")), "http://10.0.0.5:5000/detect");
    }
}
