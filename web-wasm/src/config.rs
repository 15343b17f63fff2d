//! ビルド時設定

use cardiorisk_common::DEFAULT_API_URL;

/// 予測APIのURL（ビルド時の CARDIORISK_API_URL、未指定ならデフォルト）
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("CARDIORISK_API_URL"))
}

fn resolve_base_url(value: Option<&'static str>) -> &'static str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url_default() {
        assert_eq!(resolve_base_url(None), "http://localhost:8000");
        assert_eq!(resolve_base_url(Some("   ")), "http://localhost:8000");
    }

    #[test]
    fn test_resolve_base_url_override() {
        assert_eq!(resolve_base_url(Some(" https://risk.example.org ")), "https://risk.example.org");
    }
}
