use crate::error::{CardioRiskError, Result};
use cardiorisk_common::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 予測APIのURLを上書きする環境変数
pub const API_URL_ENV: &str = "CARDIORISK_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CardioRiskError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("cardiorisk").join("config.json"))
    }

    /// 接続先URLを決定
    ///
    /// 優先順位: コマンドライン → 環境変数 → 設定ファイル → デフォルト
    pub fn resolve_api_url(&self, cli_override: Option<&str>) -> String {
        self.resolve_api_url_with(cli_override, std::env::var(API_URL_ENV).ok())
    }

    pub fn resolve_api_url_with(&self, cli_override: Option<&str>, env: Option<String>) -> String {
        cli_override
            .map(str::to_string)
            .or(env)
            .or_else(|| self.api_url.clone())
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        validate_api_url(&url)?;
        self.api_url = Some(url);
        self.save()
    }
}

/// http(s) のURLか確認
pub fn validate_api_url(url: &str) -> Result<()> {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(())
    } else {
        Err(CardioRiskError::Config(format!(
            "URLは http:// または https:// で始めてください: {}",
            url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_default() {
        let config = Config::default();
        assert_eq!(config.resolve_api_url_with(None, None), "http://localhost:8000");
    }

    #[test]
    fn test_resolve_priority() {
        let config = Config { api_url: Some("http://from-file:8000".into()) };

        assert_eq!(config.resolve_api_url_with(None, None), "http://from-file:8000");
        assert_eq!(
            config.resolve_api_url_with(None, Some("http://from-env:8000".into())),
            "http://from-env:8000"
        );
        assert_eq!(
            config.resolve_api_url_with(Some("http://from-cli:8000"), Some("http://from-env:8000".into())),
            "http://from-cli:8000"
        );
    }

    #[test]
    fn test_resolve_blank_falls_back_to_default() {
        let config = Config { api_url: Some("  ".into()) };
        assert_eq!(config.resolve_api_url_with(None, None), DEFAULT_API_URL);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config { api_url: Some("https://risk.example.org".into()) };
        config.save_to(&path).expect("保存失敗");

        let loaded = Config::load_from(&path).expect("読込失敗");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let loaded = Config::load_from(&dir.path().join("none.json")).expect("読込失敗");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CardioRiskError::JsonParse(_))));
    }

    #[test]
    fn test_validate_api_url() {
        assert!(validate_api_url("http://localhost:8000").is_ok());
        assert!(validate_api_url("https://api.example.com").is_ok());
        assert!(validate_api_url("localhost:8000").is_err());
    }
}
