use crate::error::{Result, SpecExtractorError};
use serde::{Deserialize, Serialize};
use spec_extractor_common::DEFAULT_API_BASE;
use std::path::{Path, PathBuf};

/// APIベースURLを上書きする環境変数
pub const API_BASE_ENV: &str = "SPEC_EXTRACTOR_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    /// ダウンロード保存先（未設定ならカレントディレクトリ）
    pub download_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            download_dir: None,
        }
    }
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
            .ok_or_else(|| SpecExtractorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("spec-extractor").join("config.json"))
    }

    /// 実際に使うAPIベースURL（フラグ > 環境変数 > 設定ファイル）
    pub fn resolve_api_base(&self, flag: Option<&str>) -> String {
        let env = std::env::var(API_BASE_ENV).ok();
        pick_api_base(flag, env.as_deref(), &self.api_base)
    }

    pub fn set_api_base(&mut self, base: String) -> Result<()> {
        if base.trim().is_empty() {
            return Err(SpecExtractorError::Config("api_base が空です".into()));
        }
        self.api_base = base.trim().to_string();
        self.save()
    }

    pub fn set_download_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.download_dir = Some(dir);
        self.save()
    }

    /// ダウンロード保存先（引数 > 設定 > カレント）
    pub fn resolve_download_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.download_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn pick_api_base(flag: Option<&str>, env: Option<&str>, file: &str) -> String {
    [flag, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(file)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            api_base: "http://localhost:5001/api".into(),
            download_dir: Some(PathBuf::from("/tmp/specs")),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"download_dir": "out"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.download_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_api_base_precedence() {
        assert_eq!(pick_api_base(Some("http://flag"), Some("http://env"), "http://file"), "http://flag");
        assert_eq!(pick_api_base(None, Some("http://env"), "http://file"), "http://env");
        assert_eq!(pick_api_base(Some("  "), None, "http://file"), "http://file");
    }

    #[test]
    fn test_download_dir_precedence() {
        let config = Config { download_dir: Some(PathBuf::from("saved")), ..Default::default() };
        assert_eq!(config.resolve_download_dir(Some(Path::new("flag"))), PathBuf::from("flag"));
        assert_eq!(config.resolve_download_dir(None), PathBuf::from("saved"));
        assert_eq!(Config::default().resolve_download_dir(None), PathBuf::from("."));
    }
}
