//! 設定管理
//!
//! TOML設定ファイルの読み込みとDomain型への変換。
//!
//! 設定できるのは入力ディレクトリと表示の有無のみ。
//! 分類しきい値は固定定数であり、設定ファイルからは変更できない
//! （domain/classifier.rs を参照）。

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{DomainError, DomainResult};

/// アプリケーション設定のルート構造
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AppConfig {
    /// 入力設定
    #[serde(default)]
    pub input: InputConfig,
    /// 表示設定
    #[serde(default)]
    pub display: DisplayConfig,
}

/// 入力設定
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// 分類対象の画像を含むディレクトリ
    ///
    /// デフォルト: "test_images"
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl InputConfig {
    /// デフォルトの入力ディレクトリ
    pub const DEFAULT_DIRECTORY: &'static str = "test_images";
}

fn default_directory() -> String {
    InputConfig::DEFAULT_DIRECTORY.to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

/// 表示設定
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    /// 画像ウィンドウを表示してキー入力を待つか
    ///
    /// falseの場合は表示せず、各ファイルを連続して処理する
    /// デフォルト: true
    #[serde(default = "default_display_enabled")]
    pub enabled: bool,
}

fn default_display_enabled() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enabled: default_display_enabled(),
        }
    }
}

impl AppConfig {
    /// TOMLファイルから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> DomainResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| DomainError::Configuration(format!("Failed to parse config file: {}", e)))
    }

    /// デフォルト設定をTOMLファイルに書き出す
    #[allow(dead_code)]
    pub fn write_default<P: AsRef<Path>>(path: P) -> DomainResult<()> {
        let config = Self::default();
        let content = toml::to_string_pretty(&config).map_err(|e| {
            DomainError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)
            .map_err(|e| DomainError::Configuration(format!("Failed to write config file: {}", e)))
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> DomainResult<()> {
        if self.input.directory.is_empty() {
            return Err(DomainError::Configuration(
                "Input directory must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.input.directory, "test_images");
        assert!(config.display.enabled);
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        // 不正な入力ディレクトリ
        config.input.directory = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_parsing() {
        let toml = r#"
            [input]
            directory = "samples"

            [display]
            enabled = false
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.input.directory, "samples");
        assert!(!config.display.enabled);
    }

    #[test]
    fn test_config_partial_sections_use_defaults() {
        // セクション省略時はデフォルト値が補完される
        let toml = r#"
            [display]
            enabled = false
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.input.directory, "test_images");
        assert!(!config.display.enabled);
    }

    #[test]
    fn test_config_missing_file_is_error() {
        let result = AppConfig::from_file("no_such_config.toml");
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Configuration(_)
        ));
    }

    #[test]
    fn test_write_default_roundtrip() {
        let dir = std::env::temp_dir().join("conveyor_sort_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        AppConfig::write_default(&path).unwrap();
        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.input.directory, "test_images");

        std::fs::remove_dir_all(dir).ok();
    }
}
