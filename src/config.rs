use crate::error::{Result, SmartReportError};
use serde::{Deserialize, Serialize};
use smart_report_common::ReportOptions;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 既定の入力ファイル
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub sheet_name: String,
    /// 出力ファイル名の接頭辞
    pub file_prefix: String,
    /// ファイル名タイムスタンプのUTCオフセット（時間）
    pub utc_offset_hours: i32,
    pub column_padding: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("smart6.xlsx"),
            output_dir: PathBuf::from("."),
            sheet_name: "Results".into(),
            file_prefix: "smart-report".into(),
            utc_offset_hours: 2,
            column_padding: 2.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "設定ファイルを読み込み");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SmartReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("smart-report").join("config.json"))
    }

    pub fn set_input_path(&mut self, path: PathBuf) -> Result<()> {
        self.input_path = path;
        self.save()
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            sheet_name: self.sheet_name.clone(),
            column_padding: self.column_padding,
        }
    }
}
