pub mod excel;
pub mod json;

use crate::config::Config;
use crate::error::{Result, SmartReportError};
use chrono::{DateTime, FixedOffset, Utc};
use smart_report_common::ResultRow;
use std::path::{Path, PathBuf};

/// 固定オフセットでの現在時刻
pub fn now_with_offset(offset_hours: i32) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset_hours * 3600)
        .ok_or_else(|| SmartReportError::Config(format!("不正なUTCオフセット: {}", offset_hours)))?;
    Ok(Utc::now().with_timezone(&offset))
}

/// `<prefix>-YYYYMMDD-HHMM.xlsx`
pub fn report_file_name(prefix: &str, timestamp: &DateTime<FixedOffset>) -> String {
    format!("{}-{}.xlsx", prefix, timestamp.format("%Y%m%d-%H%M"))
}

pub fn report_path(output_dir: &Path, prefix: &str, timestamp: &DateTime<FixedOffset>) -> PathBuf {
    output_dir.join(report_file_name(prefix, timestamp))
}

/// タイムスタンプ付きファイル名でレポートを出力し、そのパスを返す
pub fn export_report(results: &[ResultRow], output_dir: &Path, config: &Config) -> Result<PathBuf> {
    let timestamp = now_with_offset(config.utc_offset_hours)?;
    let output_path = report_path(output_dir, &config.file_prefix, &timestamp);

    println!("- Excelを生成中...");
    excel::generate_excel(results, &output_path, &config.report_options())?;
    println!("✔ Excel出力: {}", output_path.display());

    Ok(output_path)
}
