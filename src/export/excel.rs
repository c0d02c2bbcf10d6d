//! Excel出力（CLI版）
//!
//! 共通ライブラリでバッファを生成し、ファイルに書き出す

use crate::error::{Result, SmartReportError};
use smart_report_common::{generate_report_buffer, ReportOptions, ResultRow};
use std::path::Path;

pub fn generate_excel(
    results: &[ResultRow],
    output_path: &Path,
    options: &ReportOptions,
) -> Result<()> {
    let buffer = generate_report_buffer(results, options)
        .map_err(SmartReportError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;

    tracing::debug!(path = %output_path.display(), rows = results.len(), "Excelを書き出し");
    Ok(())
}
