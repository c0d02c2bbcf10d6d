//! 集計結果のJSON出力

use crate::error::Result;
use smart_report_common::ResultRow;
use std::path::Path;

/// NaN は null として出力される
pub fn generate_json(results: &[ResultRow], output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
