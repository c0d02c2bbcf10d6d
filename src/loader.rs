//! 測定データの読み込み
//!
//! Excel（先頭シート）または CSV を読み込み、共通ライブラリのパーサーで測定行に変換する。

use crate::error::{Result, SmartReportError};
use calamine::{open_workbook_auto, Data, Reader};
use smart_report_common::{parse_measurement_rows, CellValue, MeasurementRow};
use std::path::Path;

/// ヘッダーとデータ行
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// 拡張子で読み込み方法を切り替えて測定行を返す
pub fn load_measurements(path: &Path) -> Result<Vec<MeasurementRow>> {
    let table = read_table(path)?;
    let rows = parse_measurement_rows(&table.header, &table.rows)?;

    if rows.is_empty() {
        return Err(SmartReportError::NoMeasurements(path.display().to_string()));
    }

    tracing::info!(path = %path.display(), rows = rows.len(), "測定データを読み込み");
    Ok(rows)
}

pub fn read_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(SmartReportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xls" => read_workbook(path),
        "csv" => read_csv(path),
        _ => Err(SmartReportError::UnsupportedFormat(ext)),
    }
}

fn read_workbook(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SmartReportError::WorkbookRead(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SmartReportError::WorkbookRead("ワークシートがありません".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SmartReportError::WorkbookRead(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| SmartReportError::WorkbookRead("ヘッダー行がありません".into()))?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let rows = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    tracing::debug!(sheet = %sheet_name, "シートを読み込み");
    Ok(RawTable { header, rows })
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::from_raw(s),
        Data::Error(_) => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

fn read_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::from_raw).collect());
    }

    Ok(RawTable { header, rows })
}
