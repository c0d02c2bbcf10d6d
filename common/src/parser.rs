//! 表データ → 測定行の変換
//!
//! Excel/CSV の読み込み自体は呼び出し側で行い、ここではセル値の解釈だけを扱う。

use crate::error::{Error, Result};
use crate::types::{MaterialNumber, MeasurementRow};

/// 必須列
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "material_number",
    "material",
    "method",
    "solids_oven1",
    "solids_oven2",
    "solids_smart",
    "drying_time",
    "ew",
];

/// 読み込んだセルの値
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl CellValue {
    /// CSVなど型情報のない文字列（数値への解釈は列ごとに行う）
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 数値として解釈（解釈できなければ NaN）
    fn as_f64(&self) -> f64 {
        match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            CellValue::Empty | CellValue::Bool(_) => f64::NAN,
        }
    }

    fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    fn as_material_number(&self) -> MaterialNumber {
        match self {
            CellValue::Number(n) => MaterialNumber::from_number(*n),
            // "1001.0" のような文字列も整数として扱う
            CellValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() && n.fract() == 0.0 => MaterialNumber::from_number(n),
                _ => MaterialNumber::from_input(s),
            },
            other => MaterialNumber::from_input(&other.as_text()),
        }
    }
}

/// 必須列の位置
struct ColumnIndex([usize; 8]);

impl ColumnIndex {
    fn resolve(header: &[String]) -> Result<Self> {
        let mut positions = [0usize; 8];
        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = header
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))?;
        }
        Ok(Self(positions))
    }

    fn get<'c>(&self, row: &'c [CellValue], column: usize) -> &'c CellValue {
        row.get(self.0[column]).unwrap_or(&CellValue::Empty)
    }
}

/// ヘッダーとデータ行から測定行を生成
///
/// 空行、および材料番号・乾燥方式が空の行はグループ化できないため除外する。
pub fn parse_measurement_rows(header: &[String], rows: &[Vec<CellValue>]) -> Result<Vec<MeasurementRow>> {
    let index = ColumnIndex::resolve(header)?;
    let mut measurements = Vec::with_capacity(rows.len());

    for (line, row) in rows.iter().enumerate() {
        if row.iter().all(CellValue::is_empty) {
            continue;
        }

        let material_number = index.get(row, 0);
        let method = index.get(row, 2);
        if material_number.is_empty() || method.is_empty() {
            tracing::debug!(line = line + 2, "材料番号または方式が空の行をスキップ");
            continue;
        }

        measurements.push(MeasurementRow {
            material_number: material_number.as_material_number(),
            material: index.get(row, 1).as_text(),
            method: method.as_text(),
            solids_oven1: index.get(row, 3).as_f64(),
            solids_oven2: index.get(row, 4).as_f64(),
            solids_smart: index.get(row, 5).as_f64(),
            drying_time: index.get(row, 6).as_f64(),
            ew: index.get(row, 7).as_f64(),
        });
    }

    Ok(measurements)
}
