//! レポートのレイアウト定義
//!
//! 列の並び・見出し・配色・列幅の算出をまとめる。

use crate::types::{MaterialNumber, ResultRow};

/// 合格（背景）
pub const PASS_GREEN: u32 = 0x98FB98;
/// 要注意（背景）
pub const WARN_ORANGE: u32 = 0xFFA07A;
/// 不合格（文字色）
pub const FAIL_RED: u32 = 0xFF0000;
/// 乾燥時間・ew がともに閾値以上（文字色）
pub const INFO_BLUE: u32 = 0x0000FF;
pub const WHITE: u32 = 0xFFFFFF;
pub const BLACK: u32 = 0x000000;
pub const BORDER_GREY: u32 = 0xD3D3D3;

/// 列幅 = 最長文字数 + パディング
pub const DEFAULT_COLUMN_PADDING: f64 = 2.0;

pub const DEFAULT_SHEET_NAME: &str = "Results";

/// レポート列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportColumn {
    MaterialNumber,
    Material,
    Method,
    LowestDeviation,
    Passed,
    Count,
    AvgDeviation,
    StdDeviation,
    AvgDryingTime,
    AvgEw,
    DeviationValues,
    EwValues,
}

/// 出力順
pub const REPORT_COLUMNS: [ReportColumn; 12] = [
    ReportColumn::MaterialNumber,
    ReportColumn::Material,
    ReportColumn::Method,
    ReportColumn::LowestDeviation,
    ReportColumn::Passed,
    ReportColumn::Count,
    ReportColumn::AvgDeviation,
    ReportColumn::StdDeviation,
    ReportColumn::AvgDryingTime,
    ReportColumn::AvgEw,
    ReportColumn::DeviationValues,
    ReportColumn::EwValues,
];

/// セルに書き込む値
#[derive(Debug, Clone, PartialEq)]
pub enum ReportCell {
    Text(String),
    Number(f64),
    Blank,
}

impl ReportCell {
    fn number(value: f64) -> Self {
        if value.is_nan() {
            ReportCell::Blank
        } else {
            ReportCell::Number(value)
        }
    }

    fn flag(value: bool) -> Self {
        if value {
            ReportCell::Text("x".to_string())
        } else {
            ReportCell::Blank
        }
    }

    /// 列幅計算用の文字列表現（空セルは None）
    pub fn display_text(&self) -> Option<String> {
        match self {
            ReportCell::Text(s) if s.is_empty() => None,
            ReportCell::Text(s) => Some(s.clone()),
            ReportCell::Number(n) => Some(n.to_string()),
            ReportCell::Blank => None,
        }
    }
}

impl ReportColumn {
    pub fn header(&self) -> &'static str {
        match self {
            ReportColumn::MaterialNumber => "material_number",
            ReportColumn::Material => "material",
            ReportColumn::Method => "method",
            ReportColumn::LowestDeviation => "lowest_deviation",
            ReportColumn::Passed => "passed",
            ReportColumn::Count => "count",
            ReportColumn::AvgDeviation => "avg_deviation",
            ReportColumn::StdDeviation => "std_deviation",
            ReportColumn::AvgDryingTime => "avg_drying_time",
            ReportColumn::AvgEw => "avg_ew",
            ReportColumn::DeviationValues => "deviation_values",
            ReportColumn::EwValues => "ew_values",
        }
    }

    pub fn cell(&self, row: &ResultRow) -> ReportCell {
        match self {
            ReportColumn::MaterialNumber => match &row.material_number {
                MaterialNumber::Int(n) => ReportCell::Number(*n as f64),
                MaterialNumber::Text(s) => ReportCell::Text(s.clone()),
            },
            ReportColumn::Material => ReportCell::Text(row.material.clone()),
            ReportColumn::Method => ReportCell::Text(row.method.clone()),
            ReportColumn::LowestDeviation => ReportCell::flag(row.lowest_deviation),
            ReportColumn::Passed => ReportCell::flag(row.passed),
            ReportColumn::Count => ReportCell::Number(row.count as f64),
            ReportColumn::AvgDeviation => ReportCell::number(row.avg_deviation),
            ReportColumn::StdDeviation => ReportCell::number(row.std_deviation),
            ReportColumn::AvgDryingTime => ReportCell::number(row.avg_drying_time),
            ReportColumn::AvgEw => ReportCell::number(row.avg_ew),
            ReportColumn::DeviationValues => ReportCell::Text(row.deviation_values.clone()),
            ReportColumn::EwValues => ReportCell::Text(row.ew_values.clone()),
        }
    }
}

/// 見出しを含む最長の文字数 + padding
pub fn column_width(column: ReportColumn, results: &[ResultRow], padding: f64) -> f64 {
    let longest = results
        .iter()
        .filter_map(|row| column.cell(row).display_text())
        .map(|s| s.chars().count())
        .chain(std::iter::once(column.header().chars().count()))
        .max()
        .unwrap_or(0);
    longest as f64 + padding
}
