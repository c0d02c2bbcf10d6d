//! 測定データ・集計結果の型定義
//!
//! - MeasurementRow: 入力シートの1サンプル
//! - ResultRow: 材料×乾燥方式ごとの集計結果

use serde::{Deserialize, Serialize};
use std::fmt;

/// 材料番号（整数または文字列）
///
/// 整数として解釈できる値は常に `Int` に正規化する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialNumber {
    Int(i64),
    Text(String),
}

impl MaterialNumber {
    /// 入力文字列から材料番号を生成（整数パースに失敗したら文字列のまま）
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => MaterialNumber::Int(n),
            Err(_) => MaterialNumber::Text(trimmed.to_string()),
        }
    }

    /// 数値セルから生成（整数値ならInt）
    pub fn from_number(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            MaterialNumber::Int(value as i64)
        } else {
            MaterialNumber::Text(value.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MaterialNumber::Text(s) if s.is_empty())
    }
}

impl fmt::Display for MaterialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialNumber::Int(n) => write!(f, "{}", n),
            MaterialNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

/// 測定行（1サンプル）
///
/// 数値が欠損・非数値の場合は NaN を保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRow {
    pub material_number: MaterialNumber,

    /// 表示名（行ごとに表記揺れあり）
    pub material: String,

    /// 乾燥方式
    pub method: String,

    pub solids_oven1: f64,
    pub solids_oven2: f64,

    /// 測定器の読み値
    pub solids_smart: f64,

    pub drying_time: f64,

    /// 0 は「未測定」を表す
    pub ew: f64,
}

/// 材料×乾燥方式ごとの集計結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub material_number: MaterialNumber,
    pub material: String,
    pub method: String,
    pub count: usize,
    pub avg_deviation: f64,

    /// 標本標準偏差（2件未満は NaN）
    pub std_deviation: f64,
    pub avg_drying_time: f64,
    pub avg_ew: f64,

    /// 同一材料内で平均偏差が最小の方式
    pub lowest_deviation: bool,

    /// count >= 5 かつ avg_deviation <= 1
    pub passed: bool,

    /// 各サンプルの偏差（小数2桁, カンマ区切り）
    pub deviation_values: String,
    pub ew_values: String,
}
