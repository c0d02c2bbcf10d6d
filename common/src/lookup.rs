//! 材料番号による個別検索
//!
//! 該当なしはエラーではなく、既知の材料番号一覧を添えて返す。

use crate::aggregate::{format_value, most_common};
use crate::types::{MaterialNumber, MeasurementRow, ResultRow};
use std::collections::HashSet;
use std::fmt::Write;

/// 検索結果
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(MaterialLookup),
    NotFound {
        key: MaterialNumber,
        known: Vec<MaterialNumber>,
    },
}

/// 1材料分の方式別集計
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLookup {
    pub material_number: MaterialNumber,
    pub material: String,
    pub results: Vec<ResultRow>,
}

/// 入力値で材料を検索し、該当行だけで集計する
pub fn lookup_material(rows: &[MeasurementRow], input: &str) -> LookupOutcome {
    let key = MaterialNumber::from_input(input);
    let filtered: Vec<MeasurementRow> = rows
        .iter()
        .filter(|r| r.material_number == key)
        .cloned()
        .collect();

    if filtered.is_empty() {
        return LookupOutcome::NotFound {
            key,
            known: known_material_numbers(rows),
        };
    }

    // 表示名は方式を問わず該当行全体の最頻値
    let names: Vec<&str> = filtered.iter().map(|r| r.material.as_str()).collect();
    let material = most_common(&names);
    let results = crate::calculate_results(&filtered);

    LookupOutcome::Found(MaterialLookup {
        material_number: key,
        material,
        results,
    })
}

/// データ内の材料番号（重複除去, 出現順）
pub fn known_material_numbers(rows: &[MeasurementRow]) -> Vec<MaterialNumber> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|r| seen.insert(r.material_number.clone()))
        .map(|r| r.material_number.clone())
        .collect()
}

impl MaterialLookup {
    /// 方式別の表
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Material: {}\n", self.material);
        let _ = writeln!(
            out,
            "{:<15} | {:<6} | {:<13} | {:<12} | {}",
            "Method", "Count", "Avg Deviation", "Best Method", "Deviation Values"
        );
        let _ = writeln!(out, "{}", "-".repeat(80));

        for row in &self.results {
            let best_mark = if row.lowest_deviation { "x" } else { "" };
            let _ = writeln!(
                out,
                "{:<15} | {:<6} | {:<13} | {:<12} | {}",
                row.method,
                row.count,
                format_value(row.avg_deviation),
                best_mark,
                row.deviation_values
            );
        }
        out
    }

    /// 最適方式の行
    pub fn best_method(&self) -> Option<&ResultRow> {
        self.results.iter().find(|r| r.lowest_deviation)
    }
}

impl LookupOutcome {
    /// 画面表示用テキスト
    pub fn render(&self) -> String {
        match self {
            LookupOutcome::Found(lookup) => lookup.render_table(),
            LookupOutcome::NotFound { key, known } => {
                let known = known.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(", ");
                format!(
                    "No data found for material number: {}\nHere are the material numbers in the dataset:\n[{}]\n",
                    key, known
                )
            }
        }
    }
}
