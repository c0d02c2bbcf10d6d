//! 最適方式の判定と合否判定

use crate::types::{MaterialNumber, ResultRow};
use std::collections::HashMap;

/// 合格に必要な最小サンプル数
pub const PASS_MIN_COUNT: usize = 5;

/// 合格とする平均偏差の上限（以下）
pub const PASS_MAX_DEVIATION: f64 = 1.0;

/// count >= 5 かつ avg_deviation <= 1
pub fn is_passed(count: usize, avg_deviation: f64) -> bool {
    count >= PASS_MIN_COUNT && avg_deviation <= PASS_MAX_DEVIATION
}

/// 材料ごとに平均偏差が最小の行へ lowest_deviation を立てる
///
/// 同値の場合は先に出現した行を採用する。NaN は実数値に負ける。
pub fn mark_lowest_deviation(results: &mut [ResultRow]) {
    let mut best: HashMap<&MaterialNumber, usize> = HashMap::new();
    for (i, row) in results.iter().enumerate() {
        match best.get(&row.material_number) {
            Some(&j) if !is_lower(row.avg_deviation, results[j].avg_deviation) => {}
            _ => {
                best.insert(&row.material_number, i);
            }
        }
    }

    let winners: Vec<usize> = best.into_values().collect();
    for (i, row) in results.iter_mut().enumerate() {
        row.lowest_deviation = winners.contains(&i);
    }
}

fn is_lower(candidate: f64, current: f64) -> bool {
    !candidate.is_nan() && (current.is_nan() || candidate < current)
}

/// 合否と最適方式のフラグを設定
pub fn evaluate(mut results: Vec<ResultRow>) -> Vec<ResultRow> {
    for row in results.iter_mut() {
        row.passed = is_passed(row.count, row.avg_deviation);
    }
    mark_lowest_deviation(&mut results);
    results
}
