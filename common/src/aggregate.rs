//! 集計エンジン
//!
//! (材料番号, 乾燥方式) ごとにグループ化し、偏差・乾燥時間・ew の統計を計算する。
//! グループの順序は入力で最初に出現した順を保持する。

use crate::deviation::DeviationRow;
use crate::types::{MaterialNumber, ResultRow};
use std::collections::HashMap;

/// 集計前のグループ（行は元の順序）
struct Group<'r, 'a> {
    material_number: MaterialNumber,
    method: String,
    rows: Vec<&'r DeviationRow<'a>>,
}

/// グループ化して集計（フラグは未設定）
pub fn aggregate(rows: &[DeviationRow<'_>]) -> Vec<ResultRow> {
    group_rows(rows).into_iter().map(summarize).collect()
}

fn group_rows<'r, 'a>(rows: &'r [DeviationRow<'a>]) -> Vec<Group<'r, 'a>> {
    let mut index: HashMap<(&MaterialNumber, &str), usize> = HashMap::new();
    let mut groups: Vec<Group<'r, 'a>> = Vec::new();

    for dev in rows {
        let key = (&dev.row.material_number, dev.row.method.as_str());
        match index.get(&key) {
            Some(&i) => groups[i].rows.push(dev),
            None => {
                index.insert(key, groups.len());
                groups.push(Group {
                    material_number: dev.row.material_number.clone(),
                    method: dev.row.method.clone(),
                    rows: vec![dev],
                });
            }
        }
    }

    groups
}

fn summarize(group: Group<'_, '_>) -> ResultRow {
    let deviations: Vec<f64> = group.rows.iter().map(|d| d.deviation).collect();
    let ews: Vec<f64> = group.rows.iter().map(|d| d.row.ew).collect();
    let drying_times = group.rows.iter().map(|d| d.row.drying_time);
    let names: Vec<&str> = group.rows.iter().map(|d| d.row.material.as_str()).collect();

    ResultRow {
        material: most_common(&names),
        count: group.rows.len(),
        avg_deviation: mean(deviations.iter().copied()),
        std_deviation: sample_std(deviations.iter().copied()),
        avg_drying_time: mean(drying_times),
        // 0（未測定）も平均に含める
        avg_ew: mean(ews.iter().copied()),
        lowest_deviation: false,
        passed: false,
        deviation_values: format_values(&deviations),
        ew_values: format_values(&ews),
        material_number: group.material_number,
        method: group.method,
    }
}

/// NaN を除いた算術平均（有効値がなければ NaN）
pub fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        f64::NAN
    } else {
        sum / n as f64
    }
}

/// NaN を除いた標本標準偏差（n-1）。有効値2件未満は NaN
pub fn sample_std(values: impl Iterator<Item = f64>) -> f64 {
    let valid: Vec<f64> = values.filter(|v| !v.is_nan()).collect();
    if valid.len() < 2 {
        return f64::NAN;
    }
    let avg = valid.iter().sum::<f64>() / valid.len() as f64;
    let var = valid.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (valid.len() - 1) as f64;
    var.sqrt()
}

/// 最頻値（同数の場合は先に出現した値）
pub fn most_common(values: &[&str]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((*value, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, n) in counts {
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((value, n));
        }
    }
    best.map(|(v, _)| v.to_string()).unwrap_or_default()
}

/// 小数2桁（NaN は `nan`）
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// 小数2桁でカンマ区切り
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_value(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deviation::compute_deviations;
    use crate::types::MeasurementRow;

    fn row(material_number: i64, material: &str, method: &str, smart: f64, ew: f64) -> MeasurementRow {
        MeasurementRow {
            material_number: MaterialNumber::Int(material_number),
            material: material.into(),
            method: method.into(),
            solids_oven1: 10.0,
            solids_oven2: 10.0,
            solids_smart: smart,
            drying_time: 6.0,
            ew,
        }
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let rows = vec![
            row(2002, "Bark", "B", 9.0, 1.0),
            row(1001, "Pulp", "A", 9.0, 1.0),
            row(2002, "Bark", "A", 9.0, 1.0),
            row(1001, "Pulp", "A", 9.5, 1.0),
        ];
        let devs = compute_deviations(&rows);
        let results = aggregate(&devs);

        let keys: Vec<(String, &str)> = results
            .iter()
            .map(|r| (r.material_number.to_string(), r.method.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2002".to_string(), "B"),
                ("1001".to_string(), "A"),
                ("2002".to_string(), "A"),
            ]
        );
        assert_eq!(results[1].count, 2);
    }

    #[test]
    fn test_statistics_for_two_samples() {
        let rows = vec![row(1001, "Pulp", "A", 9.0, 0.0), row(1001, "Pulp", "A", 9.5, 2.0)];
        let devs = compute_deviations(&rows);
        let result = &aggregate(&devs)[0];

        assert_eq!(result.count, 2);
        assert!((result.avg_deviation - 0.75).abs() < 1e-12);
        assert!((result.std_deviation - 0.125f64.sqrt()).abs() < 1e-12);
        assert_eq!(result.avg_drying_time, 6.0);
        // ew=0 も平均に含まれる
        assert_eq!(result.avg_ew, 1.0);
        assert_eq!(result.deviation_values, "1.00, 0.50");
        assert_eq!(result.ew_values, "0.00, 2.00");
    }

    #[test]
    fn test_single_sample_std_is_nan() {
        let rows = vec![row(1001, "Pulp", "A", 9.0, 1.0)];
        let devs = compute_deviations(&rows);
        let result = &aggregate(&devs)[0];
        assert_eq!(result.count, 1);
        assert!(result.std_deviation.is_nan());
    }

    #[test]
    fn test_material_name_is_group_mode() {
        let rows = vec![
            row(1001, "pulp", "A", 9.0, 1.0),
            row(1001, "Pulp", "A", 9.0, 1.0),
            row(1001, "Pulp", "A", 9.0, 1.0),
            row(1001, "PULP", "B", 9.0, 1.0),
        ];
        let devs = compute_deviations(&rows);
        let results = aggregate(&devs);
        assert_eq!(results[0].material, "Pulp");
        assert_eq!(results[1].material, "PULP");
    }

    #[test]
    fn test_mean_skips_nan() {
        assert_eq!(mean([1.0, f64::NAN, 3.0].into_iter()), 2.0);
        assert!(mean([f64::NAN].into_iter()).is_nan());
        assert!(mean(std::iter::empty()).is_nan());
    }

    #[test]
    fn test_sample_std_ignores_nan() {
        assert!(sample_std([1.0, f64::NAN].into_iter()).is_nan());
        assert!((sample_std([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter()) - 2.138089935299395).abs() < 1e-12);
    }

    #[test]
    fn test_most_common_tie_prefers_first_seen() {
        assert_eq!(most_common(&["b", "a", "a", "b"]), "b");
        assert_eq!(most_common(&["x", "y", "y"]), "y");
        assert_eq!(most_common(&[]), "");
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[1.0, 0.456, 12.0]), "1.00, 0.46, 12.00");
        assert_eq!(format_values(&[]), "");
    }

    #[test]
    fn test_format_values_writes_nan_lowercase() {
        assert_eq!(format_values(&[f64::NAN, 1.0]), "nan, 1.00");

        let rows = vec![row(1001, "Pulp", "A", f64::NAN, 1.0), row(1001, "Pulp", "A", 9.5, 2.0)];
        let devs = compute_deviations(&rows);
        let result = &aggregate(&devs)[0];
        assert_eq!(result.deviation_values, "nan, 0.50");
    }
}
