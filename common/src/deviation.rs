//! 偏差計算
//!
//! オーブン2回測定の平均を基準値とし、測定器の読み値との差の絶対値を偏差とする。

use crate::types::MeasurementRow;

/// 偏差を付加した作業用の行（入力行は変更しない）
#[derive(Debug, Clone, Copy)]
pub struct DeviationRow<'a> {
    pub row: &'a MeasurementRow,
    pub solids_oven_average: f64,
    pub deviation: f64,
}

impl<'a> DeviationRow<'a> {
    pub fn new(row: &'a MeasurementRow) -> Self {
        let solids_oven_average = (row.solids_oven1 + row.solids_oven2) / 2.0;
        let deviation = (solids_oven_average - row.solids_smart).abs();
        Self {
            row,
            solids_oven_average,
            deviation,
        }
    }
}

/// 全行の偏差を計算（欠損値は NaN のまま伝播）
pub fn compute_deviations(rows: &[MeasurementRow]) -> Vec<DeviationRow<'_>> {
    rows.iter().map(DeviationRow::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MaterialNumber;

    fn row(oven1: f64, oven2: f64, smart: f64) -> MeasurementRow {
        MeasurementRow {
            material_number: MaterialNumber::Int(1001),
            material: "Pulp".into(),
            method: "A".into(),
            solids_oven1: oven1,
            solids_oven2: oven2,
            solids_smart: smart,
            drying_time: 5.0,
            ew: 1.0,
        }
    }

    #[test]
    fn test_deviation_is_absolute() {
        let rows = vec![row(10.0, 10.0, 9.0), row(10.0, 12.0, 12.5)];
        let devs = compute_deviations(&rows);
        assert_eq!(devs[0].solids_oven_average, 10.0);
        assert_eq!(devs[0].deviation, 1.0);
        assert_eq!(devs[1].solids_oven_average, 11.0);
        assert_eq!(devs[1].deviation, 1.5);
    }

    #[test]
    fn test_missing_value_propagates_nan() {
        let rows = vec![row(10.0, f64::NAN, 9.0)];
        let devs = compute_deviations(&rows);
        assert!(devs[0].solids_oven_average.is_nan());
        assert!(devs[0].deviation.is_nan());
    }

    #[test]
    fn test_input_rows_untouched() {
        let rows = vec![row(10.0, 10.0, 9.5)];
        let before = rows.clone();
        let _ = compute_deviations(&rows);
        assert_eq!(rows, before);
    }
}
