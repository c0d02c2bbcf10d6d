//! 集計前の行フィルタ

use crate::types::MeasurementRow;

/// ew による絞り込み条件
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowFilter {
    /// ew < max_ew の行だけ残す
    pub max_ew: Option<f64>,
    /// ew == 0（未測定）の行を除外
    pub exclude_zero_ew: bool,
}

impl RowFilter {
    pub fn is_active(&self) -> bool {
        self.max_ew.is_some() || self.exclude_zero_ew
    }

    pub fn accepts(&self, row: &MeasurementRow) -> bool {
        if let Some(max) = self.max_ew {
            if !(row.ew < max) {
                return false;
            }
        }
        !(self.exclude_zero_ew && row.ew == 0.0)
    }

    pub fn apply(&self, rows: &[MeasurementRow]) -> Vec<MeasurementRow> {
        rows.iter().filter(|r| self.accepts(r)).cloned().collect()
    }
}
