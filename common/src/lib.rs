//! Smart Report Common Library
//!
//! 水分測定データの集計・最適方式判定・レポート書式判定

pub mod types;
pub mod error;
pub mod parser;
pub mod filter;
pub mod deviation;
pub mod aggregate;
pub mod ranking;
pub mod layout;
pub mod style;
pub mod lookup;
pub mod export;

pub use types::{MaterialNumber, MeasurementRow, ResultRow};
pub use error::{Error, Result};
pub use parser::{parse_measurement_rows, CellValue, REQUIRED_COLUMNS};
pub use filter::RowFilter;
pub use layout::{ReportColumn, REPORT_COLUMNS};
pub use style::{cell_style, CellStyle, Highlight};
pub use lookup::{lookup_material, known_material_numbers, LookupOutcome, MaterialLookup};

#[cfg(feature = "excel")]
pub use export::excel_core::{generate_report_buffer, ReportOptions};

/// 偏差計算 → 集計 → 合否・最適方式判定
pub fn calculate_results(rows: &[MeasurementRow]) -> Vec<ResultRow> {
    let deviations = deviation::compute_deviations(rows);
    let results = aggregate::aggregate(&deviations);
    tracing::debug!(rows = rows.len(), groups = results.len(), "集計完了");
    ranking::evaluate(results)
}
