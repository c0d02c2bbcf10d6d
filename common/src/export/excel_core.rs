//! Excel生成（共通ライブラリ）
//!
//! layout.rs の列定義と style.rs の判定結果を使用して集計レポートを生成

use crate::layout::{
    column_width, ReportCell, REPORT_COLUMNS,
    BORDER_GREY, DEFAULT_COLUMN_PADDING, DEFAULT_SHEET_NAME,
};
use crate::style::{cell_style, CellStyle};
use crate::types::ResultRow;
use rust_xlsxwriter::*;
use std::collections::HashMap;

/// レポート出力オプション
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub sheet_name: String,
    /// 列幅 = 最長文字数 + column_padding
    pub column_padding: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            column_padding: DEFAULT_COLUMN_PADDING,
        }
    }
}

/// CellStyle → Format
fn cell_format(style: &CellStyle) -> Format {
    let format = Format::new()
        .set_font_color(Color::RGB(style.font_color))
        .set_background_color(Color::RGB(style.background))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(BORDER_GREY));

    if style.bold {
        format.set_bold()
    } else {
        format
    }
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `results` - 集計結果（フラグ設定済み）
/// * `options` - シート名・列幅パディング
pub fn generate_report_buffer(
    results: &[ResultRow],
    options: &ReportOptions,
) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    // 同じ書式は使い回す
    let mut formats: HashMap<CellStyle, Format> = HashMap::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&options.sheet_name)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    // 見出し行・列幅
    for (col, column) in REPORT_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, column.header(), &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
        worksheet.set_column_width(col, column_width(*column, results, options.column_padding))
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    // データ行
    for (index, row) in results.iter().enumerate() {
        let row_num = index as u32 + 1;

        for (col, column) in REPORT_COLUMNS.iter().enumerate() {
            let col = col as u16;
            let style = cell_style(row, *column);
            let cell_fmt = formats.entry(style).or_insert_with(|| cell_format(&style));

            match column.cell(row) {
                ReportCell::Text(text) => worksheet.write_string_with_format(row_num, col, text, cell_fmt),
                ReportCell::Number(value) => worksheet.write_number_with_format(row_num, col, value, cell_fmt),
                ReportCell::Blank => worksheet.write_blank(row_num, col, cell_fmt),
            }
            .map_err(|e| format!("セル書き込みエラー: {}", e))?;
        }
    }

    tracing::debug!(rows = results.len(), sheet = %options.sheet_name, "レポートシート生成");

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
