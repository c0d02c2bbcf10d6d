//! 統合テスト用の入力ファイル生成

use rust_xlsxwriter::Workbook;
use smart_report_common::REQUIRED_COLUMNS;
use std::path::Path;

/// (material_number, material, method, oven1, oven2, smart, drying_time, ew)
pub type Sample = (f64, &'static str, &'static str, f64, f64, f64, f64, f64);

pub fn samples() -> Vec<Sample> {
    vec![
        (1001.0, "Pulp", "Halogen", 10.0, 10.0, 9.0, 5.0, 1.0),
        (1001.0, "pulp", "Halogen", 10.0, 10.0, 9.5, 5.0, 1.0),
        (1001.0, "Pulp", "Microwave", 10.0, 10.0, 9.8, 8.0, 2.0),
        (2002.0, "Bark", "Halogen", 20.0, 21.0, 19.0, 6.0, 0.0),
        (2002.0, "Bark", "Halogen", 20.0, 21.0, 19.5, 6.0, 0.0),
    ]
}

pub fn write_xlsx(path: &Path, samples: &[Sample]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    for (i, s) in samples.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, s.0).unwrap();
        sheet.write_string(row, 1, s.1).unwrap();
        sheet.write_string(row, 2, s.2).unwrap();
        sheet.write_number(row, 3, s.3).unwrap();
        sheet.write_number(row, 4, s.4).unwrap();
        sheet.write_number(row, 5, s.5).unwrap();
        sheet.write_number(row, 6, s.6).unwrap();
        sheet.write_number(row, 7, s.7).unwrap();
    }

    workbook.save(path).unwrap();
}

pub fn write_csv(path: &Path, samples: &[Sample]) {
    let mut content = REQUIRED_COLUMNS.join(",");
    content.push('\n');
    for s in samples {
        content.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            s.0, s.1, s.2, s.3, s.4, s.5, s.6, s.7
        ));
    }
    std::fs::write(path, content).unwrap();
}
