//! 対話式の材料検索
//!
//! 材料番号を入力すると方式別の集計表を表示する。`x` で終了。
//! 標準入力が端末でない場合（パイプ等）は行単位で読み、EOF でも終了する。

use crate::error::{Result, SmartReportError};
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};
use smart_report_common::{lookup_material, LookupOutcome, MeasurementRow};

/// 入力の解釈
#[derive(Debug, PartialEq, Eq)]
pub enum LookupCommand {
    Exit,
    Lookup(String),
}

impl LookupCommand {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("x") {
            LookupCommand::Exit
        } else {
            LookupCommand::Lookup(trimmed.to_string())
        }
    }
}

/// 1件検索して表示用テキストを返す
pub fn run_single_lookup(rows: &[MeasurementRow], material: &str) -> String {
    let outcome = lookup_material(rows, material);
    if let LookupOutcome::NotFound { key, .. } = &outcome {
        tracing::info!(material = %key, "該当する材料がありません");
    }
    outcome.render()
}

const PROMPT: &str = "Please enter a material number (or 'x' to exit)";

/// 終了入力まで検索を繰り返す
pub fn run_lookup_loop(rows: &[MeasurementRow]) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        tracing::debug!("標準入力が端末ではないため行単位で読み込みます");
        let stdin = std::io::stdin();
        return run_lookup_lines(rows, stdin.lock(), std::io::stdout().lock());
    }

    loop {
        let input: String = Input::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SmartReportError::Prompt(e.to_string()))?;

        match LookupCommand::parse(&input) {
            LookupCommand::Exit => break,
            LookupCommand::Lookup(material) if material.is_empty() => continue,
            LookupCommand::Lookup(material) => {
                println!("{}", run_single_lookup(rows, &material));
            }
        }
    }

    Ok(())
}

/// 行単位の入力で検索を繰り返す（`x` または EOF で終了）
pub fn run_lookup_lines<R: BufRead, W: Write>(
    rows: &[MeasurementRow],
    mut reader: R,
    mut writer: W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(writer, "{}: ", PROMPT)?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            break;
        }

        match LookupCommand::parse(&line) {
            LookupCommand::Exit => break,
            LookupCommand::Lookup(material) if material.is_empty() => continue,
            LookupCommand::Lookup(material) => {
                writeln!(writer, "{}", run_single_lookup(rows, &material))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_report_common::MaterialNumber;

    #[test]
    fn test_exit_is_case_insensitive() {
        assert_eq!(LookupCommand::parse("x"), LookupCommand::Exit);
        assert_eq!(LookupCommand::parse(" X \n"), LookupCommand::Exit);
        assert_eq!(LookupCommand::parse("xx"), LookupCommand::Lookup("xx".into()));
        assert_eq!(LookupCommand::parse("1001\n"), LookupCommand::Lookup("1001".into()));
    }

    fn sample_rows() -> Vec<MeasurementRow> {
        vec![MeasurementRow {
            material_number: MaterialNumber::Int(1001),
            material: "Pulp".into(),
            method: "A".into(),
            solids_oven1: 10.0,
            solids_oven2: 10.0,
            solids_smart: 9.0,
            drying_time: 5.0,
            ew: 1.0,
        }]
    }

    #[test]
    fn test_single_lookup_not_found() {
        let rows = sample_rows();
        let text = run_single_lookup(&rows, "abc");
        assert!(text.contains("No data found for material number: abc"));
        assert!(text.contains("[1001]"));

        let text = run_single_lookup(&rows, "1001");
        assert!(text.starts_with("Material: Pulp"));
    }

    #[test]
    fn test_line_input_stops_at_exit() {
        let input = std::io::Cursor::new("1001\n\nx\n9999\n");
        let mut output = Vec::new();
        run_lookup_lines(&sample_rows(), input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Material: Pulp"));
        // x 以降の入力は読まない
        assert!(!text.contains("9999"));
        assert_eq!(text.matches(PROMPT).count(), 3);
    }

    #[test]
    fn test_line_input_stops_at_eof() {
        let input = std::io::Cursor::new("abc");
        let mut output = Vec::new();
        run_lookup_lines(&sample_rows(), input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("No data found for material number: abc"));
        assert_eq!(text.matches(PROMPT).count(), 2);
    }
}
