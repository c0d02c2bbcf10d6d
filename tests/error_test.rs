//! エラーケーステスト

use smart_report::error::SmartReportError;

/// SmartReportErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SmartReportError::Config("テスト設定エラー".to_string()),
        SmartReportError::FileNotFound("smart6.xlsx".to_string()),
        SmartReportError::UnsupportedFormat("json".to_string()),
        SmartReportError::WorkbookRead("zip".to_string()),
        SmartReportError::ExcelGeneration("Excel生成エラー".to_string()),
        SmartReportError::NoMeasurements("smart6.xlsx".to_string()),
        SmartReportError::Prompt("EOF".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 未対応形式のメッセージ
#[test]
fn test_unsupported_format_message() {
    let display = SmartReportError::UnsupportedFormat("txt".into()).to_string();
    assert!(display.contains("txt"));
    assert!(display.contains("xlsx"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SmartReportError = io_err.into();

    assert!(matches!(err, SmartReportError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: SmartReportError = json_err.into();

    assert!(matches!(err, SmartReportError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = smart_report_common::Error::MissingColumn("ew".to_string());
    let err: SmartReportError = common_err.into();

    assert!(matches!(err, SmartReportError::Common(_)));
    assert_eq!(err.to_string(), "Missing column: ew");
}
