use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmartReportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式です: {0}（xlsx / xls / csv を指定してください）")]
    UnsupportedFormat(String),

    #[error("ワークブック読み込みエラー: {0}")]
    WorkbookRead(String),

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("測定データがありません: {0}")]
    NoMeasurements(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] smart_report_common::Error),
}

pub type Result<T> = std::result::Result<T, SmartReportError>;
