//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
