//! エラー型定義

use thiserror::Error;

/// 手入力の送信前エラー（ネットワークには到達しない）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("required fields are empty: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// アップロードファイルの受付エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("unsupported file type: {0} (expected .xlsx or .csv)")]
    UnsupportedKind(String),

    #[error("only one file can be uploaded at a time ({0} given)")]
    TooManyFiles(usize),

    #[error("no file given")]
    Empty,
}

/// 予測サービス呼び出しの失敗
///
/// 種別はログ用。利用者にはモードごとの固定メッセージのみ表示する。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("service returned HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Malformed(e.to_string())
    }
}
