use cardiorisk_common::{SubmissionError, UploadError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardioRiskError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    /// 予測APIの失敗。利用者向けの固定メッセージのみ保持する
    #[error("{0}")]
    PredictionFailed(&'static str),

    #[error("入力エラー: {0}")]
    Submission(#[from] SubmissionError),

    #[error("アップロードエラー: {0}")]
    Upload(#[from] UploadError),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for CardioRiskError {
    fn from(e: dialoguer::Error) -> Self {
        CardioRiskError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CardioRiskError>;
