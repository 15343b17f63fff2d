//! CardioRisk Common Library
//!
//! CLIとWeb(WASM)で共有される型・入力定義・表示モデル

pub mod types;
pub mod fields;
pub mod form;
pub mod upload;
pub mod verdict;
pub mod batch_table;
pub mod controller;
pub mod content;
pub mod error;
#[cfg(feature = "excel")]
pub mod export;

pub use types::{BatchResponse, BatchResultRow, Prediction, PredictionResult, SubmissionRecord};
pub use fields::{FieldDescriptor, FieldKind, FIELD_METADATA, find_field};
pub use form::FormState;
pub use upload::{FileKind, UploadCandidate, select_upload};
pub use verdict::{Theme, Verdict, format_probability};
pub use batch_table::{BatchTable, BatchTableRow, BATCH_DISPLAY_LIMIT};
pub use controller::{Mode, ModeMachine, PredictController, RequestState, Ticket};
pub use error::{ServiceError, SubmissionError, UploadError};

/// 単一予測エンドポイント
pub const SINGLE_ENDPOINT: &str = "/predict/single";

/// 一括予測エンドポイント
pub const BATCH_ENDPOINT: &str = "/predict/batch";

/// ヘルスチェックエンドポイント
pub const HEALTH_ENDPOINT: &str = "/";

/// 一括アップロードのmultipartフィールド名
pub const BATCH_FILE_FIELD: &str = "file";

/// APIのデフォルト接続先
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// ベースURLとパスを結合（末尾スラッシュの重複を除去）
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_plain() {
        assert_eq!(
            endpoint_url("http://localhost:8000", SINGLE_ENDPOINT),
            "http://localhost:8000/predict/single"
        );
    }

    #[test]
    fn test_endpoint_url_trailing_slash() {
        assert_eq!(
            endpoint_url("https://api.example.com/", BATCH_ENDPOINT),
            "https://api.example.com/predict/batch"
        );
        assert_eq!(endpoint_url("http://x//", HEALTH_ENDPOINT), "http://x/");
    }
}
