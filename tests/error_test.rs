//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use cardiorisk::config::{validate_api_url, Config};
use cardiorisk::error::CardioRiskError;
use cardiorisk::session::BatchUpload;
use cardiorisk_common::{FormState, SubmissionError, UploadError};
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルをアップロードした場合
#[test]
fn test_upload_nonexistent_file() {
    let result = BatchUpload::from_path(Path::new("/nonexistent/path/patients.xlsx"));
    assert!(matches!(result, Err(CardioRiskError::FileNotFound(_))));
}

/// 非対応形式のファイル
#[test]
fn test_upload_unsupported_kind() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("patients.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    let result = BatchUpload::from_path(&path);
    assert!(matches!(
        result,
        Err(CardioRiskError::Upload(UploadError::UnsupportedKind(_)))
    ));
}

/// CSVは拡張子だけで受け付ける
#[test]
fn test_upload_csv_accepted() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("patients.csv");
    std::fs::write(&path, "age,sex\n63,Male\n").unwrap();

    let upload = BatchUpload::from_path(&path).expect("CSVは受け付けるべき");
    assert_eq!(upload.candidate.name, "patients.csv");
    assert_eq!(upload.bytes.len() as u64, upload.candidate.size);
}

/// 壊れた設定ファイル
#[test]
fn test_load_broken_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(CardioRiskError::JsonParse(_))));
}

/// 不正なURL
#[test]
fn test_invalid_api_url() {
    assert!(matches!(
        validate_api_url("localhost:8000"),
        Err(CardioRiskError::Config(_))
    ));
    assert!(validate_api_url("https://risk.example.org").is_ok());
}

/// 未入力項目は項目名付きで報告
#[test]
fn test_incomplete_form_error() {
    let mut form = FormState::new();
    form.set("age", "63").unwrap();

    let err: CardioRiskError = form.submit().unwrap_err().into();
    match &err {
        CardioRiskError::Submission(SubmissionError::MissingFields(names)) => {
            assert_eq!(names.len(), 12);
            assert!(!names.contains(&"age".to_string()));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("sex"));
}

/// CardioRiskErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CardioRiskError::Config("テスト設定エラー".to_string()),
        CardioRiskError::FileNotFound("patients.xlsx".to_string()),
        CardioRiskError::PredictionFailed("Analysis failed. Please check your inputs and try again."),
        CardioRiskError::Prompt("中断".to_string()),
        CardioRiskError::ExcelGeneration("Excel生成エラー".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 予測失敗は固定メッセージのみ表示
#[test]
fn test_prediction_failed_display() {
    let err = CardioRiskError::PredictionFailed("Batch analysis failed. Ensure the file format is correct.");
    assert_eq!(err.to_string(), "Batch analysis failed. Ensure the file format is correct.");
}
