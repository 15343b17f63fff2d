//! 予測フロー（手入力・一括）
//!
//! PredictController で状態を管理し、失敗時は原因をログに残して
//! 利用者にはモードごとの固定メッセージだけ返す。

use crate::client::PredictionClient;
use crate::error::{CardioRiskError, Result};
use cardiorisk_common::controller::{BATCH_ERROR_MESSAGE, MANUAL_ERROR_MESSAGE};
use cardiorisk_common::upload::UploadCandidate;
use cardiorisk_common::{
    select_upload, BatchResultRow, FormState, PredictController, PredictionResult,
};
use std::path::Path;

/// アップロード対象ファイル（読込済み）
#[derive(Debug, Clone)]
pub struct BatchUpload {
    pub candidate: UploadCandidate,
    pub bytes: Vec<u8>,
}

impl BatchUpload {
    /// ファイルを読み込み、種別を確認（ネットワーク送信前）
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CardioRiskError::FileNotFound(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let bytes = std::fs::read(path)?;
        let candidate = UploadCandidate::new(name, "", bytes.len() as u64);

        select_upload(std::slice::from_ref(&candidate))?;
        Ok(Self { candidate, bytes })
    }
}

/// 手入力モード: 送信 → 結果
pub async fn run_manual(
    controller: &mut PredictController,
    client: &PredictionClient,
    form: &FormState,
) -> Result<PredictionResult> {
    let (ticket, record) = controller.submit_manual(form)?;
    tracing::info!(url = client.base_url(), "submitting single prediction");

    let outcome = client.predict_single(&record).await;
    if let Err(e) = &outcome {
        tracing::error!(error = %e, "single prediction failed");
    }
    controller.complete_manual(ticket, outcome);

    controller
        .manual()
        .result()
        .cloned()
        .ok_or(CardioRiskError::PredictionFailed(
            controller.manual().error().unwrap_or(MANUAL_ERROR_MESSAGE),
        ))
}

/// 一括モード: アップロード → 全行
pub async fn run_batch(
    controller: &mut PredictController,
    client: &PredictionClient,
    upload: BatchUpload,
) -> Result<Vec<BatchResultRow>> {
    let kind = upload
        .candidate
        .kind()
        .ok_or_else(|| cardiorisk_common::UploadError::UnsupportedKind(upload.candidate.name.clone()))?;

    let ticket = controller
        .file_changed(true)
        .ok_or(CardioRiskError::PredictionFailed(BATCH_ERROR_MESSAGE))?;
    tracing::info!(
        url = client.base_url(),
        file = %upload.candidate.name,
        size = upload.candidate.size,
        "uploading batch file"
    );

    let outcome = client
        .predict_batch(&upload.candidate.name, kind, upload.bytes)
        .await;
    match &outcome {
        Ok(rows) => tracing::info!(rows = rows.len(), "batch prediction finished"),
        Err(e) => tracing::error!(error = %e, "batch prediction failed"),
    }
    controller.complete_batch(ticket, outcome);

    controller
        .batch()
        .result()
        .cloned()
        .ok_or(CardioRiskError::PredictionFailed(
            controller.batch().error().unwrap_or(BATCH_ERROR_MESSAGE),
        ))
}
