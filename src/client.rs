//! 予測APIクライアント（reqwest）
//!
//! 失敗はすべて ServiceError に変換する。再試行・タイムアウトは行わない。

use cardiorisk_common::{
    endpoint_url, BatchResponse, BatchResultRow, FileKind, PredictionResult, ServiceError,
    SubmissionRecord, BATCH_ENDPOINT, BATCH_FILE_FIELD, HEALTH_ENDPOINT, SINGLE_ENDPOINT,
};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /predict/single（レコードをそのままJSONで送信）
    pub async fn predict_single(
        &self,
        record: &SubmissionRecord,
    ) -> Result<PredictionResult, ServiceError> {
        let url = endpoint_url(&self.base_url, SINGLE_ENDPOINT);
        tracing::debug!(%url, fields = record.len(), "POST single prediction");

        let response = self
            .http
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(transport)?;

        read_json(response).await
    }

    /// POST /predict/batch（multipartの `file` フィールド1つ）
    pub async fn predict_batch(
        &self,
        file_name: &str,
        kind: FileKind,
        bytes: Vec<u8>,
    ) -> Result<Vec<BatchResultRow>, ServiceError> {
        let url = endpoint_url(&self.base_url, BATCH_ENDPOINT);
        tracing::debug!(%url, file_name, size = bytes.len(), "POST batch prediction");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(kind.mime())
            .map_err(transport)?;
        let form = reqwest::multipart::Form::new().part(BATCH_FILE_FIELD, part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        let body: BatchResponse = read_json(response).await?;
        Ok(body.results)
    }

    /// GET /（稼働確認）
    pub async fn health(&self) -> Result<serde_json::Value, ServiceError> {
        let url = endpoint_url(&self.base_url, HEALTH_ENDPOINT);
        let response = self.http.get(&url).send().await.map_err(transport)?;
        read_json(response).await
    }
}

fn transport(e: reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        // エラー本文は解析しない
        return Err(ServiceError::Status(status.as_u16()));
    }

    let text = response.text().await.map_err(transport)?;
    Ok(serde_json::from_str(&text)?)
}
