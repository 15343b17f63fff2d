//! 予測API呼び出し（fetch）
//!
//! 失敗はすべて ServiceError として返す。画面には固定メッセージだけ出す。

use crate::config::api_base_url;
use cardiorisk_common::{
    endpoint_url, BatchResponse, BatchResultRow, PredictionResult, ServiceError, SubmissionRecord,
    BATCH_ENDPOINT, BATCH_FILE_FIELD, SINGLE_ENDPOINT,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// JSの例外を文字列化
fn js_error(value: JsValue) -> ServiceError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ServiceError::Transport(message)
}

/// リクエスト送信 → 本文テキスト
async fn send(request: Request) -> Result<String, ServiceError> {
    let window = web_sys::window().ok_or_else(|| ServiceError::Transport("window unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(ServiceError::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| ServiceError::Malformed("response body is not text".into()))
}

/// POST /predict/single
pub async fn predict_single(record: &SubmissionRecord) -> Result<PredictionResult, ServiceError> {
    let url = endpoint_url(api_base_url(), SINGLE_ENDPOINT);
    let body = serde_json::to_string(record)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let text = send(request).await?;
    Ok(serde_json::from_str(&text)?)
}

/// POST /predict/batch（multipart、Content-Typeはブラウザに任せる）
pub async fn predict_batch(file: &File) -> Result<Vec<BatchResultRow>, ServiceError> {
    let url = endpoint_url(api_base_url(), BATCH_ENDPOINT);

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(BATCH_FILE_FIELD, file, &file.name())
        .map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from(form));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    let text = send(request).await?;
    let response: BatchResponse = serde_json::from_str(&text)?;
    Ok(response.results)
}
