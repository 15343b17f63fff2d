//! 予測APIの入出力型
//!
//! - SubmissionRecord: 手入力フォームの値（フィールド名 → 値）
//! - PredictionResult: 単一予測の結果
//! - BatchResultRow: 一括予測の1行分

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// 手入力レコード
///
/// 値は入力されたまま送信する（型変換はサーバ側）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRecord(BTreeMap<String, Value>);

impl SubmissionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1フィールドを上書き（他のフィールドはそのまま）
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// 値が入っているか（null・空文字は未入力扱い）
    pub fn is_filled(&self, name: &str) -> bool {
        match self.0.get(name) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// 二値の判定（サーバ側で決定済み）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Prediction {
    NoRisk,
    Risk,
}

impl TryFrom<u8> for Prediction {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Prediction::NoRisk),
            1 => Ok(Prediction::Risk),
            other => Err(format!("prediction must be 0 or 1, got {}", other)),
        }
    }
}

impl From<Prediction> for u8 {
    fn from(p: Prediction) -> u8 {
        match p {
            Prediction::NoRisk => 0,
            Prediction::Risk => 1,
        }
    }
}

impl Prediction {
    pub fn is_risk(self) -> bool {
        matches!(self, Prediction::Risk)
    }
}

/// 単一予測の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Prediction,
    pub probability: f64,
    /// サーバが付与するラベル（"High" / "Low"）。表示には使わない。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
}

/// 一括予測の1行
///
/// probability / prediction 以外の列（age, sex など）は fields にそのまま残る。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResultRow {
    pub prediction: Prediction,
    pub probability: f64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl BatchResultRow {
    /// 識別用フィールドの表示文字列（無ければNone）
    pub fn field_text(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(match n.as_f64() {
                // 63.0 → "63"
                Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{}", f as i64),
                _ => n.to_string(),
            }),
            other => Some(other.to_string()),
        }
    }
}

/// 一括予測レスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<BatchResultRow>,
}
