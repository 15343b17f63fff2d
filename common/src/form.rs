//! 手入力フォームの状態
//!
//! 入力のたびに1フィールドずつ上書きし、送信時に必須チェックだけ行う。
//! 送信後もリセットしない。

use crate::error::SubmissionError;
use crate::fields::{find_field, FieldDescriptor, FIELD_METADATA};
use crate::types::SubmissionRecord;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    record: SubmissionRecord,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存レコードから復元（未知のフィールドはエラー）
    pub fn from_record(record: SubmissionRecord) -> Result<Self, SubmissionError> {
        if let Some((name, _)) = record.iter().find(|(name, _)| find_field(name).is_none()) {
            return Err(SubmissionError::UnknownField(name.clone()));
        }
        Ok(Self { record })
    }

    /// 1フィールドを更新
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), SubmissionError> {
        let field = find_field(name).ok_or_else(|| SubmissionError::UnknownField(name.to_string()))?;
        self.record.set(field.name, value);
        Ok(())
    }

    /// `name=value` 形式の文字列を取り込む
    pub fn set_pair(&mut self, pair: &str) -> Result<(), SubmissionError> {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| SubmissionError::UnknownField(pair.to_string()))?;
        self.set(name.trim(), value.trim())
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.record.get(name)
    }

    pub fn record(&self) -> &SubmissionRecord {
        &self.record
    }

    /// 未入力フィールド（定義順）
    pub fn missing_fields(&self) -> Vec<&'static FieldDescriptor> {
        FIELD_METADATA
            .iter()
            .filter(|f| !self.record.is_filled(f.name))
            .collect()
    }

    /// 送信用レコードを取り出す
    pub fn submit(&self) -> Result<SubmissionRecord, SubmissionError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SubmissionError::MissingFields(
                missing.iter().map(|f| f.name.to_string()).collect(),
            ));
        }
        Ok(self.record.clone())
    }
}

#[cfg(test)]
pub(crate) fn complete_form() -> FormState {
    let mut form = FormState::new();
    for field in FIELD_METADATA {
        let value = match field.options().first() {
            Some(opt) => (*opt).to_string(),
            None => "1".to_string(),
        };
        form.set(field.name, value).expect("定義済みフィールド");
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_form_reports_all_missing() {
        let form = FormState::new();
        assert_eq!(form.missing_fields().len(), FIELD_METADATA.len());
        assert!(matches!(form.submit(), Err(SubmissionError::MissingFields(v)) if v.len() == 13));
    }

    #[test]
    fn test_submit_complete_form() {
        let form = complete_form();
        let record = form.submit().expect("全項目入力済み");
        assert_eq!(record.len(), FIELD_METADATA.len());
        assert_eq!(record, *form.record());
    }

    #[test]
    fn test_submit_does_not_reset() {
        let form = complete_form();
        let _ = form.submit().expect("送信");
        assert_eq!(form.value("sex"), Some(&json!("Male")));
    }

    #[test]
    fn test_cleared_field_blocks_submit() {
        let mut form = complete_form();
        form.set("oldpeak", "").unwrap();

        let err = form.submit().unwrap_err();
        assert_eq!(err, SubmissionError::MissingFields(vec!["oldpeak".into()]));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = FormState::new();
        let err = form.set("weight", "80").unwrap_err();
        assert_eq!(err, SubmissionError::UnknownField("weight".into()));
    }

    #[test]
    fn test_set_pair() {
        let mut form = FormState::new();
        form.set_pair("age=54").unwrap();
        form.set_pair(" chest_pain_type = Typical angina ").unwrap();

        assert_eq!(form.value("age"), Some(&json!("54")));
        assert_eq!(form.value("chest_pain_type"), Some(&json!("Typical angina")));
        assert!(form.set_pair("no-separator").is_err());
    }

    #[test]
    fn test_values_sent_verbatim() {
        let mut form = complete_form();
        form.set("age", "054").unwrap();
        let record = form.submit().unwrap();
        // 型変換はしない
        assert_eq!(record.get("age"), Some(&json!("054")));
    }

    #[test]
    fn test_from_record_rejects_unknown() {
        let mut record = SubmissionRecord::new();
        record.set("age", 54);
        record.set("height", 170);
        assert!(matches!(
            FormState::from_record(record),
            Err(SubmissionError::UnknownField(name)) if name == "height"
        ));
    }
}
