//! 一括予測結果テーブルの表示モデル
//!
//! 先頭10行のみ表示し、総件数は別に保持する。

use crate::types::BatchResultRow;

/// 表示する最大行数
pub const BATCH_DISPLAY_LIMIT: usize = 10;

/// 確率バーの色分け閾値
pub const BAR_THRESHOLD: f64 = 0.5;

pub const COLUMNS: [&str; 5] = ["Row", "Age", "Sex", "Risk Probability", "Diagnosis"];

/// 表示用の1行
#[derive(Debug, Clone, PartialEq)]
pub struct BatchTableRow {
    /// "#1" 形式
    pub index_label: String,
    pub age: String,
    pub sex: String,
    /// バー幅（0〜100）
    pub bar_width: f64,
    pub bar_high: bool,
    /// 整数パーセント表記
    pub probability_text: String,
    pub is_risk: bool,
    pub badge: &'static str,
}

impl BatchTableRow {
    fn from_row(position: usize, row: &BatchResultRow) -> Self {
        let is_risk = row.prediction.is_risk();
        Self {
            index_label: format!("#{}", position + 1),
            age: row.field_text("age").unwrap_or_else(|| "-".to_string()),
            sex: row.field_text("sex").unwrap_or_else(|| "-".to_string()),
            bar_width: (row.probability * 100.0).clamp(0.0, 100.0),
            bar_high: row.probability > BAR_THRESHOLD,
            probability_text: format!("{:.0}%", (row.probability * 100.0).round()),
            is_risk,
            badge: if is_risk { "HIGH RISK" } else { "LOW RISK" },
        }
    }
}

/// テーブル全体
#[derive(Debug, Clone, PartialEq)]
pub struct BatchTable {
    pub rows: Vec<BatchTableRow>,
    pub total: usize,
}

impl BatchTable {
    pub fn build(results: &[BatchResultRow]) -> Self {
        let rows = results
            .iter()
            .take(BATCH_DISPLAY_LIMIT)
            .enumerate()
            .map(|(i, row)| BatchTableRow::from_row(i, row))
            .collect();
        Self { rows, total: results.len() }
    }

    /// "N Records Processed"
    pub fn summary(&self) -> String {
        format!("{} Records Processed", self.total)
    }

    /// 10件を超える場合のみ表示
    pub fn footer(&self) -> Option<String> {
        (self.total > BATCH_DISPLAY_LIMIT)
            .then(|| format!("Showing first {} of {} records", BATCH_DISPLAY_LIMIT, self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Prediction;
    use serde_json::{json, Map};

    fn row(prediction: Prediction, probability: f64) -> BatchResultRow {
        BatchResultRow { prediction, probability, fields: Map::new() }
    }

    fn rows(n: usize) -> Vec<BatchResultRow> {
        (0..n).map(|i| row(Prediction::NoRisk, i as f64 / 100.0)).collect()
    }

    #[test]
    fn test_row_count_is_capped() {
        for n in [0, 1, 9, 10, 11, 25] {
            let table = BatchTable::build(&rows(n));
            assert_eq!(table.rows.len(), n.min(BATCH_DISPLAY_LIMIT), "n = {}", n);
            assert_eq!(table.total, n);
        }
    }

    #[test]
    fn test_footer_only_above_limit() {
        assert_eq!(BatchTable::build(&rows(10)).footer(), None);
        assert_eq!(
            BatchTable::build(&rows(11)).footer().as_deref(),
            Some("Showing first 10 of 11 records")
        );
        assert_eq!(BatchTable::build(&rows(0)).footer(), None);
    }

    #[test]
    fn test_summary() {
        assert_eq!(BatchTable::build(&rows(3)).summary(), "3 Records Processed");
    }

    #[test]
    fn test_row_index_labels() {
        let table = BatchTable::build(&rows(3));
        let labels: Vec<_> = table.rows.iter().map(|r| r.index_label.as_str()).collect();
        assert_eq!(labels, vec!["#1", "#2", "#3"]);
    }

    #[test]
    fn test_identifying_fields() {
        let mut with_fields = row(Prediction::Risk, 0.8);
        with_fields.fields.insert("age".into(), json!(61));
        with_fields.fields.insert("sex".into(), json!("Female"));

        let table = BatchTable::build(&[with_fields, row(Prediction::NoRisk, 0.1)]);
        assert_eq!(table.rows[0].age, "61");
        assert_eq!(table.rows[0].sex, "Female");
        assert_eq!(table.rows[1].age, "-");
        assert_eq!(table.rows[1].sex, "-");
    }

    #[test]
    fn test_probability_bar() {
        let table = BatchTable::build(&[
            row(Prediction::NoRisk, 0.5),
            row(Prediction::Risk, 0.51),
            row(Prediction::NoRisk, 0.0),
        ]);

        assert_eq!(table.rows[0].bar_width, 50.0);
        assert!(!table.rows[0].bar_high);
        assert_eq!(table.rows[0].probability_text, "50%");

        assert!(table.rows[1].bar_high);
        assert_eq!(table.rows[1].probability_text, "51%");

        assert_eq!(table.rows[2].bar_width, 0.0);
        assert_eq!(table.rows[2].probability_text, "0%");
    }

    #[test]
    fn test_probability_text_ties_round_up() {
        let table = BatchTable::build(&[
            row(Prediction::NoRisk, 0.125),
            row(Prediction::Risk, 0.625),
            row(Prediction::NoRisk, 0.005),
        ]);

        assert_eq!(table.rows[0].probability_text, "13%");
        assert_eq!(table.rows[1].probability_text, "63%");
        assert!(table.rows[1].bar_high);
        assert_eq!(table.rows[2].probability_text, "1%");
    }

    #[test]
    fn test_badge_follows_row_prediction() {
        // バッジは各行のprediction、バー色は確率で独立に決まる
        let table = BatchTable::build(&[row(Prediction::Risk, 0.3), row(Prediction::NoRisk, 0.7)]);

        assert_eq!(table.rows[0].badge, "HIGH RISK");
        assert!(!table.rows[0].bar_high);
        assert_eq!(table.rows[1].badge, "LOW RISK");
        assert!(table.rows[1].bar_high);
    }
}
