//! 単一予測結果の表示モデル（結果カード）
//!
//! 判定はサーバの `prediction` のみで決まる。`probability` から閾値判定はしない。

use crate::types::PredictionResult;

/// 表示テーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Warning,
    Success,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Warning => "warning",
            Theme::Success => "success",
        }
    }
}

pub const HIGH_RISK_HEADLINE: &str = "High Risk Detected";
pub const LOW_RISK_HEADLINE: &str = "Low Risk Detected";

const RECOMMENDATION: &str = "The model indicates a high probability of cardiovascular issues. \
Immediate consultation with a cardiologist is recommended.";

/// 結果カードの内容
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub is_risk: bool,
    pub theme: Theme,
    pub headline: &'static str,
    pub badge: &'static str,
    pub probability_text: String,
    pub recommendation: Option<&'static str>,
}

impl Verdict {
    pub fn from_result(result: &PredictionResult) -> Self {
        let is_risk = result.prediction.is_risk();
        Self {
            is_risk,
            theme: if is_risk { Theme::Warning } else { Theme::Success },
            headline: if is_risk { HIGH_RISK_HEADLINE } else { LOW_RISK_HEADLINE },
            badge: if is_risk { "Attention Needed" } else { "Normal Results" },
            probability_text: format_probability(result.probability),
            recommendation: is_risk.then_some(RECOMMENDATION),
        }
    }
}

impl From<&PredictionResult> for Verdict {
    fn from(result: &PredictionResult) -> Self {
        Verdict::from_result(result)
    }
}

/// 確率をパーセント表記（小数1桁）: 0.4567 → "45.7%"
///
/// 端数0.5は切り上げ（`{:.1}` の偶数丸めは使わない）
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", (probability * 1000.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Prediction;

    fn result(prediction: Prediction, probability: f64) -> PredictionResult {
        PredictionResult { prediction, probability, risk: None }
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(0.4567), "45.7%");
        assert_eq!(format_probability(0.0), "0.0%");
        assert_eq!(format_probability(1.0), "100.0%");
        assert_eq!(format_probability(0.12345), "12.3%");
    }

    #[test]
    fn test_format_probability_ties_round_up() {
        // APIは小数4桁に丸めた値を返すので端数0.5がそのまま来る
        assert_eq!(format_probability(0.0625), "6.3%");
        assert_eq!(format_probability(0.3125), "31.3%");
    }

    #[test]
    fn test_risk_verdict() {
        let v = Verdict::from_result(&result(Prediction::Risk, 0.87));
        assert!(v.is_risk);
        assert_eq!(v.theme, Theme::Warning);
        assert_eq!(v.headline, "High Risk Detected");
        assert_eq!(v.badge, "Attention Needed");
        assert_eq!(v.probability_text, "87.0%");
        assert!(v.recommendation.is_some());
    }

    #[test]
    fn test_no_risk_verdict() {
        let v = Verdict::from_result(&result(Prediction::NoRisk, 0.2));
        assert!(!v.is_risk);
        assert_eq!(v.theme, Theme::Success);
        assert_eq!(v.headline, "Low Risk Detected");
        assert_eq!(v.badge, "Normal Results");
        assert!(v.recommendation.is_none());
    }

    #[test]
    fn test_verdict_ignores_probability() {
        // 低い確率でもサーバ判定が1なら高リスク表示
        let v = Verdict::from(&result(Prediction::Risk, 0.1));
        assert_eq!(v.headline, HIGH_RISK_HEADLINE);
        assert_eq!(v.theme, Theme::Warning);
        assert_eq!(v.probability_text, "10.0%");

        let v = Verdict::from(&result(Prediction::NoRisk, 0.95));
        assert_eq!(v.headline, LOW_RISK_HEADLINE);
        assert_eq!(v.theme, Theme::Success);
    }
}
