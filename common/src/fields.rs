//! 入力フィールド定義
//!
//! フォーム描画・必須チェック・アップロード用テンプレートの見出しに使う静的テーブル。
//! `name` は予測APIのフィールド名そのもの（綴りを含めて変更しないこと）。

/// 入力種別
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// 数値入力
    Numeric {
        step: &'static str,
        unit: Option<&'static str>,
        placeholder: &'static str,
    },
    /// 選択肢から選ぶ
    Categorical { options: &'static [&'static str] },
}

/// フィールド定義
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn is_categorical(&self) -> bool {
        matches!(self.kind, FieldKind::Categorical { .. })
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Categorical { options } => options,
            FieldKind::Numeric { .. } => &[],
        }
    }

    /// 単位付きラベル（例: "Resting Blood Pressure (mm Hg)"）
    pub fn display_label(&self) -> String {
        match self.kind {
            FieldKind::Numeric { unit: Some(unit), .. } => format!("{} ({})", self.label, unit),
            _ => self.label.to_string(),
        }
    }
}

const fn numeric(
    name: &'static str,
    label: &'static str,
    step: &'static str,
    unit: Option<&'static str>,
    placeholder: &'static str,
) -> FieldDescriptor {
    FieldDescriptor { name, label, kind: FieldKind::Numeric { step, unit, placeholder } }
}

const fn categorical(
    name: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> FieldDescriptor {
    FieldDescriptor { name, label, kind: FieldKind::Categorical { options } }
}

/// 予測モデルの入力13項目
pub const FIELD_METADATA: &[FieldDescriptor] = &[
    numeric("age", "Age", "1", Some("years"), "e.g. 54"),
    categorical("sex", "Sex", &["Male", "Female"]),
    categorical(
        "chest_pain_type",
        "Chest Pain Type",
        &["Typical angina", "Atypical angina", "Non-anginal pain", "Asymptomatic"],
    ),
    numeric("resting_blood_pressure", "Resting Blood Pressure", "1", Some("mm Hg"), "e.g. 130"),
    numeric("cholestoral", "Serum Cholesterol", "1", Some("mg/dl"), "e.g. 246"),
    categorical(
        "fasting_blood_sugar",
        "Fasting Blood Sugar",
        &["Greater than 120 mg/ml", "Lower than 120 mg/ml"],
    ),
    categorical(
        "rest_ecg",
        "Resting ECG",
        &["Normal", "ST-T wave abnormality", "Left ventricular hypertrophy"],
    ),
    numeric("Max_heart_rate", "Max Heart Rate", "1", Some("bpm"), "e.g. 150"),
    categorical("exercise_induced_angina", "Exercise Induced Angina", &["Yes", "No"]),
    numeric("oldpeak", "ST Depression (Oldpeak)", "0.1", None, "e.g. 1.0"),
    categorical("slope", "ST Slope", &["Upsloping", "Flat", "Downsloping"]),
    categorical(
        "vessels_colored_by_flourosopy",
        "Vessels Colored by Fluoroscopy",
        &["0", "1", "2", "3", "4"],
    ),
    categorical("thalassemia", "Thalassemia", &["Normal", "Fixed defect", "Reversable defect"]),
];

/// 名前でフィールド定義を検索
pub fn find_field(name: &str) -> Option<&'static FieldDescriptor> {
    FIELD_METADATA.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_count() {
        assert_eq!(FIELD_METADATA.len(), 13);
    }

    #[test]
    fn test_field_names_unique() {
        let names: HashSet<_> = FIELD_METADATA.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), FIELD_METADATA.len());
    }

    #[test]
    fn test_wire_names_preserved() {
        assert!(find_field("cholestoral").is_some());
        assert!(find_field("Max_heart_rate").is_some());
        assert!(find_field("vessels_colored_by_flourosopy").is_some());
        assert!(find_field("max_heart_rate").is_none());
    }

    #[test]
    fn test_categorical_fields_have_options() {
        for field in FIELD_METADATA.iter().filter(|f| f.is_categorical()) {
            assert!(!field.options().is_empty(), "選択肢が空: {}", field.name);
        }
    }

    #[test]
    fn test_numeric_field_has_no_options() {
        let age = find_field("age").expect("age が無い");
        assert!(!age.is_categorical());
        assert!(age.options().is_empty());
    }

    #[test]
    fn test_oldpeak_step() {
        let oldpeak = find_field("oldpeak").expect("oldpeak が無い");
        assert!(matches!(oldpeak.kind, FieldKind::Numeric { step: "0.1", .. }));
    }

    #[test]
    fn test_display_label_with_unit() {
        let bp = find_field("resting_blood_pressure").unwrap();
        assert_eq!(bp.display_label(), "Resting Blood Pressure (mm Hg)");
        let sex = find_field("sex").unwrap();
        assert_eq!(sex.display_label(), "Sex");
    }
}
