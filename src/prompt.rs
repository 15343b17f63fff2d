//! 対話式の入力フォーム
//!
//! 選択肢のある項目はリストから選び、数値項目は空欄不可で入力する。

use crate::error::Result;
use cardiorisk_common::{FieldDescriptor, FieldKind, FormState};
use dialoguer::{Input, Select};

/// 未入力の項目だけ順に尋ねる
pub fn prompt_missing(form: &mut FormState) -> Result<()> {
    let missing: Vec<&'static FieldDescriptor> = form.missing_fields();
    if missing.is_empty() {
        return Ok(());
    }

    println!("Patient Vitals ({}項目)", missing.len());
    for field in missing {
        let value = prompt_field(field)?;
        form.set(field.name, value)?;
    }
    Ok(())
}

fn prompt_field(field: &FieldDescriptor) -> Result<String> {
    match field.kind {
        FieldKind::Categorical { options } => {
            let index = Select::new()
                .with_prompt(field.display_label())
                .items(options)
                .default(0)
                .interact()?;
            Ok(options[index].to_string())
        }
        FieldKind::Numeric { placeholder, .. } => {
            let value: String = Input::new()
                .with_prompt(format!("{} [{}]", field.display_label(), placeholder))
                .validate_with(|input: &String| -> std::result::Result<(), &str> {
                    if input.trim().is_empty() {
                        Err("入力してください")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?;
            Ok(value.trim().to_string())
        }
    }
}
