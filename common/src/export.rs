//! Excel生成（アップロード用テンプレート・一括結果）

use crate::fields::FIELD_METADATA;
use crate::types::BatchResultRow;
use rust_xlsxwriter::*;
use serde_json::Value;

/// 結果シートの列名を決める
///
/// 入力項目（定義順）→ その他の列（名前順）→ probability, prediction
pub fn result_columns(rows: &[BatchResultRow]) -> Vec<String> {
    let mut columns: Vec<String> = FIELD_METADATA
        .iter()
        .filter(|f| rows.iter().any(|r| r.fields.contains_key(f.name)))
        .map(|f| f.name.to_string())
        .collect();

    let mut extra: Vec<String> = rows
        .iter()
        .flat_map(|r| r.fields.keys())
        .filter(|k| !columns.iter().any(|c| c == *k))
        .cloned()
        .collect();
    extra.sort();
    extra.dedup();

    columns.extend(extra);
    columns.push("probability".to_string());
    columns.push("prediction".to_string());
    columns
}

/// 空のアップロード用テンプレート（見出し行のみ）
pub fn generate_template_buffer() -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Patients").map_err(|e| e.to_string())?;

    for (col, field) in FIELD_METADATA.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, field.name, &header)
            .map_err(|e| e.to_string())?;
        worksheet
            .set_column_width(col as u16, (field.name.len() as f64 + 4.0).max(12.0))
            .map_err(|e| e.to_string())?;
    }

    workbook.save_to_buffer().map_err(|e| e.to_string())
}

/// 一括予測の全行をExcelに出力
pub fn generate_results_buffer(rows: &[BatchResultRow]) -> Result<Vec<u8>, String> {
    let columns = result_columns(rows);
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let percent = Format::new().set_num_format("0.0%");
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Results").map_err(|e| e.to_string())?;

    worksheet
        .write_string_with_format(0, 0, "Row", &header)
        .map_err(|e| e.to_string())?;
    for (i, name) in columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, (i + 1) as u16, name, &header)
            .map_err(|e| e.to_string())?;
    }

    for (r, row) in rows.iter().enumerate() {
        let excel_row = (r + 1) as u32;
        worksheet
            .write_number(excel_row, 0, (r + 1) as f64)
            .map_err(|e| e.to_string())?;

        for (i, name) in columns.iter().enumerate() {
            let col = (i + 1) as u16;
            let written = match name.as_str() {
                "probability" => worksheet
                    .write_number_with_format(excel_row, col, row.probability, &percent)
                    .map(|_| ()),
                "prediction" => worksheet
                    .write_number(excel_row, col, u8::from(row.prediction) as f64)
                    .map(|_| ()),
                _ => match row.fields.get(name) {
                    None | Some(Value::Null) => Ok(()),
                    Some(Value::Number(n)) => worksheet
                        .write_number(excel_row, col, n.as_f64().unwrap_or_default())
                        .map(|_| ()),
                    Some(Value::Bool(b)) => worksheet.write_boolean(excel_row, col, *b).map(|_| ()),
                    Some(Value::String(s)) => worksheet.write_string(excel_row, col, s).map(|_| ()),
                    Some(other) => worksheet
                        .write_string(excel_row, col, other.to_string())
                        .map(|_| ()),
                },
            };
            written.map_err(|e| e.to_string())?;
        }
    }

    workbook.save_to_buffer().map_err(|e| e.to_string())
}
