//! Excel出力（テンプレート・一括結果）

use crate::error::{CardioRiskError, Result};
use cardiorisk_common::export::{generate_results_buffer, generate_template_buffer};
use cardiorisk_common::BatchResultRow;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// 一括アップロード用テンプレートを書き出す
pub fn write_template(output_path: &Path) -> Result<()> {
    let buffer = generate_template_buffer().map_err(CardioRiskError::ExcelGeneration)?;
    write_buffer(output_path, &buffer)
}

/// 一括予測の全行を書き出す
pub fn write_results(rows: &[BatchResultRow], output_path: &Path) -> Result<()> {
    let buffer = generate_results_buffer(rows).map_err(CardioRiskError::ExcelGeneration)?;
    write_buffer(output_path, &buffer)
}

/// 出力先がディレクトリの場合のファイル名
pub fn results_path(output: &Path, now: DateTime<Local>) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("cardiorisk-results-{}.xlsx", now.format("%Y%m%d-%H%M%S")))
    } else {
        output.to_path_buf()
    }
}

fn write_buffer(output_path: &Path, buffer: &[u8]) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
