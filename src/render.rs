//! ターミナル表示

use cardiorisk_common::batch_table::COLUMNS;
use cardiorisk_common::{BatchTable, FieldKind, Theme, Verdict, FIELD_METADATA};

/// 結果カード
pub fn render_verdict(verdict: &Verdict) -> String {
    let icon = match verdict.theme {
        Theme::Warning => "⚠",
        Theme::Success => "✔",
    };

    let mut out = String::new();
    out.push_str(&format!("{} {}  [{}]\n", icon, verdict.headline, verdict.badge));
    out.push_str(&format!("  Probability Score: {}\n", verdict.probability_text));
    if let Some(text) = verdict.recommendation {
        out.push_str(&format!("\n  Recommendation\n  {}\n", text));
    }
    out
}

const BAR_CELLS: usize = 10;

fn bar(width_percent: f64) -> String {
    let filled = ((width_percent / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

/// 一括結果テーブル（先頭10行 + フッタ）
pub fn render_batch_table(table: &BatchTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("Analysis Results ({})\n\n", table.summary()));
    out.push_str(&format!(
        "{:<6} {:<6} {:<8} {:<22} {}\n",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4]
    ));

    for row in &table.rows {
        let marker = if row.bar_high { "!" } else { " " };
        out.push_str(&format!(
            "{:<6} {:<6} {:<8} {} {:>4}{} {}\n",
            row.index_label,
            row.age,
            row.sex,
            bar(row.bar_width),
            row.probability_text,
            marker,
            row.badge,
        ));
    }

    if let Some(footer) = table.footer() {
        out.push_str(&format!("\n{}\n", footer));
    }
    out
}

/// 入力項目一覧
pub fn render_fields() -> String {
    let mut out = String::new();
    for field in FIELD_METADATA {
        let detail = match field.kind {
            FieldKind::Numeric { step, .. } => format!("number (step {})", step),
            FieldKind::Categorical { options } => options.join(" | "),
        };
        out.push_str(&format!("{:<32} {:<40} {}\n", field.name, field.display_label(), detail));
    }
    out
}
