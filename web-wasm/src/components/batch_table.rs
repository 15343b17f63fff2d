//! 一括予測の結果テーブル

use cardiorisk_common::batch_table::COLUMNS;
use cardiorisk_common::BatchTable;
use leptos::prelude::*;

#[component]
pub fn BatchResultsTable(table: BatchTable) -> impl IntoView {
    let summary = table.summary();
    let footer = table.footer();

    view! {
        <div class="batch-results card">
            <div class="batch-header">
                <h3>"Analysis Results"</h3>
                <span class="badge">{summary}</span>
            </div>
            <table class="batch-table">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {table
                        .rows
                        .into_iter()
                        .map(|row| {
                            let bar_class = if row.bar_high { "bar-fill high" } else { "bar-fill low" };
                            let badge_class = if row.is_risk { "badge badge-warning" } else { "badge badge-success" };
                            view! {
                                <tr>
                                    <td class="text-muted">{row.index_label}</td>
                                    <td>{row.age}</td>
                                    <td>{row.sex}</td>
                                    <td>
                                        <div class="bar">
                                            <div class="bar-track">
                                                <div
                                                    class=bar_class
                                                    style=format!("width: {}%", row.bar_width)
                                                ></div>
                                            </div>
                                            <span>{row.probability_text}</span>
                                        </div>
                                    </td>
                                    <td>
                                        <span class=badge_class>{row.badge}</span>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            {footer.map(|text| view! { <div class="batch-footer text-muted">{text}</div> })}
        </div>
    }
}
