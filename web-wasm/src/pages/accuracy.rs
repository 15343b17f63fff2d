//! モデル精度ページ

use cardiorisk_common::content::{PlotCard, ACCURACY_METRICS, ACCURACY_PLOTS};
use leptos::prelude::*;

#[component]
pub fn ModelAccuracyPage() -> impl IntoView {
    view! {
        <div class="accuracy-page">
            <section class="page-header split">
                <div>
                    <h2>"Model Performance"</h2>
                    <p class="text-muted">"Evaluation metrics and validation results."</p>
                </div>
                <div class="metrics">
                    {ACCURACY_METRICS
                        .iter()
                        .map(|m| {
                            view! {
                                <div class="metric">
                                    <span class="metric-value">{m.value}</span>
                                    <span class="metric-label">{m.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <div class="plot-grid">
                {ACCURACY_PLOTS.iter().map(|plot| view! { <PlotView plot=*plot /> }).collect_view()}
            </div>
        </div>
    }
}

/// 読込に失敗したら代替画像に差し替える
#[component]
fn PlotView(plot: PlotCard) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <div class="plot-card card">
            <div class="plot-image">
                <img
                    src=move || plot.image_src(failed.get())
                    alt=plot.title
                    on:error=move |_| set_failed.set(true)
                />
            </div>
            <h3>{plot.title}</h3>
            <p class="text-muted">{plot.description}</p>
        </div>
    }
}
