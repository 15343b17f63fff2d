//! モデル詳細ページ

use cardiorisk_common::content::{
    CONFIDENCE_SCORE, MODEL_LAYERS, MODEL_TAGLINE, PREPROCESSING_STEPS,
};
use leptos::prelude::*;

#[component]
pub fn ModelDetailPage() -> impl IntoView {
    view! {
        <div class="details-page">
            <section class="page-header">
                <h2>"Model Architecture"</h2>
                <p class="text-muted">{MODEL_TAGLINE}</p>
            </section>
            <div class="details-grid">
                <div class="card">
                    <h3>"Network Structure"</h3>
                    <ol class="layer-list">
                        {MODEL_LAYERS
                            .iter()
                            .map(|layer| {
                                view! {
                                    <li>
                                        <h4>{layer.name}</h4>
                                        <p class="text-muted">{layer.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
                <div class="side-column">
                    <div class="card">
                        <h3>"Preprocessing"</h3>
                        <ul class="step-list">
                            {PREPROCESSING_STEPS
                                .iter()
                                .map(|step| view! { <li>{*step}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="card highlight">
                        <h3>"Confidence Score"</h3>
                        <span class="metric-value">{CONFIDENCE_SCORE.value}</span>
                        <p class="text-muted">{CONFIDENCE_SCORE.label}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
