//! 単一予測の結果カード

use cardiorisk_common::Verdict;
use leptos::prelude::*;

#[component]
pub fn ResultCard(verdict: Verdict) -> impl IntoView {
    let theme = verdict.theme.as_str();
    let icon = if verdict.is_risk { "⚠" } else { "✓" };

    view! {
        <div class=format!("result-card {}", theme)>
            <span class=format!("badge badge-{}", theme)>{verdict.badge}</span>
            <div class="result-icon">{icon}</div>
            <h3 class="result-headline">{verdict.headline}</h3>
            <div class="result-probability">
                <span class="probability-value">{verdict.probability_text}</span>
                <span class="text-muted">"Probability Score"</span>
            </div>
            {verdict.recommendation.map(|text| view! { <p class="recommendation">{text}</p> })}
        </div>
    }
}
