//! 予測ページ（手入力 / 一括の切り替え）
//!
//! 状態はすべて PredictController が持つ。非同期の応答はチケットで照合し、
//! 古い応答は捨てる。

use crate::api::client;
use crate::components::{
    batch_table::BatchResultsTable, file_upload::FileUpload, prediction_form::PredictionForm,
    result_card::ResultCard,
};
use cardiorisk_common::{Mode, PredictController, SubmissionRecord};
use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[component]
pub fn PredictPage() -> impl IntoView {
    let controller = RwSignal::new(PredictController::new());

    let on_manual_submit = move |record: SubmissionRecord| {
        let mut ticket = None;
        controller.update(|c| ticket = Some(c.begin_manual()));
        let Some(ticket) = ticket else { return };

        spawn_local(async move {
            let outcome = client::predict_single(&record).await;
            if let Err(e) = &outcome {
                console::error!("single prediction failed:", e.to_string());
            }
            controller.update(|c| {
                if !c.complete_manual(ticket, outcome) {
                    console::debug!("stale single prediction response ignored");
                }
            });
        });
    };

    let on_file = move |file: Option<File>| {
        let mut ticket = None;
        controller.update(|c| ticket = c.file_changed(file.is_some()));
        let (Some(ticket), Some(file)) = (ticket, file) else { return };

        spawn_local(async move {
            let outcome = client::predict_batch(&file).await;
            if let Err(e) = &outcome {
                console::error!("batch prediction failed:", e.to_string());
            }
            controller.update(|c| {
                if !c.complete_batch(ticket, outcome) {
                    console::debug!("stale batch response ignored");
                }
            });
        });
    };

    let manual_loading = Signal::derive(move || controller.with(|c| c.manual().is_loading()));
    let batch_loading = move || controller.with(|c| c.batch().is_loading());
    let is_manual = move || controller.with(|c| c.active() == Mode::Manual);

    view! {
        <div class="predict-page">
            <section class="page-header">
                <h2>"New Assessment"</h2>
                <p class="text-muted">
                    "Analyze patient data to predict heart disease risk using our advanced AI model."
                </p>
            </section>

            <div class="mode-switch">
                {Mode::ALL
                    .iter()
                    .map(|&mode| {
                        view! {
                            <button
                                class=move || {
                                    if controller.with(|c| c.active() == mode) { "tab active" } else { "tab" }
                                }
                                on:click=move |_| controller.update(|c| c.switch_tab(mode))
                            >
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                controller
                    .with(|c| c.active_error())
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}

            <Show
                when=is_manual
                fallback=move || {
                    view! {
                        <div class="batch-panel">
                            <div class="card">
                                <FileUpload on_file_upload=on_file />
                            </div>
                            <Show when=batch_loading>
                                <div class="loading">
                                    <div class="spinner"></div>
                                    <p>"Processing large dataset..."</p>
                                </div>
                            </Show>
                            {move || {
                                controller
                                    .with(|c| c.batch_table())
                                    .map(|table| view! { <BatchResultsTable table=table /> })
                            }}
                        </div>
                    }
                }
            >
                <div class="manual-grid">
                    <div class="form-column">
                        <PredictionForm on_submit=on_manual_submit is_loading=manual_loading />
                    </div>
                    <div class="result-column">
                        {move || match controller.with(|c| c.manual_verdict()) {
                            Some(verdict) => view! { <ResultCard verdict=verdict /> }.into_any(),
                            None => {
                                view! {
                                    <div class="result-placeholder card">
                                        <div class="placeholder-icon">"♡"</div>
                                        <h3>"Ready to Analyze"</h3>
                                        <p class="text-muted">
                                            "Fill out the patient vitals form to generate a real-time risk assessment."
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
