//! 手入力フォーム

use cardiorisk_common::{FieldDescriptor, FieldKind, FormState, SubmissionRecord, FIELD_METADATA};
use gloo::console;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn PredictionForm<F>(
    on_submit: F,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView
where
    F: Fn(SubmissionRecord) + 'static + Clone + Send + Sync,
{
    let form = RwSignal::new(FormState::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // required属性をすり抜けた場合の保険
        match form.with_untracked(|f| f.submit()) {
            Ok(record) => on_submit(record),
            Err(e) => console::warn!("form incomplete:", e.to_string()),
        }
    };

    view! {
        <form class="prediction-form card" on:submit=handle_submit>
            <div class="form-header">
                <h3>"Patient Vitals"</h3>
                <p class="text-muted">"Enter clinical parameters for analysis"</p>
            </div>
            <div class="form-grid">
                {FIELD_METADATA
                    .iter()
                    .map(|field| view! { <FieldInput field=field form=form /> })
                    .collect_view()}
            </div>
            <button class="btn btn-primary" type="submit" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Processing..." } else { "Analyze Risk Factors" }}
            </button>
        </form>
    }
}

#[component]
fn FieldInput(field: &'static FieldDescriptor, form: RwSignal<FormState>) -> impl IntoView {
    let name = field.name;
    let on_value = move |value: String| {
        form.update(|f| {
            if let Err(e) = f.set(name, value) {
                console::warn!(e.to_string());
            }
        });
    };

    let control = match field.kind {
        FieldKind::Categorical { options } => view! {
            <select
                name=name
                required=true
                on:change=move |ev| on_value(event_target_value(&ev))
            >
                <option value="" disabled=true selected=true>"Select option"</option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=*opt>{*opt}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Numeric { step, placeholder, .. } => view! {
            <input
                type="number"
                name=name
                step=step
                placeholder=placeholder
                required=true
                on:input=move |ev| on_value(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <label class="field">
            <span class="field-label">{field.display_label()}</span>
            {control}
        </label>
    }
}
