//! スプレッドシートのアップロード（ドラッグ&ドロップ / クリック選択）

use cardiorisk_common::upload::{UploadSlot, ACCEPT_ATTR};
use cardiorisk_common::{select_upload, UploadCandidate};
use gloo::console;
use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList, HtmlInputElement, MouseEvent};

#[component]
pub fn FileUpload<F>(on_file_upload: F) -> impl IntoView
where
    F: Fn(Option<File>) + 'static + Clone + Send + Sync,
{
    let selected = RwSignal::new(UploadSlot::<UploadCandidate>::new());
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    // 1件だけ受け付ける。複数・非対応形式は丸ごと無視
    let handle_files = {
        let on_file_upload = on_file_upload.clone();
        move |files: FileList| {
            let list: Vec<File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
            let candidates: Vec<UploadCandidate> = list
                .iter()
                .map(|f| UploadCandidate::new(f.name(), f.type_(), f.size() as u64))
                .collect();

            match select_upload(&candidates) {
                Ok(index) => {
                    if let Some(candidate) = candidates.into_iter().nth(index) {
                        selected.update(|slot| {
                            slot.replace(candidate);
                        });
                    }
                    on_file_upload(list.into_iter().nth(index));
                }
                Err(e) => console::warn!("upload rejected:", e.to_string()),
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                handle_files(files);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            handle_files(files);
        }
    };

    let open_dialog = move |_: MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let remove_file = move |ev: MouseEvent| {
        ev.stop_propagation();
        selected.update(|slot| {
            slot.clear();
        });
        // 同じファイルを選び直せるように
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
        on_file_upload(None);
    };

    view! {
        <div class="file-upload">
            <input
                node_ref=input_ref
                type="file"
                class="hidden"
                accept=ACCEPT_ATTR
                on:change=on_change
            />
            <Show
                when=move || selected.with(|slot| slot.current().is_none())
                fallback=move || {
                    let candidate = selected.with(|slot| slot.current().cloned());
                    view! {
                        <div class="file-selected">
                            <div class="file-icon">"📄"</div>
                            <div class="file-info">
                                <p class="file-name">
                                    {candidate.as_ref().map(|c| c.name.clone()).unwrap_or_default()}
                                </p>
                                <p class="text-muted">
                                    {candidate.as_ref().map(|c| c.status_line()).unwrap_or_default()}
                                </p>
                            </div>
                            <button class="btn-icon" title="Remove file" on:click=remove_file.clone()>
                                "✕"
                            </button>
                        </div>
                    }
                }
            >
                <div
                    class=move || {
                        if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
                    }
                    on:drop=on_drop.clone()
                    on:dragover=on_dragover
                    on:dragleave=on_dragleave
                    on:click=open_dialog
                >
                    <div class="upload-icon">"⬆"</div>
                    <p class="upload-title">
                        {move || if is_dragover.get() { "Drop file here" } else { "Upload Dataset" }}
                    </p>
                    <p class="text-muted">"Drag & drop or click to browse"</p>
                    <p class="text-muted small">"Supported formats: .XLSX, .CSV"</p>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::{DataTransfer, Event, EventInit, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    /// 再描画を待つ
    async fn next_tick() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            let window = web_sys::window().expect("window");
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
                .expect("setTimeout");
        });
        JsFuture::from(promise).await.expect("tick");
    }

    fn mount_upload(received: Arc<Mutex<Vec<Option<String>>>>) -> HtmlElement {
        let _ = leptos::task::Executor::init_wasm_bindgen();
        let document = web_sys::window().expect("window").document().expect("document");
        let container: HtmlElement = document
            .create_element("div")
            .expect("div")
            .dyn_into()
            .expect("HtmlElement");
        document.body().expect("body").append_child(&container).expect("append");

        let handle = leptos::mount::mount_to(container.clone(), move || {
            view! {
                <FileUpload on_file_upload=move |file: Option<File>| {
                    received.lock().unwrap().push(file.map(|f| f.name()));
                } />
            }
        });
        // テスト終了まで表示したままにする
        std::mem::forget(handle);
        container
    }

    fn choose_file(container: &HtmlElement, name: &str) {
        let parts = js_sys::Array::of1(&JsValue::from_str("age,sex\n63,Male\n"));
        let file = File::new_with_str_sequence(&parts, name).expect("File");
        let transfer = DataTransfer::new().expect("DataTransfer");
        transfer.items().add_with_file(&file).expect("add file");

        let input: HtmlInputElement = container
            .query_selector("input[type=file]")
            .expect("query")
            .expect("file input")
            .dyn_into()
            .expect("HtmlInputElement");
        input.set_files(transfer.files().as_ref());

        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("change", &init).expect("Event");
        input.dispatch_event(&event).expect("dispatch");
    }

    #[wasm_bindgen_test]
    async fn wasm_remove_file_notifies_none() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let container = mount_upload(received.clone());

        choose_file(&container, "patients.csv");
        next_tick().await;
        assert_eq!(*received.lock().unwrap(), vec![Some("patients.csv".to_string())]);
        assert!(container.query_selector(".file-selected").unwrap().is_some());

        let remove: HtmlElement = container
            .query_selector(".btn-icon")
            .unwrap()
            .expect("remove button")
            .dyn_into()
            .unwrap();
        remove.click();
        next_tick().await;

        assert_eq!(
            *received.lock().unwrap(),
            vec![Some("patients.csv".to_string()), None]
        );
        assert!(container.query_selector(".upload-area").unwrap().is_some());
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn wasm_unsupported_file_is_ignored() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let container = mount_upload(received.clone());

        choose_file(&container, "notes.txt");
        next_tick().await;

        assert!(received.lock().unwrap().is_empty());
        assert!(container.query_selector(".upload-area").unwrap().is_some());
        container.remove();
    }
}
