//! Upload Section Component
//!
//! Drag-and-drop target plus a file picker. Only `.xlsx`/`.xls` names are
//! accepted; anything else is rejected with an alert before the file is read.

use dashboard_api::{is_spreadsheet_name, FileUpload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::commands::{self, UNSUPPORTED_FILE_MESSAGE};
use crate::notify;

async fn read_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[component]
pub fn UploadSection(
    /// Receives every validated file
    #[prop(into)]
    on_upload: Callback<FileUpload>,
    /// Shell-level upload in flight
    #[prop(into)]
    uploading: Signal<bool>,
) -> impl IntoView {
    let (drag_active, set_drag_active) = signal(false);
    let (reading, set_reading) = signal(false);

    let busy = move || uploading.get() || reading.get();

    let accept_file = move |file: File| {
        let filename = file.name();
        if !is_spreadsheet_name(&filename) {
            debug!("[UploadSection] Rejected {}", filename);
            notify::alert(UNSUPPORTED_FILE_MESSAGE);
            return;
        }

        set_reading.set(true);
        spawn_local(async move {
            match read_bytes(&file).await {
                Ok(bytes) => match commands::prepare_upload(filename, bytes) {
                    Ok(upload) => on_upload.run(upload),
                    Err(message) => notify::alert(&message),
                },
                Err(e) => {
                    error!("[UploadSection] Could not read {}: {}", filename, e);
                    notify::alert(&format!("Upload failed: {}", e));
                }
            }
            set_reading.set(false);
        });
    };

    let on_drag = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        match ev.type_().as_str() {
            "dragenter" | "dragover" => set_drag_active.set(true),
            "dragleave" => set_drag_active.set(false),
            _ => {}
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);

        if busy() {
            return;
        }
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            accept_file(file);
        }
    };

    let on_pick = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Picking the same file twice must fire `change` again.
        input.set_value("");
        if let Some(file) = file {
            accept_file(file);
        }
    };

    let zone_class = move || {
        let mut class = "upload-zone".to_string();
        if drag_active.get() {
            class.push_str(" drag-active");
        }
        if busy() {
            class.push_str(" busy");
        }
        class
    };

    view! {
        <div class="upload-section card">
            <div
                class=zone_class
                on:dragenter=on_drag
                on:dragover=on_drag
                on:dragleave=on_drag
                on:drop=on_drop
            >
                <Show
                    when=busy
                    fallback=move || view! {
                        <div class="upload-icon">"📁"</div>
                        <h3>"Drop your Excel file here"</h3>
                        <p class="muted">"or click to browse (.xlsx, .xls)"</p>
                        <label class="upload-button">
                            "Choose File"
                            <input
                                type="file"
                                class="upload-input"
                                accept=".xlsx,.xls"
                                disabled=busy
                                on:change=on_pick
                            />
                        </label>
                    }
                >
                    <div class="spinner"></div>
                    <h3>"Processing your file..."</h3>
                    <p class="muted">"Parsing sheets and updating analytics"</p>
                </Show>
            </div>
        </div>
    }
}
