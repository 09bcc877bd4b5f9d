use dashboard_api::UploadedFile;
use leptos::prelude::*;

use crate::format::{format_upload_date, sheet_badge};

/// Uploaded spreadsheets, newest as the backend orders them
#[component]
pub fn FileList(
    #[prop(into)] files: Signal<Vec<UploadedFile>>,
    #[prop(into)] selected: Signal<Option<i64>>,
    #[prop(into)] on_select: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="file-list card">
            <h3>"Uploaded Files"</h3>
            <Show
                when=move || !files.get().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <div class="empty-icon">"📂"</div>
                        <p>"No files uploaded yet"</p>
                    </div>
                }
            >
                <ul class="file-items">
                    <For
                        each=move || files.get()
                        key=|file| file.id
                        children=move |file| {
                            let id = file.id;
                            let row_class = move || {
                                if selected.get() == Some(id) { "file-item selected" } else { "file-item" }
                            };
                            view! {
                                <li class=row_class on:click=move |_| on_select.run(id)>
                                    <span class="file-icon">"📊"</span>
                                    <div class="file-meta">
                                        <span class="file-name">{file.filename.clone()}</span>
                                        <span class="file-date">
                                            "Uploaded: " {format_upload_date(&file.upload_date)}
                                        </span>
                                    </div>
                                    <span class="sheet-badge">{sheet_badge(file.sheet_count)}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
