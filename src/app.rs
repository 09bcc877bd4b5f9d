//! Team Dashboard Frontend App
//!
//! View shell: backend liveness check, shared data fetches, tab switching and uploads.

use dashboard_api::FileUpload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::{self, UPLOAD_SUCCESS_MESSAGE};
use crate::components::{
    Dashboard, FileList, InsightsPanel, LoadingScreen, NavBar, QueryPanel, SheetTable,
    StatusBanner, UploadSection,
};
use crate::context::{api_config, AppContext};
use crate::models::{BackendStatus, Tab};
use crate::notify;
use crate::store::{
    store_apply_snapshot, store_begin_initialize, store_finish_initialize, AppState,
    AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(api_config());
    let base_url = ctx.base_url();

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Liveness check, then files/overview/insights
    let run_initialize = move |first_run: bool| {
        store_begin_initialize(&store, first_run);
        let api = ctx.api();
        spawn_local(async move {
            let outcome = commands::initialize(&api).await;
            store_finish_initialize(&store, outcome);
        });
    };

    Effect::new(move |_| run_initialize(true));

    let on_upload = Callback::new(move |upload: FileUpload| {
        store.uploading().set(true);
        let api = ctx.api();
        spawn_local(async move {
            let result = commands::upload_and_refresh(&api, upload).await;
            if let Ok(snapshot) = &result {
                store_apply_snapshot(&store, snapshot.clone());
            }
            store.uploading().set(false);
            match result {
                Ok(_) => notify::alert(UPLOAD_SUCCESS_MESSAGE),
                Err(message) => notify::alert(&message),
            }
        });
    });

    // Memos so whole-store writes only notify on real changes.
    let active_tab = Memo::new(move |_| store.active_tab().get());
    let initializing = Memo::new(move |_| store.initializing().get());
    let insights = Memo::new(move |_| store.insights().get());
    let disconnected = move || store.backend_status().get() == BackendStatus::Disconnected;

    let tab_content = move || {
        if initializing.get() {
            return view! { <LoadingScreen /> }.into_any();
        }
        match active_tab.get() {
            Tab::Dashboard => view! {
                {move || store.overview().get().map(|data| view! { <Dashboard data=data /> })}
                <div class="panel-grid">
                    <InsightsPanel insights=insights />
                    <QueryPanel />
                </div>
            }
            .into_any(),
            Tab::Upload => view! {
                <UploadSection
                    on_upload=on_upload
                    uploading=Signal::derive(move || store.uploading().get())
                />
                <FileList
                    files=Signal::derive(move || store.files().get())
                    selected=Signal::derive(move || store.selected_file().get())
                    on_select=move |id| store.selected_file().set(Some(id))
                />
                <SheetTable file_id=Signal::derive(move || store.selected_file().get()) />
            }
            .into_any(),
            Tab::Insights => view! { <InsightsPanel insights=insights /> }.into_any(),
            Tab::Query => view! { <QueryPanel /> }.into_any(),
        }
    };

    view! {
        <div class="app-layout">
            <NavBar
                active_tab=Signal::from(active_tab)
                on_select=move |tab| store.active_tab().set(tab)
            />

            <main class="main-content">
                <Show when=disconnected>
                    <StatusBanner
                        base_url=base_url.clone()
                        on_retry=move |_| run_initialize(false)
                        retrying=Signal::derive(move || store.retrying().get())
                    />
                </Show>

                <header class="page-header">
                    <h2>{move || active_tab.get().title()}</h2>
                    <p class="muted">{move || active_tab.get().subtitle()}</p>
                </header>

                <div class="tab-content">{tab_content}</div>
            </main>
        </div>
    }
}
