//! Backend Status Banner
//!
//! Shown while the last liveness check failed.

use leptos::prelude::*;

#[component]
pub fn StatusBanner(
    #[prop(into)] base_url: String,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] retrying: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="status-banner" role="alert">
            <div class="status-banner-text">
                <h3>"Backend Server Not Connected"</h3>
                <p>"Please make sure the backend is running on " {base_url}</p>
            </div>
            <button
                class="status-banner-retry"
                disabled=move || retrying.get()
                on:click=move |_| on_retry.run(())
            >
                {move || if retrying.get() { "Checking..." } else { "Retry" }}
            </button>
        </div>
    }
}
