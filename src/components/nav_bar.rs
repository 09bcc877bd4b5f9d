//! Navigation Bar Component
//!
//! Brand plus tab buttons for switching between the dashboard views.

use leptos::prelude::*;

use crate::models::Tab;

/// Top navigation with one button per tab
#[component]
pub fn NavBar(
    #[prop(into)] active_tab: Signal<Tab>,
    #[prop(into)] on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-brand">
                <span class="nav-logo">"AI"</span>
                <h1>"Team Dashboard"</h1>
            </div>

            <div class="nav-tabs">
                {Tab::ALL.iter().map(|&tab| {
                    let tab_class = move || {
                        if active_tab.get() == tab { "nav-tab active" } else { "nav-tab" }
                    };
                    view! {
                        <button
                            class=tab_class
                            data-tab=tab.id()
                            on:click=move |_| on_select.run(tab)
                        >
                            <span class="nav-tab-icon">{tab.icon()}</span>
                            <span class="nav-tab-label">{tab.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </nav>
    }
}
