//! Ask AI Panel
//!
//! Free-form questions to `/ask_ai`, with example prompts, the last few
//! exchanges and running stats.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::commands::{self, QueryOutcome};
use crate::context::use_app_context;
use crate::history::QueryHistory;

pub const EXAMPLE_QUERIES: [&str; 8] = [
    "How many tasks are pending?",
    "Who are the top performers this week?",
    "Show me tasks that are overdue",
    "What's the completion rate by assignee?",
    "How many tasks are blocked?",
    "Show task distribution by status",
    "Who has the most completed tasks?",
    "What's our team's average completion rate?",
];

#[component]
pub fn QueryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());
    let (response, set_response) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let history = RwSignal::new(QueryHistory::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked();
        if commands::is_blank_query(&text) {
            return;
        }

        set_loading.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match commands::submit_query(&api, &text).await {
                QueryOutcome::Answered(entry) => {
                    set_response.set(entry.response.clone());
                    history.update(|h| h.push(entry));
                    set_query.set(String::new());
                }
                QueryOutcome::Failed(message) => set_response.set(message),
                QueryOutcome::Skipped => {}
            }
            set_loading.set(false);
        });
    };

    let stats = move || history.with(|h| h.stats());

    view! {
        <section class="query-panel card">
            <div class="panel-header centered">
                <div class="panel-icon">"💬"</div>
                <h2>"Ask AI Assistant"</h2>
                <p class="muted">"Ask anything about your team's performance and tasks"</p>
            </div>

            <form class="query-form" on:submit=on_submit>
                <input
                    type="text"
                    class="query-input"
                    placeholder="Ask me anything about your team's performance..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    disabled=move || loading.get()
                />
                <button
                    type="submit"
                    class="query-submit"
                    disabled=move || loading.get() || commands::is_blank_query(&query.get())
                >
                    {move || if loading.get() { "Thinking..." } else { "Ask AI" }}
                </button>
            </form>

            <div class="example-queries">
                <h3>"Try asking:"</h3>
                <div class="example-grid">
                    {EXAMPLE_QUERIES.iter().map(|&example| view! {
                        <button class="example-query" on:click=move |_| set_query.set(example.to_string())>
                            <span class="example-icon">"💡"</span>
                            {example}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <Show when=move || !response.get().is_empty()>
                <div class="query-response">
                    <h3>"AI Response:"</h3>
                    <div class="response-text">{move || response.get()}</div>
                </div>
            </Show>

            <Show when=move || history.with(|h| !h.is_empty())>
                <div class="query-history">
                    <h3>"📚 Recent Conversations"</h3>
                    <ul>
                        {move || history.with(|h| h.recent()).into_iter().map(|entry| view! {
                            <li class="history-entry">
                                <p class="history-query"><span class="badge-q">"Q"</span>{entry.query.clone()}</p>
                                <p class="history-response"><span class="badge-a">"A"</span>{entry.preview()}</p>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </Show>

            <div class="query-stats">
                <div class="query-stat">
                    <div class="query-stat-value">{move || stats().asked}</div>
                    <div class="query-stat-label">"Queries Asked"</div>
                </div>
                <div class="query-stat">
                    <div class="query-stat-value">{move || stats().successful}</div>
                    <div class="query-stat-label">"Successful"</div>
                </div>
                <div class="query-stat">
                    <div class="query-stat-value">{move || stats().unique}</div>
                    <div class="query-stat-label">"Unique Questions"</div>
                </div>
            </div>
        </section>
    }
}
