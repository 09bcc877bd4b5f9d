//! Sheet Table Component
//!
//! Parsed task rows of the selected upload.

use dashboard_api::SheetTask;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use crate::commands;
use crate::context::use_app_context;
use crate::format::or_dash;

/// A response is shown only while its file is still the selected one.
fn is_current(selected: Option<i64>, requested: i64) -> bool {
    selected == Some(requested)
}

#[component]
pub fn SheetTable(#[prop(into)] file_id: Signal<Option<i64>>) -> impl IntoView {
    let ctx = use_app_context();
    let (tasks, set_tasks) = signal(Vec::<SheetTask>::new());
    let (loading, set_loading) = signal(false);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let Some(id) = file_id.get() else {
            set_tasks.set(Vec::new());
            return;
        };
        set_loading.set(true);
        set_load_error.set(None);
        let api = ctx.api();
        spawn_local(async move {
            let result = commands::load_sheet_data(&api, id).await;
            if !is_current(file_id.get_untracked(), id) {
                debug!("[SheetTable] Dropping rows for file {}, selection moved on", id);
                return;
            }
            match result {
                Ok(rows) => set_tasks.set(rows),
                Err(message) => {
                    set_tasks.set(Vec::new());
                    set_load_error.set(Some(message));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <Show when=move || file_id.get().is_some()>
            <div class="sheet-table card">
                <h3>{move || format!("Tasks ({})", tasks.get().len())}</h3>
                <Show when=move || loading.get()>
                    <div class="loading">"Loading..."</div>
                </Show>
                {move || load_error.get().map(|message| view! {
                    <p class="error-text">{message}</p>
                })}
                <table>
                    <thead>
                        <tr>
                            <th>"Task ID"</th>
                            <th>"Title"</th>
                            <th>"Assignee"</th>
                            <th>"Status"</th>
                            <th>"Priority"</th>
                            <th>"Due"</th>
                            <th>"Points"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || tasks.get()
                            key=|task| task.id
                            children=|task| view! {
                                <tr>
                                    <td>{or_dash(task.task_id.as_deref())}</td>
                                    <td>{or_dash(task.title.as_deref())}</td>
                                    <td>{or_dash(task.assignee.as_deref())}</td>
                                    <td>{or_dash(task.status.as_deref())}</td>
                                    <td>{or_dash(task.priority.as_deref())}</td>
                                    <td>{or_dash(task.due_date.as_deref())}</td>
                                    <td>{task.story_points.map(|p| p.to_string()).unwrap_or_default()}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_response_for_previous_file_is_dropped() {
        // File 1 requested, then file 2 selected before 1 answers.
        assert!(!is_current(Some(2), 1));
        assert!(is_current(Some(2), 2));
        assert!(!is_current(None, 2));
    }
}
