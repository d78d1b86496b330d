//! Schedules page: loads the list from the API and hosts the table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the table's data source. Each (re)load replaces the snapshot
//! signal; the table merges it into its own state, so rows deleted or edited
//! locally are not reset by a refresh.

use leptos::prelude::*;

use crate::components::schedule_table::ScheduleTable;
use crate::config::ScheduleConfig;
use crate::net::types::ScheduleRecord;

/// Route page for `/`.
#[component]
pub fn SchedulesPage() -> impl IntoView {
    let config = expect_context::<ScheduleConfig>();
    let schedules = RwSignal::new(Vec::<ScheduleRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    load_schedules(config.api_base.clone(), schedules, loading, error);

    let on_refresh = move |_| load_schedules(config.api_base.clone(), schedules, loading, error);

    view! {
        <div class="schedules-page">
            <header class="schedules-page__header toolbar">
                <span class="toolbar__title">"Schedules"</span>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__refresh" on:click=on_refresh disabled=move || loading.get()>
                    "Refresh"
                </button>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="schedules-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || loading.get() && schedules.with(Vec::is_empty)>
                <p class="schedules-page__loading">"Loading schedules..."</p>
            </Show>
            <ScheduleTable schedules=schedules/>
        </div>
    }
}

fn load_schedules(
    api_base: String,
    schedules: RwSignal<Vec<ScheduleRecord>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "hydrate")]
    {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_schedules(&api_base).await {
                Ok(items) => {
                    error.set(None);
                    schedules.set(items);
                }
                Err(e) => {
                    leptos::logging::warn!("schedule list fetch failed: {e}");
                    error.set(Some("Failed to load schedules.".to_owned()));
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (api_base, schedules, loading, error);
}
