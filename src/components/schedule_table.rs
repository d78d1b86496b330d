//! Sortable schedule table with row delete and edit dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The parent passes the latest server snapshot as a signal. The table keeps
//! its own `ScheduleTableState`, merges each snapshot into it, and runs
//! delete/update through `util::schedule_actions`.

use leptos::prelude::*;

use crate::components::schedule_edit_dialog::ScheduleEditDialog;
use crate::config::ScheduleConfig;
use crate::net::api::HttpScheduleService;
use crate::net::types::{ScheduleId, ScheduleRecord};
use crate::state::schedules::ScheduleTableState;
use crate::state::sort::{SortField, SortOrder};
use crate::state::toast::{ToastSink, ToastState};

/// Schedule list with sort controls, per-row delete, and click-to-edit.
///
/// `close` runs after a successful delete, e.g. to collapse a containing panel.
#[component]
pub fn ScheduleTable(
    #[prop(into)] schedules: Signal<Vec<ScheduleRecord>>,
    #[prop(optional)] close: Option<Callback<()>>,
) -> impl IntoView {
    let config = expect_context::<ScheduleConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let sink = ToastSink { toasts, duration_ms: config.toast_duration_ms };
    let api_base = config.api_base;

    let table = RwSignal::new(ScheduleTableState::with_items(schedules.get_untracked()));

    Effect::new(move || {
        let incoming = schedules.get();
        table.update(|t| t.merge_incoming(&incoming));
    });

    let on_sort = Callback::new(move |field: SortField| {
        table.update(|t| {
            t.sort_by(field);
        });
    });

    let on_delete = Callback::new({
        let api_base = api_base.clone();
        move |id: ScheduleId| spawn_delete(HttpScheduleService::new(api_base.clone()), table, sink, id, close)
    });

    let on_cancel = Callback::new(move |()| table.update(|t| t.dialog.cancel()));
    let on_save = Callback::new(move |()| spawn_update(HttpScheduleService::new(api_base.clone()), table, sink));

    view! {
        <div class="schedule-table">
            <div class="schedule-table__controls">
                <label class="schedule-table__sort-label">
                    "Sort By"
                    <select
                        class="schedule-table__sort-select"
                        prop:value=move || table.with(|t| t.sort_field.map_or("", SortField::as_str))
                        on:change=move |ev| {
                            if let Ok(field) = event_target_value(&ev).parse::<SortField>() {
                                on_sort.run(field);
                            }
                        }
                    >
                        <option value="">"None"</option>
                        {SortField::ALL
                            .iter()
                            .map(|field| view! { <option value=field.as_str()>{field.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <span class="schedule-table__sort-caption">{move || table.with(ScheduleTableState::sort_caption)}</span>
            </div>

            <div class="schedule-table__scroll">
                <table class="schedule-table__table">
                    <thead>
                        <tr>
                            <SortHeader table field=SortField::Note label="NOTE" on_sort/>
                            <SortHeader table field=SortField::Area label="AREA" on_sort/>
                            <SortHeader table field=SortField::Day label="DAY" on_sort/>
                            <SortHeader table field=SortField::Time label="TIME" on_sort/>
                            <th class="schedule-table__head">"ACTIONS"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            table
                                .with(|t| t.items.clone())
                                .into_iter()
                                .map(|record| view! { <ScheduleRow table record on_delete/> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || table.with(|t| t.dialog.is_open())>
                <ScheduleEditDialog table on_cancel on_save/>
            </Show>
        </div>
    }
}

#[component]
fn SortHeader(
    table: RwSignal<ScheduleTableState>,
    field: SortField,
    label: &'static str,
    on_sort: Callback<SortField>,
) -> impl IntoView {
    let arrow = move || {
        table.with(|t| t.sort_indicator(field)).map(|order| match order {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        })
    };

    view! {
        <th class="schedule-table__head schedule-table__head--sortable" on:click=move |_| on_sort.run(field)>
            <span class="schedule-table__head-label">{label}</span>
            <span class="schedule-table__sort-arrow">{arrow}</span>
        </th>
    }
}

#[component]
fn ScheduleRow(
    table: RwSignal<ScheduleTableState>,
    record: ScheduleRecord,
    on_delete: Callback<ScheduleId>,
) -> impl IntoView {
    let open_id = record.id.clone();
    let delete_id = record.id.clone();
    let busy_id = record.id.clone();
    let busy = move || table.with(|t| t.is_deleting(&busy_id));
    let time_window = record.time_window();

    view! {
        <tr
            class="schedule-table__row"
            on:click=move |_| {
                table
                    .update(|t| {
                        t.open_editor(&open_id);
                    })
            }
        >
            <td class="schedule-table__cell">
                <div class="schedule-table__truncate" title=record.note.clone()>{record.note.clone()}</div>
            </td>
            <td class="schedule-table__cell">
                <div class="schedule-table__truncate" title=record.area.clone()>{record.area.clone()}</div>
            </td>
            <td class="schedule-table__cell">
                <div class="schedule-table__truncate" title=record.day.clone()>{record.day.clone()}</div>
            </td>
            <td class="schedule-table__cell">{time_window}</td>
            <td class="schedule-table__cell schedule-table__actions">
                <button
                    class="btn btn--icon schedule-table__delete"
                    disabled=busy
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_delete.run(delete_id.clone());
                    }
                    title="Delete schedule"
                    aria-label="Delete schedule"
                >
                    "🗑"
                </button>
            </td>
        </tr>
    }
}

fn spawn_delete(
    service: HttpScheduleService,
    table: RwSignal<ScheduleTableState>,
    sink: ToastSink,
    id: ScheduleId,
    close: Option<Callback<()>>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let on_removed = move || {
                if let Some(close) = close {
                    close.run(());
                }
            };
            let _ =
                crate::util::schedule_actions::remove_schedule(&service, &table, &sink, Some(&id), on_removed).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (service, table, sink, id, close);
}

fn spawn_update(service: HttpScheduleService, table: RwSignal<ScheduleTableState>, sink: ToastSink) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let _ = crate::util::schedule_actions::commit_schedule_update(&service, &table, &sink).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (service, table, sink);
}
