//! Modal dialog for editing one schedule row.
//!
//! Inputs read and write the dialog draft held in `ScheduleTableState`;
//! nothing reaches the table rows until the parent commits the update.

use leptos::prelude::*;

use crate::state::dialog::DraftField;
use crate::state::schedules::ScheduleTableState;
use crate::state::sort::WEEKDAYS;

/// Dialog shown while a draft is open.
#[component]
pub fn ScheduleEditDialog(
    table: RwSignal<ScheduleTableState>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--schedule"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2 class="dialog__title">"Edit Schedule"</h2>
                <DraftInput table field=DraftField::Note label="Note"/>
                <DraftInput table field=DraftField::Area label="Area"/>
                <div class="dialog__row">
                    <DraftInput table field=DraftField::TimeFrom label="Time From"/>
                    <DraftInput table field=DraftField::TimeTo label="Time To"/>
                    <label class="dialog__label">
                        "Day"
                        <select
                            class="dialog__select"
                            name="day"
                            prop:value=move || table.with(|t| t.dialog.value(DraftField::Day))
                            on:change=move |ev| table.update(|t| t.dialog.edit(DraftField::Day, event_target_value(&ev)))
                        >
                            <option value="">"Select Day"</option>
                            {WEEKDAYS.iter().map(|day| view! { <option value=*day>{*day}</option> }).collect_view()}
                        </select>
                    </label>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Update"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DraftInput(table: RwSignal<ScheduleTableState>, field: DraftField, label: &'static str) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type="text"
                prop:value=move || table.with(|t| t.dialog.value(field))
                on:input=move |ev| table.update(|t| t.dialog.edit(field, event_target_value(&ev)))
            />
        </label>
    }
}
