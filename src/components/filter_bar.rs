//! Search box, status/priority selects, and the reset-to-seed control.

use leptos::prelude::*;

use incidents::filter::ALL_VALUE;
use incidents::incident::{Priority, Status};

use crate::state::filters::FilterState;

/// Filter controls. Every keystroke or selection updates the shared
/// `FilterState`; nothing here touches the board except `on_reset`.
#[component]
pub fn FilterBar(on_reset: Callback<()>) -> impl IntoView {
    let filters = expect_context::<RwSignal<FilterState>>();

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="filter-bar__search"
                placeholder="Search number, summary, requester, group..."
                prop:value=move || filters.get().search
                on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
            />
            <select
                class="filter-bar__status"
                prop:value=move || filters.get().status.as_value()
                on:change=move |ev| filters.update(|f| f.set_status_value(&event_target_value(&ev)))
            >
                <option value=ALL_VALUE>"All statuses"</option>
                {Status::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                    .collect_view()}
            </select>
            <select
                class="filter-bar__priority"
                prop:value=move || filters.get().priority.as_value()
                on:change=move |ev| filters.update(|f| f.set_priority_value(&event_target_value(&ev)))
            >
                <option value=ALL_VALUE>"All priorities"</option>
                {Priority::ALL
                    .into_iter()
                    .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                    .collect_view()}
            </select>
            <button class="btn filter-bar__reset" on:click=move |_| on_reset.run(())>
                "Reset Seed Data"
            </button>
        </div>
    }
}
