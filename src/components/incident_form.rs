//! Create-incident form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form owns its draft and hands a `NewIncident` to the page on submit.
//! Text inputs are `required`, so the browser blocks empty submissions before
//! the handler runs. After a submit the draft resets to configured defaults.

use leptos::prelude::*;

use incidents::config::BoardConfig;
use incidents::incident::{NewIncident, Priority};

use crate::state::draft::DraftState;

#[component]
pub fn IncidentForm(on_create: Callback<NewIncident>) -> impl IntoView {
    let config = expect_context::<BoardConfig>();
    let draft = RwSignal::new(DraftState::new(&config));

    let categories = config.categories.clone();
    let groups = config.assignment_groups.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_create.run(draft.get_untracked().to_new_incident());
        draft.set(DraftState::new(&config));
    };

    view! {
        <form class="incident-form" on:submit=on_submit>
            <h2>"New Incident"</h2>
            <label>
                "Short description"
                <input
                    type="text"
                    name="shortDescription"
                    required=true
                    prop:value=move || draft.get().short_description
                    on:input=move |ev| draft.update(|d| d.short_description = event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    name="description"
                    rows="3"
                    required=true
                    prop:value=move || draft.get().description
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Category"
                <select
                    name="category"
                    prop:value=move || draft.get().category
                    on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                >
                    {categories
                        .into_iter()
                        .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Priority"
                <select
                    name="priority"
                    prop:value=move || draft.get().priority.as_str()
                    on:change=move |ev| draft.update(|d| d.set_priority_value(&event_target_value(&ev)))
                >
                    {Priority::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Assignment group"
                <select
                    name="assignmentGroup"
                    prop:value=move || draft.get().assignment_group
                    on:change=move |ev| draft.update(|d| d.assignment_group = event_target_value(&ev))
                >
                    {groups
                        .into_iter()
                        .map(|g| view! { <option value=g.clone()>{g.clone()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Requested by"
                <input
                    type="text"
                    name="requestedBy"
                    required=true
                    prop:value=move || draft.get().requested_by
                    on:input=move |ev| draft.update(|d| d.requested_by = event_target_value(&ev))
                />
            </label>
            <button type="submit" class="btn btn--primary">
                "Create Incident"
            </button>
        </form>
    }
}
