//! Results table for the filtered incident list.
//!
//! DESIGN
//! ======
//! The table is stateless: it renders whatever rows it is handed and reports
//! row actions by incident number. The owning page decides what those actions
//! do to the board.

#[cfg(test)]
#[path = "incident_table_test.rs"]
mod incident_table_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use incidents::incident::{Incident, Priority, Status};

/// Incident table, or the empty-state placeholder when `rows` is empty.
/// `filtered` says whether any search or filter is narrowing the rows.
#[component]
pub fn IncidentTable(
    rows: Signal<Vec<Incident>>,
    filtered: Signal<bool>,
    on_advance: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! { <EmptyState hint=empty_state_hint(filtered.get())/> }.into_any();
        }
        view! {
            <table class="incident-table">
                <thead>
                    <tr>
                        <th>"Number"</th>
                        <th>"Summary"</th>
                        <th>"Priority"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|incident| view! { <IncidentRow incident=incident on_advance=on_advance on_delete=on_delete/> })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// One incident row with its advance/delete controls.
#[component]
fn IncidentRow(incident: Incident, on_advance: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let advance_number = incident.number.to_string();
    let delete_number = advance_number.clone();
    let classification = classification_line(&incident);

    view! {
        <tr data-number=incident.number.to_string()>
            <td><strong>{incident.number.to_string()}</strong></td>
            <td>
                <div><strong>{incident.short_description}</strong></div>
                <div>{classification}</div>
                <small>{incident.requested_by}</small>
            </td>
            <td class=priority_cell_class(incident.priority)>{incident.priority.label()}</td>
            <td>
                <span class=status_pill_class(incident.status)>{incident.status.as_str()}</span>
            </td>
            <td class="actions">
                <button data-action="cycle" on:click=move |_| on_advance.run(advance_number.clone())>
                    "Advance Status"
                </button>
                <button data-action="delete" class="danger" on:click=move |_| on_delete.run(delete_number.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Placeholder shown when no incident passes the current filters.
#[component]
fn EmptyState(hint: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"No incidents found"</h3>
            <p>{hint}</p>
        </div>
    }
}

/// Empty-state guidance: loosen the filters, or the board is simply empty.
pub(crate) fn empty_state_hint(filtered: bool) -> &'static str {
    if filtered {
        "Adjust the search or filters to see more incidents."
    } else {
        "Create a new incident or reset to the seed data."
    }
}

/// CSS classes for a status pill, e.g. `status-pill status-InProgress`.
pub(crate) fn status_pill_class(status: Status) -> String {
    format!("status-pill status-{}", status.as_str().replace(' ', ""))
}

/// CSS class for a priority cell, e.g. `priority-1`.
pub(crate) fn priority_cell_class(priority: Priority) -> String {
    format!("priority-{}", priority.as_str())
}

/// Second summary line: `category • assignment group`.
pub(crate) fn classification_line(incident: &Incident) -> String {
    format!("{} \u{2022} {}", incident.category, incident.assignment_group)
}
