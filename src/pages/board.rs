//! Incident board page: create form, filter controls, and results table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only screen. It turns component callbacks into board
//! mutations; the board persists each mutation before the signal update
//! finishes, so the table and storage never disagree after an action.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;

use incidents::board::LoadSource;
use incidents::incident::{Incident, NewIncident};

use crate::components::filter_bar::FilterBar;
use crate::components::incident_form::IncidentForm;
use crate::components::incident_table::IncidentTable;
use crate::state::board::BoardState;
use crate::state::filters::FilterState;
use crate::util::clock::now_iso;

#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let filters = expect_context::<RwSignal<FilterState>>();

    let rows = Signal::derive(move || {
        let filter = filters.with(FilterState::filter);
        board.with(|b| b.visible(&filter).into_iter().cloned().collect::<Vec<Incident>>())
    });
    let filtered = Signal::derive(move || !filters.with(|f| f.filter().is_unrestricted()));
    let summary = move || results_summary(rows.with(Vec::len), board.with(BoardState::len));
    let notice = move || {
        load_notice(board.with(BoardState::source)).map(|text| view! { <p class="board-page__notice">{text}</p> })
    };

    let on_create = Callback::new(move |draft: NewIncident| {
        let now = now_iso();
        board.update(|b| {
            b.create(draft, &now);
        });
    });
    let on_advance = Callback::new(move |number: String| {
        board.update(|b| {
            b.advance_status(&number);
        });
    });
    let on_delete = Callback::new(move |number: String| {
        board.update(|b| {
            b.delete(&number);
        });
    });
    let on_reset = Callback::new(move |()| {
        let now = now_iso();
        board.update(|b| b.reset_seed(&now));
    });

    view! {
        <main class="board-page">
            <header class="board-page__header">
                <h1>"Incident Board"</h1>
            </header>
            {notice}
            <section class="board-page__create">
                <IncidentForm on_create=on_create/>
            </section>
            <section class="board-page__results">
                <FilterBar on_reset=on_reset/>
                <p class="board-page__summary">{summary}</p>
                <IncidentTable rows=rows filtered=filtered on_advance=on_advance on_delete=on_delete/>
            </section>
        </main>
    }
}

/// Results count line, e.g. `Showing 1 of 2 incidents`.
pub(crate) fn results_summary(visible: usize, total: usize) -> String {
    let noun = if total == 1 { "incident" } else { "incidents" };
    format!("Showing {visible} of {total} {noun}")
}

/// Banner shown when stored incidents were unreadable and the seed set was
/// substituted.
pub(crate) fn load_notice(source: LoadSource) -> Option<&'static str> {
    match source {
        LoadSource::SeedMalformed => Some("Saved incidents could not be read, so the sample incidents are shown."),
        LoadSource::Stored | LoadSource::SeedMissing | LoadSource::Reset => None,
    }
}
