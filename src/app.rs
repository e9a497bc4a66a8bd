//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use incidents::config::BoardConfig;

use crate::pages::board::BoardPage;
use crate::state::board::load_board;
use crate::state::filters::FilterState;

/// Root application component.
///
/// Loads the board from storage once and provides the board, filter state,
/// and configuration to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = BoardConfig::default();
    let board = RwSignal::new(load_board(&config));
    let filters = RwSignal::new(FilterState::default());

    provide_context(config);
    provide_context(board);
    provide_context(filters);

    // Another tab wrote our key: adopt its collection so every tab shows the
    // last write.
    #[cfg(feature = "csr")]
    {
        let listener = window_event_listener(leptos::ev::storage, move |ev| {
            let key = ev.key();
            let targets_us =
                board.with_untracked(|b| crate::util::local_storage::event_targets(key.as_deref(), b.storage_key()));
            if targets_us {
                let now = crate::util::clock::now_iso();
                board.update(|b| b.adopt_external(ev.new_value().as_deref(), &now));
            }
        });
        on_cleanup(move || listener.remove());
    }

    view! {
        <Title text="Incident Board"/>
        <BoardPage/>
    }
}
