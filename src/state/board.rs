//! Board state: the incident collection backed by browser storage.

use incidents::board::IncidentBoard;
use incidents::config::BoardConfig;

use crate::util::clock::now_iso;
use crate::util::local_storage::BrowserStorage;

/// The board as held in the root `RwSignal` context.
pub type BoardState = IncidentBoard<BrowserStorage>;

/// Load the board from `localStorage`, falling back to the seed set.
pub fn load_board(config: &BoardConfig) -> BoardState {
    IncidentBoard::load(BrowserStorage, config, &now_iso())
}
