use super::*;
use crate::filter::{PriorityFilter, StatusFilter};
use crate::incident::Priority;
use crate::seed::SEED_LEN;
use crate::store::{MemoryStore, encode_incidents};

const NOW: &str = "2024-01-01T00:00:00.000Z";
const LATER: &str = "2024-06-01T09:30:00.000Z";

fn config() -> BoardConfig {
    BoardConfig::default()
}

fn fresh_board() -> IncidentBoard<MemoryStore> {
    IncidentBoard::load(MemoryStore::new(), &config(), NOW)
}

fn stored(board: &IncidentBoard<MemoryStore>) -> Vec<Incident> {
    let raw = board.store().get(board.storage_key()).unwrap();
    decode_incidents(raw).unwrap()
}

fn draft(short: &str) -> NewIncident {
    NewIncident {
        short_description: short.to_owned(),
        description: "Something broke".to_owned(),
        category: "Software".to_owned(),
        priority: Priority::High,
        assignment_group: "Service Desk".to_owned(),
        requested_by: "Alex Kim".to_owned(),
    }
}

fn numbers(board: &IncidentBoard<MemoryStore>) -> Vec<&str> {
    board.incidents().iter().map(|i| i.number.as_str()).collect()
}

// =============================================================
// Load
// =============================================================

#[test]
fn load_without_stored_value_uses_seed() {
    let board = fresh_board();
    assert_eq!(board.source(), LoadSource::SeedMissing);
    assert_eq!(numbers(&board), vec!["INC001001", "INC001002"]);
    assert!(board.incidents().iter().all(|i| i.created_at == NOW));
}

#[test]
fn load_does_not_write() {
    let board = fresh_board();
    assert!(board.store().get(board.storage_key()).is_none());
}

#[test]
fn load_reads_stored_collection() {
    let mut custom = seed_incidents(NOW);
    custom.truncate(1);
    custom[0].short_description = "Stored copy".into();
    let raw = encode_incidents(&custom).unwrap();
    let board = IncidentBoard::load(MemoryStore::with_entry(&config().storage_key, &raw), &config(), LATER);
    assert_eq!(board.source(), LoadSource::Stored);
    assert_eq!(board.incidents(), custom.as_slice());
}

#[test]
fn load_with_malformed_value_falls_back_to_seed() {
    let store = MemoryStore::with_entry(&config().storage_key, "{definitely not json");
    let board = IncidentBoard::load(store, &config(), NOW);
    assert_eq!(board.source(), LoadSource::SeedMalformed);
    assert_eq!(board.len(), SEED_LEN);
}

#[test]
fn load_honours_configured_storage_key() {
    let cfg = BoardConfig { storage_key: "alt-key".to_owned(), ..BoardConfig::default() };
    let store = MemoryStore::with_entry("alt-key", "[]");
    let board = IncidentBoard::load(store, &cfg, NOW);
    assert_eq!(board.source(), LoadSource::Stored);
    assert!(board.is_empty());
}

// =============================================================
// Create
// =============================================================

#[test]
fn create_after_single_record_yields_next_number() {
    let mut only = seed_incidents(NOW);
    only.remove(0);
    let raw = encode_incidents(&only).unwrap();
    let mut board = IncidentBoard::load(MemoryStore::with_entry(&config().storage_key, &raw), &config(), NOW);
    assert_eq!(board.create(draft("Laptop"), LATER).as_str(), "INC001003");
}

#[test]
fn create_prepends_new_record_with_new_status() {
    let mut board = fresh_board();
    let number = board.create(draft("  Laptop will not boot "), LATER);
    let first = &board.incidents()[0];
    assert_eq!(first.number, number);
    assert_eq!(first.status, Status::New);
    assert_eq!(first.short_description, "Laptop will not boot");
    assert_eq!(first.created_at, LATER);
    assert_eq!(board.len(), SEED_LEN + 1);
}

#[test]
fn create_numbers_are_strictly_increasing() {
    let mut board = fresh_board();
    let mut last = board.incidents().iter().filter_map(|i| i.number.sequence()).max().unwrap();
    for n in 0..5 {
        let number = board.create(draft(&format!("ticket {n}")), LATER);
        let seq = number.sequence().unwrap();
        assert!(seq > last);
        last = seq;
    }
}

#[test]
fn create_after_widest_u64_number_widens_and_survives_restart() {
    let mut existing = seed_incidents(NOW);
    existing[0].number = IncidentNumber::from("INC18446744073709551615");
    let store = MemoryStore::with_entry(&config().storage_key, &encode_incidents(&existing).unwrap());
    let mut board = IncidentBoard::load(store, &config(), NOW);

    let number = board.create(draft("after the max"), LATER);
    assert_eq!(number.as_str(), "INC18446744073709551616");
    assert!(number.sequence() > existing[0].number.sequence());

    let restarted = IncidentBoard::load(board.store().clone(), &config(), NOW);
    assert_eq!(restarted.source(), LoadSource::Stored);
    assert_eq!(restarted.len(), SEED_LEN + 1);
}

#[test]
fn create_on_empty_board_starts_at_floor_plus_one() {
    let store = MemoryStore::with_entry(&config().storage_key, "[]");
    let mut board = IncidentBoard::load(store, &config(), NOW);
    assert_eq!(board.create(draft("first"), NOW).as_str(), "INC001001");
}

#[test]
fn create_persists_collection() {
    let mut board = fresh_board();
    board.create(draft("Printer"), LATER);
    assert_eq!(stored(&board), board.incidents());
}

// =============================================================
// Advance status
// =============================================================

#[test]
fn advance_cycles_status_and_persists() {
    let mut board = fresh_board();
    assert_eq!(board.advance_status("INC001002"), Some(Status::InProgress));
    assert_eq!(board.advance_status("INC001002"), Some(Status::Resolved));
    assert_eq!(board.advance_status("INC001002"), Some(Status::New));
    assert_eq!(stored(&board), board.incidents());
}

#[test]
fn advance_resolved_record_returns_to_new() {
    let mut board = fresh_board();
    board.advance_status("INC001001");
    assert_eq!(board.get("INC001001").unwrap().status, Status::Resolved);
    assert_eq!(board.advance_status("INC001001"), Some(Status::New));
}

#[test]
fn advance_touches_only_the_target() {
    let mut board = fresh_board();
    let other_before = board.get("INC001001").unwrap().clone();
    board.advance_status("INC001002");
    assert_eq!(board.get("INC001001").unwrap(), &other_before);
}

#[test]
fn advance_unknown_number_changes_nothing() {
    let mut board = fresh_board();
    let before = board.incidents().to_vec();
    assert_eq!(board.advance_status("INC999999"), None);
    assert_eq!(board.incidents(), before.as_slice());
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_removes_exactly_one_record() {
    let mut board = fresh_board();
    let keep = board.get("INC001002").unwrap().clone();
    assert!(board.delete("INC001001"));
    assert_eq!(board.incidents(), std::slice::from_ref(&keep));
    assert_eq!(stored(&board), vec![keep]);
}

#[test]
fn delete_unknown_number_removes_nothing() {
    let mut board = fresh_board();
    let before = board.incidents().to_vec();
    assert!(!board.delete("INC000000"));
    assert_eq!(board.incidents(), before.as_slice());
}

#[test]
fn delete_all_then_create_restarts_numbering_at_floor() {
    let mut board = fresh_board();
    board.delete("INC001001");
    board.delete("INC001002");
    assert!(board.is_empty());
    assert_eq!(board.create(draft("again"), LATER).as_str(), "INC001001");
}

// =============================================================
// Reset seed
// =============================================================

#[test]
fn reset_seed_restores_exactly_two_seed_records() {
    let mut board = fresh_board();
    board.create(draft("a"), LATER);
    board.delete("INC001001");
    board.advance_status("INC001002");
    board.reset_seed(LATER);
    assert_eq!(board.incidents(), seed_incidents(LATER).as_slice());
    assert_eq!(board.source(), LoadSource::Reset);
    assert_eq!(stored(&board), seed_incidents(LATER));
}

// =============================================================
// Persistence failures and external writes
// =============================================================

#[test]
fn failed_writes_keep_memory_authoritative() {
    let mut store = MemoryStore::new();
    store.reject_writes = true;
    let mut board = IncidentBoard::load(store, &config(), NOW);
    let number = board.create(draft("still here"), LATER);
    assert!(board.get(number.as_str()).is_some());
    assert!(board.store().get(board.storage_key()).is_none());
}

#[test]
fn adopt_external_replaces_collection_without_writing() {
    let mut board = fresh_board();
    let mut theirs = seed_incidents(LATER);
    theirs[0].status = Status::Resolved;
    let raw = encode_incidents(&theirs).unwrap();
    board.adopt_external(Some(&raw), LATER);
    assert_eq!(board.incidents(), theirs.as_slice());
    assert_eq!(board.source(), LoadSource::Stored);
    assert!(board.store().get(board.storage_key()).is_none());
}

#[test]
fn adopt_external_falls_back_to_seed() {
    let mut board = fresh_board();
    board.create(draft("mine"), LATER);
    board.adopt_external(Some("garbage"), LATER);
    assert_eq!(board.source(), LoadSource::SeedMalformed);
    assert_eq!(board.incidents(), seed_incidents(LATER).as_slice());
    board.adopt_external(None, LATER);
    assert_eq!(board.source(), LoadSource::SeedMissing);
}

#[test]
fn restart_reads_back_persisted_collection() {
    let mut board = fresh_board();
    board.create(draft("persisted"), LATER);
    let expected = board.incidents().to_vec();
    let restarted = IncidentBoard::load(board.store().clone(), &config(), NOW);
    assert_eq!(restarted.source(), LoadSource::Stored);
    assert_eq!(restarted.incidents(), expected.as_slice());
}

// =============================================================
// Visible
// =============================================================

#[test]
fn visible_applies_filter_without_mutation() {
    let board = fresh_board();
    let filter = IncidentFilter::new("crm", StatusFilter::Only(Status::New), PriorityFilter::All);
    let visible = board.visible(&filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].number.as_str(), "INC001002");
    assert_eq!(board.len(), SEED_LEN);
}
