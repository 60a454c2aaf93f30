use super::*;

fn board(id: i64, name: &str) -> Board {
    Board {
        id,
        name: name.to_owned(),
        description: None,
        url: None,
    }
}

#[test]
fn boards_state_defaults() {
    let s = BoardsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(!s.loaded);
    assert!(s.error.is_none());
}

#[test]
fn finish_load_stores_items() {
    let mut s = BoardsState::default();
    s.begin_load();
    assert!(s.loading);
    s.finish_load(Ok(vec![board(1, "A"), board(2, "B")]));
    assert!(!s.loading);
    assert!(s.loaded);
    assert_eq!(s.items.len(), 2);
}

#[test]
fn failed_load_keeps_previous_items() {
    let mut s = BoardsState::default();
    s.finish_load(Ok(vec![board(1, "A")]));
    s.begin_load();
    s.finish_load(Err("Get boards failed".to_owned()));
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.error.as_deref(), Some("Get boards failed"));
}

#[test]
fn begin_load_clears_previous_error() {
    let mut s = BoardsState::default();
    s.finish_load(Err("boom".to_owned()));
    s.begin_load();
    assert!(s.error.is_none());
}

#[test]
fn upsert_replaces_or_appends() {
    let mut s = BoardsState::default();
    s.finish_load(Ok(vec![board(1, "A")]));
    s.upsert(board(1, "Renamed"));
    s.upsert(board(2, "New"));
    let names: Vec<_> = s.items.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Renamed", "New"]);
}
