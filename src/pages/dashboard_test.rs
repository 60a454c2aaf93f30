use super::*;

fn board(id: i64, url: Option<&str>) -> Board {
    Board {
        id,
        name: format!("Board {id}"),
        description: None,
        url: url.map(str::to_owned),
    }
}

#[test]
fn public_board_count_counts_shared_boards() {
    let boards = vec![board(1, Some("a")), board(2, None), board(3, Some("c"))];
    assert_eq!(public_board_count(&boards), 2);
    assert_eq!(public_board_count(&[]), 0);
}

#[test]
fn recent_boards_are_newest_first_and_capped() {
    let boards: Vec<_> = (1..=6).map(|id| board(id, None)).collect();
    let ids: Vec<_> = recent_boards(&boards).iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![6, 5, 4, 3]);
}
