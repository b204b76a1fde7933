//! Integration tests for the depth chart store

use nfl_depth_chart::{
    chart::{DepthChartStore, Player, EMPTY_CHART_MESSAGE},
    DepthChartError, Position,
};

fn qb() -> Position {
    Position::new("QB")
}

fn names(store: &DepthChartStore, position: &Position) -> Vec<String> {
    store
        .players(position)
        .unwrap()
        .iter()
        .map(|p| p.name.clone())
        .collect()
}

fn create_store_abc() -> DepthChartStore {
    let mut store = DepthChartStore::new();
    store.add_player(&qb(), Player::new(1, "A"), None).unwrap();
    store.add_player(&qb(), Player::new(2, "B"), None).unwrap();
    store.add_player(&qb(), Player::new(3, "C"), None).unwrap();
    store
}

#[test]
fn test_add_to_new_position() {
    let mut store = DepthChartStore::new();
    store.add_player(&qb(), Player::new(12, "Tom Brady"), None).unwrap();

    assert_eq!(store.positions().collect::<Vec<_>>(), vec![&qb()]);
    assert_eq!(store.players(&qb()).unwrap(), &[Player::new(12, "Tom Brady")]);
}

#[test]
fn test_second_player_at_depth_one_becomes_starter() {
    let mut store = DepthChartStore::new();
    store.add_player(&qb(), Player::new(12, "Tom Brady"), None).unwrap();
    store
        .add_player(&qb(), Player::new(11, "Blaine Gabbert"), Some(1))
        .unwrap();

    assert_eq!(names(&store, &qb()), vec!["Blaine Gabbert", "Tom Brady"]);
}

#[test]
fn test_out_of_range_depths_append() {
    for depth in [None, Some(0), Some(-1), Some(3), Some(4), Some(10)] {
        let mut store = create_store_abc();
        store.add_player(&qb(), Player::new(4, "D"), depth).unwrap();

        assert_eq!(
            names(&store, &qb()),
            vec!["A", "B", "C", "D"],
            "depth {:?} should append",
            depth
        );
    }
}

#[test]
fn test_in_range_depths_insert() {
    let mut store = create_store_abc();
    store.add_player(&qb(), Player::new(4, "D"), Some(2)).unwrap();
    assert_eq!(names(&store, &qb()), vec!["A", "D", "B", "C"]);

    let mut store = create_store_abc();
    store.add_player(&qb(), Player::new(4, "D"), Some(1)).unwrap();
    assert_eq!(names(&store, &qb()), vec!["D", "A", "B", "C"]);
}

#[test]
fn test_duplicate_number_fails() {
    let mut store = create_store_abc();
    let err = store
        .add_player(&qb(), Player::new(2, "B again"), None)
        .unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, DepthChartError::DuplicatePlayer { .. }));
    assert!(message.contains("Player Number: 2"));
    assert!(message.contains("Player Name: B again"));
    assert!(message.contains("Position QB"));
    assert_eq!(names(&store, &qb()), vec!["A", "B", "C"]);
}

#[test]
fn test_remove_from_missing_position_fails() {
    let mut store = create_store_abc();
    let err = store
        .remove_player(&Position::new("RB"), &Player::new(1, "A"))
        .unwrap_err();

    match err {
        DepthChartError::PositionNotFound { position } => assert_eq!(position.as_str(), "RB"),
        other => panic!("Expected PositionNotFound, got {:?}", other),
    }
}

#[test]
fn test_remove_missing_player_returns_empty() {
    let mut store = create_store_abc();
    let removed = store.remove_player(&qb(), &Player::new(99, "Z")).unwrap();

    assert!(removed.is_empty());
    assert_eq!(names(&store, &qb()), vec!["A", "B", "C"]);
}

#[test]
fn test_remove_present_player_shifts_backups_up() {
    let mut store = create_store_abc();
    let removed = store.remove_player(&qb(), &Player::new(1, "A")).unwrap();

    assert_eq!(removed, vec![Player::new(1, "A")]);
    assert_eq!(names(&store, &qb()), vec!["B", "C"]);
    assert_eq!(
        store.get_backups(&qb(), &Player::new(2, "B")).unwrap(),
        vec![Player::new(3, "C")]
    );
}

#[test]
fn test_backups_of_last_player_is_empty() {
    let store = create_store_abc();
    assert!(store.get_backups(&qb(), &Player::new(3, "C")).unwrap().is_empty());
}

#[test]
fn test_backups_of_unknown_player_is_empty() {
    let store = create_store_abc();
    assert!(store.get_backups(&qb(), &Player::new(42, "X")).unwrap().is_empty());
}

#[test]
fn test_backups_of_depth_three_in_five() {
    let mut store = DepthChartStore::new();
    for (number, name) in [(1, "A"), (2, "B"), (3, "C"), (4, "D")] {
        store.add_player(&qb(), Player::new(number, name), None).unwrap();
    }
    store.add_player(&qb(), Player::new(5, "E"), Some(3)).unwrap();
    assert_eq!(names(&store, &qb()), vec!["A", "B", "E", "C", "D"]);

    let backups = store.get_backups(&qb(), &Player::new(5, "E")).unwrap();
    assert_eq!(backups, vec![Player::new(3, "C"), Player::new(4, "D")]);
}

#[test]
fn test_backups_on_missing_position_fails() {
    let store = create_store_abc();
    let result = store.get_backups(&Position::new("TE"), &Player::new(1, "A"));
    assert!(matches!(result, Err(DepthChartError::PositionNotFound { .. })));
}

#[test]
fn test_render_empty_chart() {
    assert_eq!(
        DepthChartStore::new().render_full_chart(),
        "No results included in NFL Depth Chart"
    );
    assert_eq!(DepthChartStore::default().render_full_chart(), EMPTY_CHART_MESSAGE);
}

#[test]
fn test_render_one_player() {
    let mut store = DepthChartStore::new();
    store.add_player(&qb(), Player::new(12, "Tom"), None).unwrap();

    let rendered = store.render_full_chart();
    assert!(rendered.starts_with("Position\tNo.\tPlayer 1\t\n"));
    assert!(rendered.contains("QB\t\t12\tTom\t"));
}

#[test]
fn test_round_trip_explicit_depths() {
    let mut store = DepthChartStore::new();
    for depth in 1..=6u32 {
        store
            .add_player(&qb(), Player::new(depth, format!("Player {}", depth)), Some(depth as i32))
            .unwrap();
    }
    assert_eq!(store.len(), 6);

    for number in 1..=6u32 {
        let removed = store.remove_player(&qb(), &Player::new(number, "")).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].number.as_u32(), number);
    }

    assert!(store.is_empty());
    assert_eq!(store.players(&qb()).unwrap().len(), 0);
}
