use shogiban::{perft, Coord, Kind, Position, Side};

fn coord(row: u8, col: u8) -> Coord {
    Coord::new(row, col).expect("valid coord")
}

#[test]
fn test_standard_position() {
    let pos = Position::new();
    assert_eq!(perft(&pos, 0), 1);
    assert_eq!(perft(&pos, 1), 30);
    assert_eq!(perft(&pos, 2), 900);
}

#[test]
fn test_both_sides_move_alike() {
    let mut pos = Position::new();
    pos.set_turn(Side::Backward);
    assert_eq!(perft(&pos, 1), 30);
}

#[test]
fn test_lone_kings() {
    let mut pos = Position::empty();
    pos.add_piece(Kind::King.at(Side::Forward, coord(8, 4))).expect("free tile");
    pos.add_piece(Kind::King.at(Side::Backward, coord(0, 4))).expect("free tile");

    // 5 king moves from the back rank, answered by 5 each.
    assert_eq!(perft(&pos, 1), 5);
    assert_eq!(perft(&pos, 2), 25);
}

#[test]
fn test_game_over_paths_are_pruned() {
    let mut pos = Position::empty();
    pos.add_piece(Kind::Rook.at(Side::Forward, coord(8, 0))).expect("free tile");
    pos.add_piece(Kind::King.at(Side::Forward, coord(8, 8))).expect("free tile");
    pos.add_piece(Kind::King.at(Side::Backward, coord(0, 0))).expect("free tile");

    // Rook: 8 up the file (the last captures the king), 7 along the rank.
    // King: 3.
    assert_eq!(perft(&pos, 1), 18);

    // The capturing path ends the game and is not extended.
    let mut after_capture = pos.clone();
    after_capture.play(coord(8, 0), coord(0, 0)).expect("capture");
    assert!(after_capture.outcome().is_some());
}
